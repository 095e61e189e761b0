//! Wire format for the assistant webhook.

use serde::Serialize;
use serde_json::Value;

/// Reply-text field names probed in priority order on structured
/// responses.
pub const REPLY_FIELDS: [&str; 5] = ["response", "message", "output", "reply", "text"];

/// Body POSTed to the webhook for each message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    /// The user's message text.
    pub chat_input: String,
    /// Stable id for this page's conversation.
    pub session_id: String,
    /// ISO-8601 submission time.
    pub timestamp: String,
    /// Visitor's first name, empty when not collected.
    pub first_name: String,
    /// Visitor's email, empty when not collected.
    pub user_email: String,
    /// Visitor's phone number, empty when not collected.
    pub phone_number: String,
    /// Visitor's locality, empty when not collected.
    pub locality: String,
    /// Rolling token from a prior response; omitted until one is held.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
}

/// A webhook response body decoded into one of the recognized shapes.
///
/// Decoding happens once at the network boundary. The controller matches
/// on the variant instead of probing field names itself.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedResponse {
    /// Structured body carrying a reply under one of [`REPLY_FIELDS`].
    Text {
        /// The extracted reply.
        text: String,
        /// Rolling session token, when present.
        session: Option<String>,
    },
    /// Structured body with no recognized reply field. The serialized
    /// body stands in as the visible text rather than dropping the reply.
    Unrecognized {
        /// Compact serialization of the whole body.
        dump: String,
        /// Rolling session token, when present.
        session: Option<String>,
    },
    /// Body that is not structured data, used verbatim.
    Plain(String),
}

impl DecodedResponse {
    /// Decodes a raw response body.
    pub fn decode(body: &str) -> Self {
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            return Self::Plain(body.to_string());
        };
        let session = value
            .get("session")
            .and_then(Value::as_str)
            .map(str::to_string);
        if let Some(object) = value.as_object() {
            for field in REPLY_FIELDS {
                if let Some(text) = object.get(field).and_then(Value::as_str) {
                    return Self::Text {
                        text: text.to_string(),
                        session,
                    };
                }
            }
        }
        Self::Unrecognized {
            dump: value.to_string(),
            session,
        }
    }

    /// The visible reply text carried by this response.
    pub fn text(&self) -> &str {
        match self {
            Self::Text { text, .. } => text,
            Self::Unrecognized { dump, .. } => dump,
            Self::Plain(text) => text,
        }
    }

    /// The rolling session token, when the response carried one.
    pub fn session(&self) -> Option<&str> {
        match self {
            Self::Text { session, .. } | Self::Unrecognized { session, .. } => session.as_deref(),
            Self::Plain(_) => None,
        }
    }
}
