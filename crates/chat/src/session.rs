//! Chat session controller.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use storage::KeyValueStorage;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    AlwaysOnline, ChatConfig, ChatError, ChatMessage, ChatProfile, ChatResult, Connectivity,
    DecodedResponse, WebhookRequest,
};

/// Reply substituted when no connectivity is detected.
pub const OFFLINE_REPLY: &str =
    "It looks like you're offline. Check your connection and try again.";

/// Reply substituted when the webhook exceeds the response ceiling.
pub const TIMEOUT_REPLY: &str =
    "The assistant is taking too long to respond. Please try again in a moment.";

/// Reply substituted for non-success statuses and transport failures.
pub const UNAVAILABLE_REPLY: &str =
    "The assistant is temporarily unavailable. Please try again later.";

/// Reply substituted when the extracted text is empty after trimming.
pub const EMPTY_REPLY: &str = "I received an empty response. Could you rephrase your question?";

/// Exchanges one message at a time with the assistant webhook.
///
/// The session id is generated at construction and stays stable for the
/// controller's lifetime. The rolling session token starts absent, is
/// captured from the first response that carries one and is overwritten by
/// every later one, then echoed on each subsequent request.
///
/// Every send appends exactly two transcript entries: the user's text
/// (optimistically, before the request goes out) and one assistant reply.
/// Offline, timeout, bad status and transport failures produce substitute
/// replies instead of errors, so the transcript never loses a turn.
pub struct ChatSession {
    config: ChatConfig,
    client: reqwest::Client,
    connectivity: Box<dyn Connectivity>,
    storage: Option<Arc<dyn KeyValueStorage>>,
    session_id: String,
    session_token: Option<String>,
    profile: ChatProfile,
    transcript: Vec<ChatMessage>,
    sending: bool,
}

impl ChatSession {
    /// Creates a session that assumes connectivity.
    pub fn new(config: ChatConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            connectivity: Box::new(AlwaysOnline),
            storage: None,
            session_id: Uuid::new_v4().to_string(),
            session_token: None,
            profile: ChatProfile::default(),
            transcript: Vec::new(),
            sending: false,
        }
    }

    /// Replaces the connectivity probe.
    pub fn with_connectivity(mut self, connectivity: impl Connectivity + 'static) -> Self {
        self.connectivity = Box::new(connectivity);
        self
    }

    /// Sets the visitor profile attached to each request.
    pub fn with_profile(mut self, profile: ChatProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Attaches the session-scoped storage holding collected profile
    /// fields. The stored profile is loaded eagerly; later profile
    /// updates are written through.
    pub fn with_storage(mut self, storage: Arc<dyn KeyValueStorage>) -> ChatResult<Self> {
        self.profile = ChatProfile::load(storage.as_ref())?;
        self.storage = Some(storage);
        Ok(self)
    }

    /// Sends one message and returns the assistant reply that was appended
    /// to the transcript.
    ///
    /// Fails only on the local preconditions: blank input, or a send still
    /// in flight. Network trouble comes back as an `Ok` substitute reply.
    pub async fn send(&mut self, input: &str) -> ChatResult<ChatMessage> {
        if self.sending {
            return Err(ChatError::SendInProgress);
        }
        let text = input.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        self.sending = true;
        self.transcript.push(ChatMessage::user(text));

        let reply = if self.connectivity.is_online() {
            self.exchange(text).await
        } else {
            debug!("offline, skipping webhook call");
            OFFLINE_REPLY.to_string()
        };

        let reply = if reply.trim().is_empty() {
            EMPTY_REPLY.to_string()
        } else {
            reply
        };

        let message = ChatMessage::assistant(reply);
        self.transcript.push(message.clone());
        self.sending = false;
        Ok(message)
    }

    /// Updates the visitor profile for subsequent requests, writing it
    /// through to the attached storage when one is present.
    pub fn set_profile(&mut self, profile: ChatProfile) {
        if let Some(storage) = &self.storage {
            if let Err(e) = profile.save(storage.as_ref()) {
                warn!(error = %e, "failed to persist chat profile");
            }
        }
        self.profile = profile;
    }

    // ========== Accessors ==========

    /// Returns the transcript in order.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Returns this conversation's stable session id.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Returns the rolling session token, once one has been received.
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    /// Returns whether a send is in flight.
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Returns the visitor profile.
    pub fn profile(&self) -> &ChatProfile {
        &self.profile
    }

    // ========== Internals ==========

    /// Runs the webhook exchange and reduces every outcome to reply text.
    async fn exchange(&mut self, text: &str) -> String {
        let request = WebhookRequest {
            chat_input: text.to_string(),
            session_id: self.session_id.clone(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            first_name: self.profile.first_name.clone().unwrap_or_default(),
            user_email: self.profile.email.clone().unwrap_or_default(),
            phone_number: self.profile.phone_number.clone().unwrap_or_default(),
            locality: self.profile.locality.clone().unwrap_or_default(),
            session: self.session_token.clone(),
        };

        let response = self
            .client
            .post(&self.config.webhook_url)
            .timeout(self.config.timeout)
            .json(&request)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                warn!(timeout = ?self.config.timeout, "webhook timed out");
                return TIMEOUT_REPLY.to_string();
            }
            Err(e) => {
                warn!(error = %e, "webhook request failed");
                return UNAVAILABLE_REPLY.to_string();
            }
        };

        if !response.status().is_success() {
            warn!(status = %response.status(), "webhook returned non-success status");
            return UNAVAILABLE_REPLY.to_string();
        }

        // The timeout covers the body read as well, so it can still fire
        // here.
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => {
                warn!(timeout = ?self.config.timeout, "webhook timed out");
                return TIMEOUT_REPLY.to_string();
            }
            Err(e) => {
                warn!(error = %e, "failed to read webhook response");
                return UNAVAILABLE_REPLY.to_string();
            }
        };

        let decoded = DecodedResponse::decode(&body);
        if let Some(token) = decoded.session() {
            debug!("rolling session token updated");
            self.session_token = Some(token.to_string());
        }
        decoded.text().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChatRole;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use axum::http::StatusCode;
    use axum::{routing::post, Json, Router};
    use serde_json::Value;
    use tokio::net::TcpListener;

    struct Offline;

    impl Connectivity for Offline {
        fn is_online(&self) -> bool {
            false
        }
    }

    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/webhook")
    }

    fn capture_router(bodies: Arc<Mutex<Vec<Value>>>) -> Router {
        Router::new().route(
            "/webhook",
            post(move |Json(body): Json<Value>| {
                let bodies = bodies.clone();
                async move {
                    let n = {
                        let mut bodies = bodies.lock().unwrap();
                        bodies.push(body);
                        bodies.len()
                    };
                    Json(serde_json::json!({
                        "response": format!("reply {n}"),
                        "session": format!("tok-{n}"),
                    }))
                }
            }),
        )
    }

    #[tokio::test]
    async fn test_send_appends_user_and_assistant_messages() {
        let router = Router::new().route(
            "/webhook",
            post(|| async { Json(serde_json::json!({"response": "hello"})) }),
        );
        let url = serve(router).await;
        let mut session = ChatSession::new(ChatConfig::new(url));

        let reply = session.send("hi").await.unwrap();

        assert_eq!(reply.role, ChatRole::Assistant);
        assert_eq!(reply.text, "hello");
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript()[0].role, ChatRole::User);
        assert_eq!(session.transcript()[0].text, "hi");
        assert_eq!(session.transcript()[1], reply);
        assert!(!session.is_sending());
    }

    #[tokio::test]
    async fn test_rolling_session_token() {
        let bodies: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
        let url = serve(capture_router(bodies.clone())).await;
        let mut session = ChatSession::new(ChatConfig::new(url));

        assert!(session.session_token().is_none());
        session.send("first").await.unwrap();
        assert_eq!(session.session_token(), Some("tok-1"));

        session.send("second").await.unwrap();
        assert_eq!(session.session_token(), Some("tok-2"));

        let bodies = bodies.lock().unwrap();
        // The first request carries no token at all, the second echoes the
        // one the first response supplied.
        assert!(bodies[0].get("session").is_none());
        assert_eq!(bodies[1]["session"], "tok-1");
        // The locally generated session id stays stable across sends.
        assert_eq!(bodies[0]["sessionId"], bodies[1]["sessionId"]);
        assert_eq!(bodies[0]["sessionId"], session.session_id());
    }

    #[tokio::test]
    async fn test_profile_fields_on_the_wire() {
        let bodies: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
        let url = serve(capture_router(bodies.clone())).await;
        let mut session = ChatSession::new(ChatConfig::new(url)).with_profile(ChatProfile {
            first_name: Some("Ola".to_string()),
            email: Some("ola@example.com".to_string()),
            phone_number: None,
            locality: Some("Bergen".to_string()),
        });

        session.send("hi").await.unwrap();

        let bodies = bodies.lock().unwrap();
        assert_eq!(bodies[0]["chatInput"], "hi");
        assert_eq!(bodies[0]["firstName"], "Ola");
        assert_eq!(bodies[0]["userEmail"], "ola@example.com");
        assert_eq!(bodies[0]["phoneNumber"], "");
        assert_eq!(bodies[0]["locality"], "Bergen");
        assert!(bodies[0]["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[tokio::test]
    async fn test_offline_send_skips_network() {
        let bodies: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
        let url = serve(capture_router(bodies.clone())).await;
        let mut session = ChatSession::new(ChatConfig::new(url)).with_connectivity(Offline);

        let reply = session.send("anyone there?").await.unwrap();

        assert_eq!(reply.text, OFFLINE_REPLY);
        assert_eq!(session.transcript().len(), 2);
        assert!(bodies.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_timeout_substitutes_reply_and_returns_to_idle() {
        let router = Router::new().route(
            "/webhook",
            post(|| async {
                tokio::time::sleep(Duration::from_millis(500)).await;
                Json(serde_json::json!({"response": "too late"}))
            }),
        );
        let url = serve(router).await;
        let mut session = ChatSession::new(
            ChatConfig::new(url).with_timeout(Duration::from_millis(50)),
        );

        let reply = session.send("first").await.unwrap();
        assert_eq!(reply.text, TIMEOUT_REPLY);
        assert!(!session.is_sending());

        // The controller is back at idle; the next send goes through.
        let reply = session.send("second").await.unwrap();
        assert_eq!(reply.text, TIMEOUT_REPLY);
        assert_eq!(session.transcript().len(), 4);
    }

    #[tokio::test]
    async fn test_error_status_substitutes_reply() {
        let router = Router::new().route(
            "/webhook",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "boom") }),
        );
        let url = serve(router).await;
        let mut session = ChatSession::new(ChatConfig::new(url));

        let reply = session.send("hi").await.unwrap();
        assert_eq!(reply.text, UNAVAILABLE_REPLY);
    }

    #[tokio::test]
    async fn test_connection_refused_substitutes_reply() {
        // Bind then drop to get an address nothing is listening on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let mut session = ChatSession::new(ChatConfig::new(format!("http://{addr}/webhook")));

        let reply = session.send("hi").await.unwrap();
        assert_eq!(reply.text, UNAVAILABLE_REPLY);
        assert_eq!(session.transcript().len(), 2);
    }

    #[tokio::test]
    async fn test_plain_text_reply_passes_through() {
        let router = Router::new().route("/webhook", post(|| async { "The forge is hot today." }));
        let url = serve(router).await;
        let mut session = ChatSession::new(ChatConfig::new(url));

        let reply = session.send("hi").await.unwrap();
        assert_eq!(reply.text, "The forge is hot today.");
    }

    #[tokio::test]
    async fn test_unrecognized_body_is_dumped() {
        let router = Router::new().route(
            "/webhook",
            post(|| async { Json(serde_json::json!({"entries": [1, 2]})) }),
        );
        let url = serve(router).await;
        let mut session = ChatSession::new(ChatConfig::new(url));

        let reply = session.send("hi").await.unwrap();
        assert!(reply.text.contains("entries"));
    }

    #[tokio::test]
    async fn test_blank_extracted_reply_is_substituted() {
        let router = Router::new().route(
            "/webhook",
            post(|| async { Json(serde_json::json!({"response": "   "})) }),
        );
        let url = serve(router).await;
        let mut session = ChatSession::new(ChatConfig::new(url));

        let reply = session.send("hi").await.unwrap();
        assert_eq!(reply.text, EMPTY_REPLY);
    }

    #[tokio::test]
    async fn test_rejects_blank_input() {
        let mut session = ChatSession::new(ChatConfig::new("http://localhost:9/webhook"));

        let result = session.send("   \n  ").await;

        assert!(matches!(result, Err(ChatError::EmptyMessage)));
        assert!(session.transcript().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_send_while_one_is_in_flight() {
        let mut session = ChatSession::new(ChatConfig::new("http://localhost:9/webhook"));
        session.sending = true;

        let result = session.send("hi").await;

        assert!(matches!(result, Err(ChatError::SendInProgress)));
        assert!(session.transcript().is_empty());
    }

    #[tokio::test]
    async fn test_profile_written_through_attached_storage() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(storage::MemoryStorage::new());
        let mut session = ChatSession::new(ChatConfig::new("http://localhost:9/webhook"))
            .with_storage(storage.clone())
            .unwrap();
        assert_eq!(session.profile(), &ChatProfile::default());

        let profile = ChatProfile {
            first_name: Some("Ola".to_string()),
            ..ChatProfile::default()
        };
        session.set_profile(profile.clone());

        // A later page load sees the collected fields again.
        let restored = ChatSession::new(ChatConfig::new("http://localhost:9/webhook"))
            .with_storage(storage)
            .unwrap();
        assert_eq!(restored.profile(), &profile);
    }
}
