//! Visitor profile fields attached to webhook requests.

use serde::{Deserialize, Serialize};
use storage::KeyValueStorage;

use crate::ChatResult;

/// Storage key holding the collected profile fields.
pub const CHAT_PROFILE_KEY: &str = "emberforge-chat-profile";

/// Contact fields collected over the course of a conversation. All
/// optional; absent fields go out as empty strings on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatProfile {
    /// Visitor's first name.
    pub first_name: Option<String>,
    /// Visitor's email address.
    pub email: Option<String>,
    /// Visitor's phone number.
    pub phone_number: Option<String>,
    /// Visitor's town or region.
    pub locality: Option<String>,
}

impl ChatProfile {
    /// Loads the stored profile, yielding the default when nothing is
    /// stored.
    pub fn load(storage: &dyn KeyValueStorage) -> ChatResult<Self> {
        match storage.get(CHAT_PROFILE_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Self::default()),
        }
    }

    /// Persists the profile.
    pub fn save(&self, storage: &dyn KeyValueStorage) -> ChatResult<()> {
        let raw = serde_json::to_string(self)?;
        storage.set(CHAT_PROFILE_KEY, &raw)?;
        Ok(())
    }

    /// Removes the persisted profile.
    pub fn clear(storage: &dyn KeyValueStorage) -> ChatResult<()> {
        storage.remove(CHAT_PROFILE_KEY)?;
        Ok(())
    }
}
