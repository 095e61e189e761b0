//! User-related entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user. Keyed by email in the backing directory; `id` is the
/// externally visible identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub username: String,
    /// Email address, the directory lookup key.
    pub email: String,
    /// Optional avatar image reference.
    pub avatar: Option<String>,
    /// Identifiers of builds this user owns.
    pub builds: Vec<Uuid>,
    /// Identifiers of builds this user has liked.
    pub liked_builds: Vec<Uuid>,
    /// When this account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with no builds or likes.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            avatar: None,
            builds: Vec::new(),
            liked_builds: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Sets the avatar reference.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}
