//! Sign-in state mirrored by the UI.

use entities::User;
use serde::{Deserialize, Serialize};

/// The active sign-in state.
///
/// `user` and `is_authenticated` survive a restart; the in-flight flag and
/// the error banner are transient and skipped on serialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    /// The signed-in user, if any.
    pub user: Option<User>,
    /// Mirrors `user.is_some()`; kept explicit because it is persisted.
    pub is_authenticated: bool,
    /// True while a register or login call is outstanding.
    #[serde(skip)]
    pub is_loading: bool,
    /// Last user-visible error message. Only one is held at a time.
    #[serde(skip)]
    pub error: Option<String>,
}
