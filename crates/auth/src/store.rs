//! Auth store: the account directory and the active session.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use entities::User;
use serde::{Deserialize, Serialize};
use storage::KeyValueStorage;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{password, AuthError, AuthResult, Session, MIN_PASSWORD_LEN, MIN_USERNAME_LEN};

/// Storage key holding the serialized account directory.
pub const USER_DIRECTORY_KEY: &str = "emberforge-users";

/// Storage key holding the persisted slice of the session.
pub const SESSION_KEY: &str = "emberforge-auth";

/// Delay applied to register and login so callers experience the
/// asynchrony of a remote identity service.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(500);

/// One account in the directory: the public profile plus the salted
/// password digest. The digest never leaves this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DirectoryEntry {
    user: User,
    password_hash: String,
}

/// Partial profile edit. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    /// New display name.
    pub username: Option<String>,
    /// New avatar reference.
    pub avatar: Option<String>,
}

/// Owns the account directory (keyed by email) and the active [`Session`].
///
/// Register and login record their failure as a user-visible message on the
/// session in addition to returning it, so a form can render the last error
/// without threading the `Result` through. Directory and session mutations
/// are written through to storage; a failed write is logged and swallowed.
pub struct AuthStore {
    storage: Arc<dyn KeyValueStorage>,
    directory: HashMap<String, DirectoryEntry>,
    session: Session,
    latency: Duration,
}

impl AuthStore {
    /// Opens the store, eagerly reading the directory and the persisted
    /// session. Absent keys yield empty defaults; corrupt data is an error.
    pub fn open(storage: Arc<dyn KeyValueStorage>) -> AuthResult<Self> {
        let directory: HashMap<String, DirectoryEntry> = match storage.get(USER_DIRECTORY_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => HashMap::new(),
        };
        let session: Session = match storage.get(SESSION_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Session::default(),
        };
        info!(
            accounts = directory.len(),
            signed_in = session.is_authenticated,
            "opened auth store"
        );
        Ok(Self {
            storage,
            directory,
            session,
            latency: SIMULATED_LATENCY,
        })
    }

    /// Overrides the simulated call latency. Tests pass `Duration::ZERO`.
    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    // ========== Account Operations ==========

    /// Creates an account and signs it in.
    ///
    /// Checks run in order: an email that already has an account wins over
    /// a short username, which wins over a short password. Only the first
    /// failure is reported.
    pub async fn register(&mut self, username: &str, email: &str, password: &str) -> AuthResult<User> {
        self.begin_call().await;

        if self.directory.contains_key(email) {
            return Err(self.fail(AuthError::DuplicateEmail));
        }
        if username.chars().count() < MIN_USERNAME_LEN {
            return Err(self.fail(AuthError::UsernameTooShort));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(self.fail(AuthError::PasswordTooShort));
        }

        let user = User::new(username, email);
        self.directory.insert(
            email.to_string(),
            DirectoryEntry {
                user: user.clone(),
                password_hash: password::hash_password(password),
            },
        );
        self.persist_directory();
        info!(email, "registered account");
        self.sign_in(user.clone());
        Ok(user)
    }

    /// Signs an existing account in.
    pub async fn login(&mut self, email: &str, password: &str) -> AuthResult<User> {
        self.begin_call().await;

        let Some(entry) = self.directory.get(email).cloned() else {
            return Err(self.fail(AuthError::UnknownEmail));
        };
        if !password::verify_password(password, &entry.password_hash) {
            return Err(self.fail(AuthError::BadCredentials));
        }
        self.sign_in(entry.user.clone());
        Ok(entry.user)
    }

    /// Clears the session. The account itself is untouched.
    pub fn logout(&mut self) {
        self.session.user = None;
        self.session.is_authenticated = false;
        self.session.error = None;
        self.persist_session();
    }

    /// Drops the error message from the session.
    pub fn clear_error(&mut self) {
        self.session.error = None;
    }

    // ========== Signed-in User Operations ==========

    /// Applies a partial profile edit to the signed-in user.
    pub fn update_profile(&mut self, update: ProfileUpdate) {
        self.mutate_user(|user| {
            if let Some(username) = update.username {
                user.username = username;
            }
            if let Some(avatar) = update.avatar {
                user.avatar = Some(avatar);
            }
        });
    }

    /// Records a build on the signed-in user's owned list. Already-present
    /// ids are not duplicated.
    pub fn add_build_to_user(&mut self, build_id: Uuid) {
        self.mutate_user(|user| {
            if !user.builds.contains(&build_id) {
                user.builds.push(build_id);
            }
        });
    }

    /// Removes a build from the signed-in user's owned list.
    pub fn remove_build_from_user(&mut self, build_id: Uuid) {
        self.mutate_user(|user| user.builds.retain(|id| *id != build_id));
    }

    /// Records a like. Already-liked ids are not duplicated.
    pub fn like_build(&mut self, build_id: Uuid) {
        self.mutate_user(|user| {
            if !user.liked_builds.contains(&build_id) {
                user.liked_builds.push(build_id);
            }
        });
    }

    /// Removes a like.
    pub fn unlike_build(&mut self, build_id: Uuid) {
        self.mutate_user(|user| user.liked_builds.retain(|id| *id != build_id));
    }

    // ========== Accessors ==========

    /// Returns the session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    /// Returns whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    /// Returns the last recorded error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.session.error.as_deref()
    }

    // ========== Internals ==========

    async fn begin_call(&mut self) {
        self.session.is_loading = true;
        self.session.error = None;
        tokio::time::sleep(self.latency).await;
    }

    fn fail(&mut self, error: AuthError) -> AuthError {
        self.session.is_loading = false;
        self.session.error = Some(error.to_string());
        error
    }

    fn sign_in(&mut self, user: User) {
        self.session = Session {
            user: Some(user),
            is_authenticated: true,
            is_loading: false,
            error: None,
        };
        self.persist_session();
    }

    /// Applies an edit to the signed-in user, writing it back to the
    /// directory entry (when one exists) and the session. No-op when
    /// signed out.
    fn mutate_user(&mut self, edit: impl FnOnce(&mut User)) {
        let Some(user) = self.session.user.as_mut() else {
            return;
        };
        edit(user);
        let updated = user.clone();
        if let Some(entry) = self.directory.get_mut(&updated.email) {
            entry.user = updated;
            self.persist_directory();
        }
        self.persist_session();
    }

    fn persist_directory(&self) {
        if let Err(e) = self.write_json(USER_DIRECTORY_KEY, &self.directory) {
            warn!(error = %e, "failed to persist user directory");
        }
    }

    fn persist_session(&self) {
        if let Err(e) = self.write_json(SESSION_KEY, &self.session) {
            warn!(error = %e, "failed to persist session");
        }
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) -> AuthResult<()> {
        let raw = serde_json::to_string(value)?;
        self.storage.set(key, &raw)?;
        Ok(())
    }
}
