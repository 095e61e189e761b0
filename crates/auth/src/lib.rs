//! Simulated identity service for Emberforge.
//!
//! This crate provides:
//! - A persisted account directory keyed by email
//! - Register/login/logout with the session state the UI renders
//! - Profile and build-membership edits written through to the directory
//!
//! There is no real backend. Registration and login run entirely against
//! the local directory, with a short artificial delay so callers exercise
//! the same asynchrony a remote identity service would impose.

mod error;
mod password;
mod session;
mod store;

pub use error::*;
pub use password::{hash_password, verify_password};
pub use session::*;
pub use store::*;

/// Minimum accepted username length, in characters.
pub const MIN_USERNAME_LEN: usize = 3;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;
