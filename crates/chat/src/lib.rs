//! Assistant chat for Emberforge.
//!
//! This crate provides:
//! - A session controller that exchanges one message at a time with the
//!   assistant webhook
//! - Decoding of the several response shapes the webhook is known to emit
//! - The visitor profile fields attached to every request
//!
//! The controller never surfaces a raw network failure. Offline, timeout,
//! bad status and transport errors all come back as ordinary assistant
//! replies with fixed wording, so the conversation keeps flowing.

mod config;
mod connectivity;
mod error;
mod message;
mod profile;
mod session;
mod wire;

pub use config::*;
pub use connectivity::*;
pub use error::*;
pub use message::*;
pub use profile::*;
pub use session::*;
pub use wire::*;
