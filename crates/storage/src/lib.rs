//! Persisted key-value storage for Emberforge.
//!
//! This crate provides:
//! - The [`KeyValueStorage`] trait the stores persist through
//! - [`FileStorage`], one JSON text file per key with atomic writes
//! - [`MemoryStorage`], a transient implementation for tests and
//!   session-scoped data

mod error;
mod file;
mod store;

pub use error::*;
pub use file::*;
pub use store::*;
