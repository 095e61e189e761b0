//! Build lifecycle management for Emberforge.
//!
//! This crate provides:
//! - [`BuildDraft`], the in-progress build being edited
//! - [`BuildStore`], which owns the draft, the persisted saved-build
//!   collection, and a read-only community-build cache
//! - Validated conversion from draft to completed [`entities::Build`]

mod draft;
mod error;
mod store;

pub use draft::*;
pub use error::*;
pub use store::*;
