//! Core entity definitions for Emberforge.
//!
//! This crate defines all the core data types used across the Emberforge
//! build planner, including entities for builds, heroes, skills, equipment,
//! and users.

mod build;
mod equipment;
mod hero;
mod skill;
mod user;

pub use build::*;
pub use equipment::*;
pub use hero::*;
pub use skill::*;
pub use user::*;
