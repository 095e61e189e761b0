//! Static reference data for Emberforge.
//!
//! Read-only hero, skill, and equipment tables with lookup and filter
//! accessors. The build and auth stores never consult these tables; they
//! exist for UI layers and tests, and dangling identifiers in a build are
//! tolerated (they simply render as absent).

mod equipment;
mod heroes;
mod skills;

pub use equipment::*;
pub use heroes::*;
pub use skills::*;
