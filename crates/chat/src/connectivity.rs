//! Connectivity probing.

/// Answers whether the network looks reachable before a send is attempted.
///
/// The real probe is platform-specific and lives with the UI shell; the
/// controller only needs the yes/no answer so an offline send can
/// short-circuit to its substitute reply without issuing a doomed request.
pub trait Connectivity: Send + Sync {
    /// Returns whether the network is believed reachable.
    fn is_online(&self) -> bool;
}

/// Assumes the network is always reachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOnline;

impl Connectivity for AlwaysOnline {
    fn is_online(&self) -> bool {
        true
    }
}
