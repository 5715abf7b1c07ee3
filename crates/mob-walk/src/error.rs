//! Walk-subsystem error type.

use thiserror::Error;

use mob_core::NodeId;

/// Errors produced by `mob-walk`.
///
/// Both variants indicate a routing table that was never validated or was
/// corrupted after validation; they are fatal and never resolved silently.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("no routing entry for ({node}, {prev:?})")]
    MissingEntry { node: NodeId, prev: Option<NodeId> },

    #[error(
        "sampling anomaly at ({node}, {prev:?}): draw {coin} matched {matches} intervals, \
         expected exactly 1"
    )]
    IntervalMismatch { node: NodeId, prev: Option<NodeId>, coin: f64, matches: usize },
}

/// Shorthand result type for `mob-walk`.
pub type WalkResult<T> = Result<T, WalkError>;
