//! Trace-subsystem error type.

use thiserror::Error;

use mob_core::{NodeId, WalkerId};
use mob_process::ProcessError;
use mob_topo::TopoError;
use mob_walk::WalkError;

/// Errors produced by `mob-trace`.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("walker {walker}: drawn speed {speed} is not positive")]
    InvalidSpeed { walker: WalkerId, speed: f64 },

    #[error("no street between consecutive path nodes {a} and {b}")]
    MissingStreet { a: NodeId, b: NodeId },

    #[error("path node {0} is not in the topology")]
    UnknownPathNode(NodeId),

    #[error("scenario has no entry points")]
    NoEntries,

    #[error("{streams} creation streams supplied for {entries} entry points")]
    EntryCountMismatch { entries: usize, streams: usize },

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error(transparent)]
    Topo(#[from] TopoError),

    #[error(transparent)]
    Walk(#[from] WalkError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `mob-trace`.
pub type TraceResult<T> = Result<T, TraceError>;
