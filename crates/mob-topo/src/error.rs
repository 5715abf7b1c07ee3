//! Topology-subsystem error type.
//!
//! Everything here is fatal: a failed `add_street` or a validator hit means
//! the input data is bad, and the error carries the offending ids so the
//! scenario file can be fixed.  No retries anywhere.

use thiserror::Error;

use mob_core::{NodeId, StreetId};

/// Errors produced by `mob-topo`.
#[derive(Debug, Error)]
pub enum TopoError {
    // ── Topology integrity ────────────────────────────────────────────────
    #[error("street {0} is already in the topology")]
    DuplicateStreet(StreetId),

    #[error("street {street}: nodes {a} and {b} are already adjacent")]
    AlreadyAdjacent { street: StreetId, a: NodeId, b: NodeId },

    #[error("street {street}: both endpoints are node {node}")]
    SelfLoop { street: StreetId, node: NodeId },

    // ── Routing-table consistency ─────────────────────────────────────────
    #[error("routing entry ({node}, {prev:?}): node is not in the topology")]
    UnknownNode { node: NodeId, prev: Option<NodeId> },

    #[error("routing entry ({node}, {prev}): previous node is not a neighbour of {node}")]
    PrevNotNeighbour { node: NodeId, prev: NodeId },

    #[error("routing entry ({node}, {prev:?}): next hop {next} is not a neighbour of {node}")]
    NextNotNeighbour { node: NodeId, prev: Option<NodeId>, next: NodeId },

    #[error(
        "routing entry ({node}, {prev:?}): probabilities sum to {sum}, expected 1"
    )]
    BadProbabilitySum { node: NodeId, prev: Option<NodeId>, sum: f64 },

    #[error(
        "routing entry ({node}, {prev:?}): referenced neighbours {table:?} do not match \
         topology neighbours {topo:?}"
    )]
    NeighbourMismatch {
        node: NodeId,
        prev: Option<NodeId>,
        table: Vec<NodeId>,
        topo: Vec<NodeId>,
    },

    // ── Scenario loading ──────────────────────────────────────────────────
    #[error("line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `mob-topo`.
pub type TopoResult<T> = Result<T, TopoError>;
