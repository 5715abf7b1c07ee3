//! Street-network graph: positioned nodes connected by undirected streets.
//!
//! The graph is discovered street by street: [`Topology::add_street`]
//! registers unseen endpoints, records the mutual neighbour relation, and
//! rejects anything that would break the invariants — duplicate street ids,
//! self-loops, and second streets between an already-adjacent node pair.
//! Nodes are never removed.

use rustc_hash::{FxHashMap, FxHashSet};

use mob_core::{NodeId, Position, StreetId};

use crate::{TopoError, TopoResult};

// ── Node ──────────────────────────────────────────────────────────────────────

/// A street intersection or endpoint.
///
/// The neighbour list has set semantics: unordered, no duplicates.  It is
/// stored as a `Vec` because real street nodes have a handful of neighbours
/// at most, and the validator wants cheap sorted snapshots of it.
#[derive(Debug)]
pub struct Node {
    id: NodeId,
    pos: Position,
    neighbours: Vec<NodeId>,
}

impl Node {
    fn new(id: NodeId, pos: Position) -> Self {
        Self { id, pos, neighbours: Vec::new() }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn neighbours(&self) -> &[NodeId] {
        &self.neighbours
    }

    pub fn is_neighbour(&self, other: NodeId) -> bool {
        self.neighbours.contains(&other)
    }

    fn add_neighbour(&mut self, other: NodeId) {
        if !self.neighbours.contains(&other) {
            self.neighbours.push(other);
        }
    }
}

// ── Street ────────────────────────────────────────────────────────────────────

/// An undirected edge between two distinct nodes, with its length derived
/// once from the endpoint positions at construction.
#[derive(Debug)]
pub struct Street {
    id: StreetId,
    endpoints: (NodeId, NodeId),
    length: f64,
}

impl Street {
    pub fn id(&self) -> StreetId {
        self.id
    }

    pub fn endpoints(&self) -> (NodeId, NodeId) {
        self.endpoints
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// The endpoint opposite `node`, if `node` is an endpoint at all.
    pub fn other_end(&self, node: NodeId) -> Option<NodeId> {
        match self.endpoints {
            (a, b) if a == node => Some(b),
            (a, b) if b == node => Some(a),
            _ => None,
        }
    }
}

// ── Topology ──────────────────────────────────────────────────────────────────

/// The de-duplicated collection of nodes and streets discovered via
/// [`add_street`](Self::add_street).
///
/// Invariants: every node referenced by any street is registered exactly
/// once; the node/neighbour relation is symmetric; a given unordered node
/// pair is connected by at most one street.
#[derive(Debug, Default)]
pub struct Topology {
    nodes: FxHashMap<NodeId, Node>,
    streets: Vec<Street>,
    street_ids: FxHashSet<StreetId>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a street between two endpoints given as `(id, position)` pairs.
    ///
    /// Unseen endpoints are registered; endpoints already in the topology
    /// keep their stored position (registration is idempotent).  Fails on a
    /// duplicate street id, a self-loop, or endpoints that are already
    /// adjacent — the latter is detected independently of street identity.
    pub fn add_street(
        &mut self,
        id: StreetId,
        a: (NodeId, Position),
        b: (NodeId, Position),
    ) -> TopoResult<()> {
        let (a_id, a_pos) = a;
        let (b_id, b_pos) = b;
        if a_id == b_id {
            return Err(TopoError::SelfLoop { street: id, node: a_id });
        }
        if self.street_ids.contains(&id) {
            return Err(TopoError::DuplicateStreet(id));
        }
        // Adjacency is symmetric, so checking one side suffices — but check
        // against the *stored* node, which may predate this call.
        if self.nodes.get(&a_id).is_some_and(|n| n.is_neighbour(b_id)) {
            return Err(TopoError::AlreadyAdjacent { street: id, a: a_id, b: b_id });
        }

        // A previously registered endpoint keeps its stored position.
        let a_pos = self.nodes.get(&a_id).map_or(a_pos, |n| n.pos);
        let b_pos = self.nodes.get(&b_id).map_or(b_pos, |n| n.pos);
        self.nodes
            .entry(a_id)
            .or_insert_with(|| Node::new(a_id, a_pos))
            .add_neighbour(b_id);
        self.nodes
            .entry(b_id)
            .or_insert_with(|| Node::new(b_id, b_pos))
            .add_neighbour(a_id);

        self.street_ids.insert(id);
        self.streets.push(Street {
            id,
            endpoints: (a_id, b_id),
            length: a_pos.distance(b_pos),
        });
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn position(&self, id: NodeId) -> Option<Position> {
        self.nodes.get(&id).map(|n| n.pos)
    }

    /// Neighbour set of `id`, or `None` if the node is not in the topology.
    pub fn neighbours(&self, id: NodeId) -> Option<&[NodeId]> {
        self.nodes.get(&id).map(|n| n.neighbours())
    }

    /// The street connecting `a` and `b`, in either endpoint order.
    pub fn street_between(&self, a: NodeId, b: NodeId) -> Option<&Street> {
        self.streets
            .iter()
            .find(|s| s.other_end(a) == Some(b))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn streets(&self) -> &[Street] {
        &self.streets
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn street_count(&self) -> usize {
        self.streets.len()
    }
}
