//! Routing table and its consistency validator.
//!
//! A routing table maps `(current, previous)` node pairs to an *ordered*
//! list of `(next, probability)` choices.  `previous = None` marks an entry
//! point (no predecessor); `next = None` is the absorbing choice that ends a
//! walk.  The list order is significant — cumulative-interval sampling walks
//! it front to back — so entries accumulate in insertion order.
//!
//! The validator is expected to run once over the whole table before any
//! walk is generated; walk-time sampling relies on it having passed.

use rustc_hash::FxHashMap;

use mob_core::NodeId;

use crate::{TopoError, TopoResult, Topology};

/// Tolerance for probability sums that must equal 1.
const PROB_EPS: f64 = 1e-9;

/// Ordered next-hop distribution for one `(current, previous)` key.
pub type HopChoices = Vec<(Option<NodeId>, f64)>;

/// Per-(node, previous-node) next-hop probability distributions.
#[derive(Debug, Default)]
pub struct RoutingTable {
    entries: FxHashMap<(NodeId, Option<NodeId>), HopChoices>,
}

impl RoutingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one `(next, probability)` choice to the `(node, prev)` entry,
    /// creating the entry if needed.  Choices keep insertion order.
    pub fn push(&mut self, node: NodeId, prev: Option<NodeId>, next: Option<NodeId>, prob: f64) {
        self.entries.entry((node, prev)).or_default().push((next, prob));
    }

    /// Replace the whole choice list for `(node, prev)`.
    pub fn insert(&mut self, node: NodeId, prev: Option<NodeId>, choices: HopChoices) {
        self.entries.insert((node, prev), choices);
    }

    /// The choice list for `(node, prev)`, if present.
    pub fn entry(&self, node: NodeId, prev: Option<NodeId>) -> Option<&[(Option<NodeId>, f64)]> {
        self.entries.get(&(node, prev)).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&(NodeId, Option<NodeId>), &HopChoices)> {
        self.entries.iter()
    }

    /// Check every entry against the topology.
    ///
    /// For each `(node, prev)` key: `node` must be in the topology; a
    /// non-`None` `prev` must be one of its neighbours; every non-`None`
    /// next hop must be one of its neighbours; the probabilities must sum
    /// to 1 within tolerance; and the set of referenced next hops, together
    /// with `prev` itself, must equal the neighbour set exactly — which
    /// jointly catches references to non-adjacent nodes and real neighbours
    /// the table fails to cover.
    pub fn validate(&self, topo: &Topology) -> TopoResult<()> {
        for (&(node, prev), choices) in &self.entries {
            let Some(n) = topo.node(node) else {
                return Err(TopoError::UnknownNode { node, prev });
            };
            let neighbours = n.neighbours();
            if let Some(p) = prev {
                if !neighbours.contains(&p) {
                    return Err(TopoError::PrevNotNeighbour { node, prev: p });
                }
            }

            let mut sum = 0.0;
            let mut referenced: Vec<NodeId> = prev.into_iter().collect();
            for &(next, prob) in choices {
                sum += prob;
                if let Some(nx) = next {
                    if !neighbours.contains(&nx) {
                        return Err(TopoError::NextNotNeighbour { node, prev, next: nx });
                    }
                    referenced.push(nx);
                }
            }
            if (sum - 1.0).abs() > PROB_EPS {
                return Err(TopoError::BadProbabilitySum { node, prev, sum });
            }

            referenced.sort_unstable();
            referenced.dedup();
            let mut topo_neighbours = neighbours.to_vec();
            topo_neighbours.sort_unstable();
            if referenced != topo_neighbours {
                return Err(TopoError::NeighbourMismatch {
                    node,
                    prev,
                    table: referenced,
                    topo: topo_neighbours,
                });
            }
        }
        Ok(())
    }
}
