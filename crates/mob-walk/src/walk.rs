//! Path generation by memory-1 random walk.

use mob_core::{NodeId, SimRng};
use mob_topo::RoutingTable;

use crate::{WalkError, WalkResult};

/// Generates walk paths against a validated routing table.
///
/// One instance per simulation run; the table itself stays read-only and may
/// back any number of concurrent generators.
///
/// Termination is the absorbing choice's job: a table with a cycle that
/// never reaches absorption loops forever.  Run
/// [`RoutingTable::validate`](mob_topo::RoutingTable::validate) first —
/// this type assumes it passed and treats every inconsistency it still
/// encounters as fatal.
pub struct PathGenerator<'a> {
    routing: &'a RoutingTable,
    rng: SimRng,
}

impl<'a> PathGenerator<'a> {
    pub fn new(routing: &'a RoutingTable, rng: SimRng) -> Self {
        Self { routing, rng }
    }

    /// Walk from `entry` (no predecessor) until absorption.
    ///
    /// The returned path is the ordered sequence of visited nodes, entry
    /// node included, terminal `None` marker excluded.  A walk that is
    /// absorbed immediately yields the single-element path `[entry]`.
    pub fn random_path(&mut self, entry: NodeId) -> WalkResult<Vec<NodeId>> {
        let mut path = Vec::new();
        let mut prev = None;
        let mut current = Some(entry);
        while let Some(now) = current {
            path.push(now);
            current = self.sample_next(now, prev)?;
            prev = Some(now);
        }
        Ok(path)
    }

    /// Sample the next hop for `(node, prev)` by cumulative-interval
    /// sampling: running bounds in list order, left-inclusive intervals,
    /// one uniform draw.
    ///
    /// Exactly one interval must contain the draw; zero or several mean the
    /// distribution is malformed (not normalized, or negative entries) and
    /// the walk aborts rather than picking arbitrarily.
    fn sample_next(&mut self, node: NodeId, prev: Option<NodeId>) -> WalkResult<Option<NodeId>> {
        let choices = self
            .routing
            .entry(node, prev)
            .ok_or(WalkError::MissingEntry { node, prev })?;

        let coin = self.rng.uniform();
        let mut low = 0.0;
        let mut matches = 0usize;
        let mut winner = None;
        for &(next, prob) in choices {
            let high = low + prob;
            if low <= coin && coin < high {
                matches += 1;
                winner = Some(next);
            }
            low = high;
        }
        match (matches, winner) {
            (1, Some(next)) => Ok(next),
            _ => Err(WalkError::IntervalMismatch { node, prev, coin, matches }),
        }
    }
}
