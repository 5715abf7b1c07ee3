//! `mob-walk` — random walks over a street topology.
//!
//! A walker starts at an entry node and repeatedly samples its next hop from
//! the routing table until it draws the absorbing choice.  The walk is
//! memory-1: the distribution over next hops may depend on the hop the
//! walker just took, which is how scenarios encode directional bias (for
//! instance, discouraging immediate backtracking).

pub mod error;
pub mod walk;

#[cfg(test)]
mod tests;

pub use error::{WalkError, WalkResult};
pub use walk::PathGenerator;
