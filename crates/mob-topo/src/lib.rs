//! `mob-topo` — street-network topology and routing tables.
//!
//! A [`Topology`] is an undirected graph of positioned nodes connected by
//! streets; a [`RoutingTable`] assigns each `(node, previous-node)` pair a
//! discrete probability distribution over next hops.  Both are built once —
//! usually by the [`loader`] — validated, and then treated as read-only for
//! the remainder of a generation run.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`topology`] | `Node`, `Street`, `Topology`                           |
//! | [`routing`]  | `RoutingTable` and its consistency validator           |
//! | [`loader`]   | line-oriented scenario file reader → [`Scenario`]      |
//! | [`error`]    | `TopoError`, `TopoResult<T>`                           |

pub mod error;
pub mod loader;
pub mod routing;
pub mod topology;


pub use error::{TopoError, TopoResult};
pub use loader::{Scenario, load_scenario, load_scenario_path};
pub use routing::RoutingTable;
pub use topology::{Node, Street, Topology};
