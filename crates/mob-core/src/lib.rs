//! `mob-core` — foundational types for the `mobgen` mobility-trace generator.
//!
//! This crate is a dependency of every other `mob-*` crate.  It intentionally
//! has no `mob-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                      |
//! |----------|-----------------------------------------------|
//! | [`ids`]  | `NodeId`, `StreetId`, `WalkerId`              |
//! | [`geo`]  | `Position`, planar distance and direction     |
//! | [`rng`]  | `SimRng` (explicit, seedable random source)   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geo;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::Position;
pub use ids::{NodeId, StreetId, WalkerId};
pub use rng::SimRng;
