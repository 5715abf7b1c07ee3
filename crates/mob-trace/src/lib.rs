//! `mob-trace` — turning walks and timings into a serialized trace.
//!
//! This crate is the top of the workspace: it glues the event streams of
//! `mob-process` to the walks of `mob-walk` and serializes the result.  A
//! trace is an ordered list of create/waypoint/destroy events, one walker
//! per creation event, with waypoint timing derived from street lengths and
//! sampled speeds.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`event`]    | `TraceEvent`                                            |
//! | [`assemble`] | `walk_events`, one walk → timed events                  |
//! | [`run`]      | `generate_trace`, scenario + processes → full trace     |
//! | [`xml`]      | `XmlTraceWriter`                                        |
//! | [`error`]    | `TraceError`, `TraceResult<T>`                          |

pub mod assemble;
pub mod error;
pub mod event;
pub mod run;
pub mod xml;


pub use assemble::walk_events;
pub use error::{TraceError, TraceResult};
pub use event::TraceEvent;
pub use run::generate_trace;
pub use xml::XmlTraceWriter;
