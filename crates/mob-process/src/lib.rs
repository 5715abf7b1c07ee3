//! `mob-process` — stochastic event generation.
//!
//! Discrete simulation events (node creations, message generations) are
//! modelled as realizations of point processes.  Each process variant
//! implements [`RandomProcess`]: successive `generate()` calls yield
//! inter-arrival times, durations, or counts, and all randomness flows
//! through an explicitly seeded [`mob_core::SimRng`] owned by the instance.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`process`] | `RandomProcess` trait and the simple sampler variants     |
//! | [`mmpp`]    | `Mmpp`, the Markov-modulated Poisson process              |
//! | [`merge`]   | `EventMerger`, time-ordered merging of parallel streams   |
//! | [`error`]   | `ProcessError`, `ProcessResult<T>`                        |

pub mod error;
pub mod merge;
pub mod mmpp;
pub mod process;

#[cfg(test)]
mod tests;

pub use error::{ProcessError, ProcessResult};
pub use merge::{EventMerger, MergedEvents};
pub use mmpp::Mmpp;
pub use process::{
    Deterministic, DiscreteUniform, Exponential, ExponentialBatch, HyperExponential, Lognormal,
    Pareto, RandomProcess,
};
