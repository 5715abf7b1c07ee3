//! Process-subsystem error type.
//!
//! All variants are configuration errors: they are raised at construction
//! and never recovered internally.  A constructed process cannot fail.

use thiserror::Error;

/// Errors produced by `mob-process`.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("exponential rate must be positive and finite, got {0}")]
    InvalidRate(f64),

    #[error("lognormal sigma must be non-negative and finite, got {0}")]
    InvalidSigma(f64),

    #[error("pareto shape must be positive and finite, got {0}")]
    InvalidShape(f64),

    #[error("discrete uniform range is empty: [{min}, {max}]")]
    EmptyRange { min: i64, max: i64 },

    #[error("rate matrix is empty")]
    EmptyMatrix,

    #[error("rate matrix row {row} has {got} entries, expected {expected}")]
    MatrixNotSquare { row: usize, expected: usize, got: usize },

    #[error("{rates} arrival rates supplied for a {dim}-regime rate matrix")]
    RateCountMismatch { dim: usize, rates: usize },

    #[error("rate matrix diagonal entry [{state},{state}] must be negative, got {value}")]
    DiagonalNotNegative { state: usize, value: f64 },

    #[error("rate matrix entry [{from},{to}] must be non-negative, got {value}")]
    NegativeRate { from: usize, to: usize, value: f64 },

    #[error("rate matrix row {state} sums to {sum}, expected 0")]
    RowSumNonZero { state: usize, sum: f64 },

    #[error("hyperexponential needs at least one branch")]
    NoBranches,

    #[error("hyperexponential branch probability must be in [0, 1], got {0}")]
    InvalidBranchProbability(f64),

    #[error("hyperexponential branch probabilities sum to {0}, expected 1")]
    BranchSumNotOne(f64),

    #[error("event merger needs at least one stream")]
    NoStreams,
}

/// Shorthand result type for `mob-process`.
pub type ProcessResult<T> = Result<T, ProcessError>;
