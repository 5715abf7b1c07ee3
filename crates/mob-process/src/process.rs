//! The `RandomProcess` trait and its simple sampler variants.
//!
//! Each variant owns its parameters, its distribution object, and its
//! `SimRng`.  Parameters are validated once at construction; `generate()`
//! itself cannot fail.  The family is a closed set — callers that need to
//! mix variants hold them as `Box<dyn RandomProcess>` (see
//! [`crate::EventMerger`]).

use rand_distr::{Distribution, Exp, LogNormal};

use mob_core::SimRng;

use crate::{ProcessError, ProcessResult};

/// Tolerance for probability sums that must equal 1.
pub(crate) const PROB_EPS: f64 = 1e-9;

/// A stateful sampler producing the next value in its domain — an
/// inter-arrival time, a duration, or a count, depending on the variant.
///
/// Internal state is private and advances only through `generate()` calls;
/// there is no way to inspect or reset a process mid-stream.
pub trait RandomProcess {
    /// Draw the next value and advance the process state.
    fn generate(&mut self) -> f64;
}

// ── Deterministic ─────────────────────────────────────────────────────────────

/// Not really a random process: always returns the configured mean.
/// Used as a scenario baseline against the stochastic variants.
pub struct Deterministic {
    mean: f64,
}

impl Deterministic {
    pub fn new(mean: f64) -> Self {
        Self { mean }
    }
}

impl RandomProcess for Deterministic {
    fn generate(&mut self) -> f64 {
        self.mean
    }
}

// ── Exponential ───────────────────────────────────────────────────────────────

/// Exponential inter-arrival times with rate `lambda` (mean `1/lambda`).
pub struct Exponential {
    dist: Exp<f64>,
    rng: SimRng,
}

impl Exponential {
    /// Fails unless `lambda` is positive and finite.
    pub fn new(lambda: f64, rng: SimRng) -> ProcessResult<Self> {
        Ok(Self { dist: exp_dist(lambda)?, rng })
    }
}

impl RandomProcess for Exponential {
    fn generate(&mut self) -> f64 {
        self.dist.sample(self.rng.inner())
    }
}

/// Build a validated `Exp` distribution; shared by every exponential-based
/// variant in this crate.
pub(crate) fn exp_dist(lambda: f64) -> ProcessResult<Exp<f64>> {
    if !lambda.is_finite() || lambda <= 0.0 {
        return Err(ProcessError::InvalidRate(lambda));
    }
    Exp::new(lambda).map_err(|_| ProcessError::InvalidRate(lambda))
}

// ── Lognormal ─────────────────────────────────────────────────────────────────

/// Lognormal samples with location `mu` and scale `sigma`.
pub struct Lognormal {
    dist: LogNormal<f64>,
    rng: SimRng,
}

impl Lognormal {
    /// Fails if `sigma` is negative or either parameter is non-finite.
    pub fn new(mu: f64, sigma: f64, rng: SimRng) -> ProcessResult<Self> {
        if !mu.is_finite() || !sigma.is_finite() || sigma < 0.0 {
            return Err(ProcessError::InvalidSigma(sigma));
        }
        let dist = LogNormal::new(mu, sigma).map_err(|_| ProcessError::InvalidSigma(sigma))?;
        Ok(Self { dist, rng })
    }
}

impl RandomProcess for Lognormal {
    fn generate(&mut self) -> f64 {
        self.dist.sample(self.rng.inner())
    }
}

// ── Pareto ────────────────────────────────────────────────────────────────────

/// Pareto samples with the given shape and unit scale (values ≥ 1).
pub struct Pareto {
    dist: rand_distr::Pareto<f64>,
    rng: SimRng,
}

impl Pareto {
    /// Fails unless `shape` is positive and finite.
    pub fn new(shape: f64, rng: SimRng) -> ProcessResult<Self> {
        if !shape.is_finite() || shape <= 0.0 {
            return Err(ProcessError::InvalidShape(shape));
        }
        let dist =
            rand_distr::Pareto::new(1.0, shape).map_err(|_| ProcessError::InvalidShape(shape))?;
        Ok(Self { dist, rng })
    }
}

impl RandomProcess for Pareto {
    fn generate(&mut self) -> f64 {
        self.dist.sample(self.rng.inner())
    }
}

// ── DiscreteUniform ───────────────────────────────────────────────────────────

/// Integers drawn uniformly from `[min, max]` inclusive, returned as `f64`.
/// The usual batch-size companion of [`ExponentialBatch`].
pub struct DiscreteUniform {
    min: i64,
    max: i64,
    rng: SimRng,
}

impl DiscreteUniform {
    /// Fails if `min > max`.
    pub fn new(min: i64, max: i64, rng: SimRng) -> ProcessResult<Self> {
        if min > max {
            return Err(ProcessError::EmptyRange { min, max });
        }
        Ok(Self { min, max, rng })
    }
}

impl RandomProcess for DiscreteUniform {
    fn generate(&mut self) -> f64 {
        self.rng.gen_range(self.min..=self.max) as f64
    }
}

// ── ExponentialBatch ──────────────────────────────────────────────────────────

/// Burst arrivals: batches separated by exponential inter-arrival times.
///
/// The first call of a batch draws the batch size `n` from the batch-size
/// process and returns a fresh exponential draw; the following `n − 1` calls
/// return `0`, so all members of a batch land on the same instant when the
/// caller accumulates a running clock:
///
/// ```text
/// base_time += batch.generate();
/// ```
pub struct ExponentialBatch {
    dist: Exp<f64>,
    batch_sizes: Box<dyn RandomProcess>,
    outstanding: u64,
    rng: SimRng,
}

impl ExponentialBatch {
    /// Fails unless `lambda` is positive and finite.
    pub fn new(
        lambda: f64,
        batch_sizes: Box<dyn RandomProcess>,
        rng: SimRng,
    ) -> ProcessResult<Self> {
        Ok(Self { dist: exp_dist(lambda)?, batch_sizes, outstanding: 0, rng })
    }
}

impl RandomProcess for ExponentialBatch {
    fn generate(&mut self) -> f64 {
        if self.outstanding == 0 {
            // Batch sizes below one would underflow the outstanding counter;
            // clamp so every batch has at least its arrival member.
            let n = (self.batch_sizes.generate().round() as u64).max(1);
            self.outstanding = n - 1;
            self.dist.sample(self.rng.inner())
        } else {
            self.outstanding -= 1;
            0.0
        }
    }
}

// ── HyperExponential ──────────────────────────────────────────────────────────

/// Probability-weighted mixture of exponential branches: each draw first
/// picks a branch by cumulative-interval lookup, then samples that branch's
/// exponential.
pub struct HyperExponential {
    /// `(cumulative_upper_bound, dist)` per branch, in construction order.
    branches: Vec<(f64, Exp<f64>)>,
    rng: SimRng,
}

impl HyperExponential {
    /// `branches` is a list of `(probability, rate)` pairs.  Fails if the
    /// list is empty, any probability is outside `[0, 1]`, any rate is not
    /// positive, or the probabilities do not sum to 1 (within tolerance).
    pub fn new(branches: &[(f64, f64)], rng: SimRng) -> ProcessResult<Self> {
        if branches.is_empty() {
            return Err(ProcessError::NoBranches);
        }
        let mut cumulative = 0.0;
        let mut built = Vec::with_capacity(branches.len());
        for &(prob, rate) in branches {
            if !prob.is_finite() || !(0.0..=1.0).contains(&prob) {
                return Err(ProcessError::InvalidBranchProbability(prob));
            }
            cumulative += prob;
            built.push((cumulative, exp_dist(rate)?));
        }
        if (cumulative - 1.0).abs() > PROB_EPS {
            return Err(ProcessError::BranchSumNotOne(cumulative));
        }
        Ok(Self { branches: built, rng })
    }
}

impl RandomProcess for HyperExponential {
    fn generate(&mut self) -> f64 {
        let coin = self.rng.uniform();
        // Left-inclusive intervals; rounding in the cumulative sum can leave
        // the coin past the final bound, in which case the last branch wins.
        let last = self.branches.len() - 1;
        let idx = self
            .branches
            .iter()
            .position(|&(upper, _)| coin < upper)
            .unwrap_or(last);
        let dist = self.branches[idx].1;
        dist.sample(self.rng.inner())
    }
}
