//! Markov-modulated Poisson process.
//!
//! A continuous-time Markov chain over `k` hidden *regimes* selects the
//! instantaneous Poisson arrival rate: regime `s` emits arrivals at rate
//! `rates[s]` and holds for an `Exp(−q[s][s])` sojourn before jumping.
//!
//! # Simulation technique
//!
//! Two exponential clocks race: `time_to_arrival` (at the current regime's
//! arrival rate) against `time_to_transition` (at the regime's total outflow
//! rate).  Whichever fires first wins, the loser is decremented by the
//! elapsed amount, and the winner's clock is redrawn.  Regime transitions
//! consume simulated time but emit nothing — callers only ever observe
//! arrivals.

use rand_distr::{Distribution, Exp};

use mob_core::SimRng;

use crate::process::{PROB_EPS, RandomProcess, exp_dist};
use crate::{ProcessError, ProcessResult};

/// A Markov-modulated Poisson process over `k` regimes.
///
/// Constructed from a `k×k` generator matrix `q` (diagonal entries negative,
/// off-diagonal entries non-negative transition rates, rows summing to zero)
/// and a per-regime arrival-rate vector.  The initial regime is drawn
/// uniformly over `[0, k)`.
pub struct Mmpp {
    /// Row-major `k×k` generator matrix.
    q: Vec<f64>,
    k: usize,
    /// Per-regime arrival-time distribution, `Exp(rates[s])`.
    arrival: Vec<Exp<f64>>,
    /// Per-regime sojourn distribution, `Exp(−q[s][s])`.
    sojourn: Vec<Exp<f64>>,
    state: usize,
    time_to_transition: f64,
    time_to_arrival: f64,
    /// Full inter-arrival draw backing `time_to_arrival`.  Transitions eat
    /// into `time_to_arrival` but the elapsed time between two arrivals is
    /// still the original draw, which is what `generate()` reports.
    iarrival_time: f64,
    rng: SimRng,
}

impl Mmpp {
    /// Validate the generator matrix and rate vector, then draw the initial
    /// regime and both clocks.
    pub fn new(q: Vec<Vec<f64>>, rates: Vec<f64>, mut rng: SimRng) -> ProcessResult<Self> {
        let k = q.len();
        if k == 0 {
            return Err(ProcessError::EmptyMatrix);
        }
        for (row, entries) in q.iter().enumerate() {
            if entries.len() != k {
                return Err(ProcessError::MatrixNotSquare { row, expected: k, got: entries.len() });
            }
        }
        if rates.len() != k {
            return Err(ProcessError::RateCountMismatch { dim: k, rates: rates.len() });
        }

        let mut sojourn = Vec::with_capacity(k);
        for (s, entries) in q.iter().enumerate() {
            let diag = entries[s];
            if !diag.is_finite() || diag >= 0.0 {
                return Err(ProcessError::DiagonalNotNegative { state: s, value: diag });
            }
            let mut row_sum = 0.0;
            for (t, &rate) in entries.iter().enumerate() {
                if t != s && (!rate.is_finite() || rate < 0.0) {
                    return Err(ProcessError::NegativeRate { from: s, to: t, value: rate });
                }
                row_sum += rate;
            }
            // A valid generator matrix has zero row sums; the transition
            // sub-routine relies on this to cover [0, 1) with its intervals.
            if row_sum.abs() > PROB_EPS * (-diag).max(1.0) {
                return Err(ProcessError::RowSumNonZero { state: s, sum: row_sum });
            }
            sojourn.push(exp_dist(-diag)?);
        }
        let arrival = rates
            .iter()
            .map(|&rate| exp_dist(rate))
            .collect::<ProcessResult<Vec<_>>>()?;

        let state = rng.gen_range(0..k);
        let time_to_transition = sojourn[state].sample(rng.inner());
        let iarrival_time = arrival[state].sample(rng.inner());
        Ok(Self {
            q: q.into_iter().flatten().collect(),
            k,
            arrival,
            sojourn,
            state,
            time_to_transition,
            time_to_arrival: iarrival_time,
            iarrival_time,
            rng,
        })
    }

    /// Number of regimes `k`.
    pub fn regime_count(&self) -> usize {
        self.k
    }

    #[cfg(test)]
    pub(crate) fn regime(&self) -> usize {
        self.state
    }

    /// Jump to a new regime, chosen by cumulative-interval sampling over all
    /// targets `t ≠ s` with interval width `q[s][t] / (−q[s][s])`.
    fn transition(&mut self) {
        let outflow = -self.q[self.state * self.k + self.state];
        let coin = self.rng.uniform();
        let mut begin = 0.0;
        let mut last = self.state;
        for t in 0..self.k {
            if t == self.state {
                continue;
            }
            let end = begin + self.q[self.state * self.k + t] / outflow;
            if begin <= coin && coin < end {
                self.state = t;
                return;
            }
            begin = end;
            last = t;
        }
        // Row sums are validated at construction, so the intervals cover
        // [0, 1) up to rounding; a coin past the final bound takes the last
        // candidate.  k ≥ 2 is implied by a negative diagonal and zero row
        // sums, so `last` is always a real target here.
        self.state = last;
    }
}

impl RandomProcess for Mmpp {
    /// Loop the clock race until an arrival is produced.
    fn generate(&mut self) -> f64 {
        loop {
            if self.time_to_arrival < self.time_to_transition {
                // Arrival wins: resynchronize the transition clock and
                // report the full inter-arrival draw.
                self.time_to_transition -= self.time_to_arrival;
                let iarrival = self.iarrival_time;
                self.iarrival_time = self.arrival[self.state].sample(self.rng.inner());
                self.time_to_arrival = self.iarrival_time;
                return iarrival;
            }
            // Transition wins: invisible to the caller.
            self.time_to_arrival -= self.time_to_transition;
            self.transition();
            self.time_to_transition = self.sojourn[self.state].sample(self.rng.inner());
        }
    }
}
