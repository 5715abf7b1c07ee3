//! Unit tests for mob-process.

use mob_core::SimRng;

use crate::process::RandomProcess;

fn rng(seed: u64) -> SimRng {
    SimRng::new(seed)
}

// ── Simple variants ───────────────────────────────────────────────────────────

#[cfg(test)]
mod variants {
    use super::*;
    use crate::{Deterministic, DiscreteUniform, Exponential, HyperExponential, Lognormal, Pareto};

    #[test]
    fn deterministic_always_returns_mean() {
        let mut p = Deterministic::new(2.5);
        for _ in 0..10 {
            assert_eq!(p.generate(), 2.5);
        }
    }

    #[test]
    fn exponential_mean_converges_to_inverse_rate() {
        let lambda = 4.0;
        let mut p = Exponential::new(lambda, rng(7)).unwrap();
        let n = 20_000;
        let mut sum = 0.0;
        for _ in 0..n {
            let v = p.generate();
            assert!(v >= 0.0);
            sum += v;
        }
        let mean = sum / n as f64;
        assert!((mean - 1.0 / lambda).abs() < 0.02, "mean {mean}");
    }

    #[test]
    fn exponential_rejects_nonpositive_rate() {
        assert!(Exponential::new(0.0, rng(0)).is_err());
        assert!(Exponential::new(-1.0, rng(0)).is_err());
        assert!(Exponential::new(f64::NAN, rng(0)).is_err());
    }

    #[test]
    fn lognormal_samples_are_positive() {
        let mut p = Lognormal::new(0.0, 0.5, rng(3)).unwrap();
        for _ in 0..1000 {
            assert!(p.generate() > 0.0);
        }
    }

    #[test]
    fn lognormal_rejects_negative_sigma() {
        assert!(Lognormal::new(0.0, -0.1, rng(0)).is_err());
    }

    #[test]
    fn pareto_samples_at_least_scale() {
        let mut p = Pareto::new(2.5, rng(11)).unwrap();
        for _ in 0..1000 {
            assert!(p.generate() >= 1.0);
        }
    }

    #[test]
    fn pareto_rejects_nonpositive_shape() {
        assert!(Pareto::new(0.0, rng(0)).is_err());
    }

    #[test]
    fn discrete_uniform_inclusive_integer_range() {
        let mut p = DiscreteUniform::new(2, 5, rng(13)).unwrap();
        let mut seen = [false; 6];
        for _ in 0..2000 {
            let v = p.generate();
            assert_eq!(v, v.trunc(), "value {v} is not an integer");
            assert!((2.0..=5.0).contains(&v));
            seen[v as usize] = true;
        }
        // Both endpoints reachable.
        assert!(seen[2] && seen[5]);
    }

    #[test]
    fn discrete_uniform_rejects_empty_range() {
        assert!(DiscreteUniform::new(5, 2, rng(0)).is_err());
    }

    #[test]
    fn hyperexponential_rejects_bad_branch_sum() {
        assert!(HyperExponential::new(&[(0.5, 1.0), (0.4, 2.0)], rng(0)).is_err());
        assert!(HyperExponential::new(&[], rng(0)).is_err());
    }

    #[test]
    fn hyperexponential_single_branch_behaves_like_exponential() {
        let lambda = 3.0;
        let mut p = HyperExponential::new(&[(1.0, lambda)], rng(17)).unwrap();
        let n = 20_000;
        let mut sum = 0.0;
        for _ in 0..n {
            let v = p.generate();
            assert!(v >= 0.0);
            sum += v;
        }
        let mean = sum / n as f64;
        assert!((mean - 1.0 / lambda).abs() < 0.03, "mean {mean}");
    }
}

// ── ExponentialBatch ──────────────────────────────────────────────────────────

#[cfg(test)]
mod batch {
    use super::*;
    use crate::{Deterministic, ExponentialBatch};

    #[test]
    fn batch_members_arrive_at_the_same_instant() {
        // Fixed batch size of 3: each batch is one positive inter-arrival
        // draw followed by exactly two zeros.
        let sizes = Box::new(Deterministic::new(3.0));
        let mut p = ExponentialBatch::new(1.0, sizes, rng(23)).unwrap();
        for _ in 0..5 {
            assert!(p.generate() > 0.0, "batch start should be a fresh draw");
            assert_eq!(p.generate(), 0.0);
            assert_eq!(p.generate(), 0.0);
        }
    }

    #[test]
    fn batch_size_one_never_returns_zero() {
        let sizes = Box::new(Deterministic::new(1.0));
        let mut p = ExponentialBatch::new(2.0, sizes, rng(29)).unwrap();
        for _ in 0..100 {
            assert!(p.generate() > 0.0);
        }
    }

    #[test]
    fn batch_size_below_one_is_clamped() {
        let sizes = Box::new(Deterministic::new(0.0));
        let mut p = ExponentialBatch::new(2.0, sizes, rng(31)).unwrap();
        for _ in 0..100 {
            assert!(p.generate() > 0.0);
        }
    }
}

// ── MMPP ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod mmpp {
    use super::*;
    use crate::Mmpp;

    fn two_regime_q() -> Vec<Vec<f64>> {
        vec![vec![-0.5, 0.5], vec![1.0, -1.0]]
    }

    #[test]
    fn rejects_non_square_matrix() {
        let q = vec![vec![-1.0, 1.0], vec![1.0]];
        assert!(Mmpp::new(q, vec![1.0, 2.0], rng(0)).is_err());
    }

    #[test]
    fn rejects_rate_count_mismatch() {
        assert!(Mmpp::new(two_regime_q(), vec![1.0], rng(0)).is_err());
    }

    #[test]
    fn rejects_nonnegative_diagonal() {
        let q = vec![vec![0.5, -0.5], vec![1.0, -1.0]];
        assert!(Mmpp::new(q, vec![1.0, 2.0], rng(0)).is_err());
    }

    #[test]
    fn rejects_nonzero_row_sum() {
        let q = vec![vec![-1.0, 0.5], vec![1.0, -1.0]];
        assert!(Mmpp::new(q, vec![1.0, 2.0], rng(0)).is_err());
    }

    #[test]
    fn rejects_empty_matrix() {
        assert!(Mmpp::new(vec![], vec![], rng(0)).is_err());
    }

    #[test]
    fn regime_stays_in_range() {
        let q = vec![
            vec![-1.0, 0.6, 0.4],
            vec![0.2, -0.7, 0.5],
            vec![0.9, 0.1, -1.0],
        ];
        let mut p = Mmpp::new(q, vec![2.0, 5.0, 1.0], rng(41)).unwrap();
        assert_eq!(p.regime_count(), 3);
        for _ in 0..5000 {
            let v = p.generate();
            assert!(v >= 0.0);
            assert!(p.regime() < 3);
        }
    }

    #[test]
    fn transition_interval_widths_sum_to_one() {
        // Property of any valid generator matrix row: off-diagonal rates
        // divided by the outflow rate partition [0, 1).
        let q = vec![
            vec![-2.0, 1.5, 0.5],
            vec![0.25, -0.5, 0.25],
            vec![3.0, 1.0, -4.0],
        ];
        for (s, row) in q.iter().enumerate() {
            let outflow = -row[s];
            let width_sum: f64 = row
                .iter()
                .enumerate()
                .filter(|&(t, _)| t != s)
                .map(|(_, &rate)| rate / outflow)
                .sum();
            assert!((width_sum - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn equal_rates_reduce_to_plain_poisson() {
        // When every regime shares one arrival rate the modulation is
        // invisible: the empirical mean must converge to 1/lambda.
        let lambda = 3.0;
        let mut p = Mmpp::new(two_regime_q(), vec![lambda, lambda], rng(43)).unwrap();
        let n = 20_000;
        let mut sum = 0.0;
        for _ in 0..n {
            sum += p.generate();
        }
        let mean = sum / n as f64;
        assert!((mean - 1.0 / lambda).abs() < 0.03, "mean {mean}");
    }
}

// ── EventMerger ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod merge {
    use super::*;
    use crate::{Deterministic, EventMerger, Exponential};

    #[test]
    fn rejects_empty_stream_list() {
        assert!(EventMerger::new(vec![]).is_err());
    }

    #[test]
    fn merged_times_are_non_decreasing() {
        let streams: Vec<Box<dyn RandomProcess>> = vec![
            Box::new(Exponential::new(1.0, rng(51)).unwrap()),
            Box::new(Exponential::new(5.0, rng(53)).unwrap()),
            Box::new(Deterministic::new(0.7)),
        ];
        let merger = EventMerger::new(streams).unwrap();
        let events: Vec<(f64, usize)> = merger.events(500).collect();
        assert_eq!(events.len(), 500);
        for pair in events.windows(2) {
            assert!(pair[0].0 <= pair[1].0);
        }
        for &(_, stream) in &events {
            assert!(stream < 3);
        }
    }

    #[test]
    fn ties_go_to_the_lowest_stream_index() {
        // Two identical deterministic streams tie at every instant; the
        // lower index must always fire first.
        let streams: Vec<Box<dyn RandomProcess>> =
            vec![Box::new(Deterministic::new(1.0)), Box::new(Deterministic::new(1.0))];
        let merger = EventMerger::new(streams).unwrap();
        let events: Vec<(f64, usize)> = merger.events(6).collect();
        let expected = [(1.0, 0), (1.0, 1), (2.0, 0), (2.0, 1), (3.0, 0), (3.0, 1)];
        assert_eq!(events, expected);
    }

    #[test]
    fn first_event_time_is_first_interarrival() {
        let streams: Vec<Box<dyn RandomProcess>> = vec![Box::new(Deterministic::new(2.5))];
        let merger = EventMerger::new(streams).unwrap();
        let events: Vec<(f64, usize)> = merger.events(3).collect();
        assert_eq!(events, [(2.5, 0), (5.0, 0), (7.5, 0)]);
    }

    #[test]
    fn iterator_is_finite_and_sized() {
        let streams: Vec<Box<dyn RandomProcess>> = vec![Box::new(Deterministic::new(1.0))];
        let mut it = EventMerger::new(streams).unwrap().events(4);
        assert_eq!(it.len(), 4);
        assert!(it.nth(3).is_some());
        assert!(it.next().is_none());
    }
}
