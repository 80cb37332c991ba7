//! Stopping rule for the adaptive simulation loop.
//!
//! The p-value estimate is a binomial proportion: out of `iterations`
//! simulated trial totals, some fraction landed at or above the observed
//! total. Its precision therefore improves with the square root of the
//! number of trials. Rather than fixing an iteration count up front, the
//! engine keeps simulating until the normal-approximation confidence
//! interval around the estimate is narrow *relative to the estimate
//! itself* — small p-values demand proportionally more trials than large
//! ones, and large ones stop almost immediately.

/// Decides whether the simulation has reached the requested precision.
///
/// Computes the half-width of the normal-approximation binomial confidence
/// interval, `delta = z * sqrt(p * (1 - p) / iterations)`, and halts once
/// `delta / p` drops below `precision_threshold`.
///
/// Pure and stateless; the engine calls it once per batch with the current
/// estimate and the number of trials simulated so far.
pub fn should_halt(p_value: f64, iterations: usize, z: f64, precision_threshold: f64) -> bool {
    let delta = z * (p_value * (1.0 - p_value) / iterations as f64).sqrt();
    let diff = delta / p_value;
    diff < precision_threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONFIDENCE_Z, PRECISION_THRESHOLD};

    /// Recompute the rule directly, as a cross-check on `should_halt`.
    fn relative_half_width(p: f64, n: usize, z: f64) -> f64 {
        z * (p * (1.0 - p) / n as f64).sqrt() / p
    }

    #[test]
    fn keeps_running_while_interval_is_wide() {
        // p = 0.5 after 1000 trials: delta ≈ 0.0407, diff ≈ 0.0815.
        let diff = relative_half_width(0.5, 1000, CONFIDENCE_Z);
        assert!(diff >= PRECISION_THRESHOLD);
        assert!(!should_halt(0.5, 1000, CONFIDENCE_Z, PRECISION_THRESHOLD));
    }

    #[test]
    fn halts_once_interval_tightens() {
        // p = 0.5 after 10_000 trials: delta ≈ 0.0129, diff ≈ 0.0258.
        let diff = relative_half_width(0.5, 10_000, CONFIDENCE_Z);
        assert!(diff < PRECISION_THRESHOLD);
        assert!(should_halt(0.5, 10_000, CONFIDENCE_Z, PRECISION_THRESHOLD));
    }

    #[test]
    fn decision_matches_direct_recomputation() {
        for &p in &[1e-4, 0.01, 0.25, 0.5, 0.9, 1.0] {
            for &n in &[100usize, 1_000, 100_000, 10_000_000] {
                let expected = relative_half_width(p, n, CONFIDENCE_Z) < PRECISION_THRESHOLD;
                assert_eq!(
                    should_halt(p, n, CONFIDENCE_Z, PRECISION_THRESHOLD),
                    expected,
                    "p={p} n={n}"
                );
            }
        }
    }

    #[test]
    fn certain_estimate_halts_immediately() {
        // p = 1.0 has zero binomial variance; no amount of extra trials
        // would move it.
        assert!(should_halt(1.0, 1, CONFIDENCE_Z, PRECISION_THRESHOLD));
    }

    #[test]
    fn tiny_p_values_demand_more_trials() {
        assert!(!should_halt(1e-6, 1_000_000, CONFIDENCE_Z, PRECISION_THRESHOLD));
    }
}
