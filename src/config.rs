//! Tuning knobs for the adaptive simulation loop.

use serde::{Deserialize, Serialize};

/// Hard ceiling on the total number of simulated trials.
pub const ITERATION_CEILING: usize = 100_000_000;

/// How many trials each growth round adds to the target.
pub const ITERATION_INCREMENT: usize = 10_000_000;

/// Two-sided normal deviate for a 99% confidence interval.
pub const CONFIDENCE_Z: f64 = 2.575829;

/// Halt once the confidence interval half-width falls below this fraction
/// of the p-value estimate.
pub const PRECISION_THRESHOLD: f64 = 0.05;

/// Controls for how far and how fast the simulation grows.
///
/// The defaults suit genome-scale burden screens; embedding callers with
/// latency bounds can trade precision for time by lowering the ceiling or
/// loosening the threshold. Fields not present when deserializing fall
/// back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Caps total trials, and with it the estimator's resolution: the
    /// smallest reportable p-value is `1 / (iteration_ceiling + 1)`.
    pub iteration_ceiling: usize,
    /// Batch growth step applied whenever the precision check fails.
    pub iteration_increment: usize,
    /// Normal deviate controlling the confidence interval width.
    pub confidence_z: f64,
    /// Halting strictness, as a relative interval width.
    pub precision_threshold: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            iteration_ceiling: ITERATION_CEILING,
            iteration_increment: ITERATION_INCREMENT,
            confidence_z: CONFIDENCE_Z,
            precision_threshold: PRECISION_THRESHOLD,
        }
    }
}
