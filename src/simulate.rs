//! # Severity Burden Estimation via Adaptive Monte Carlo
//!
//! This module orchestrates the core estimation procedure. The question it
//! answers: given that `count` de novo mutations landed in a gene with a
//! combined severity of `observed`, how often would random chance do at
//! least as badly? Mutations are dropped onto the gene according to the
//! sampler's background mutation-rate weighting, scored through the
//! severity index, and summed; the observed total is then ranked against
//! the simulated distribution of totals:
//!
//! 1.  **Simulate a batch:** each trial draws `count` sites from the
//!     weighted sampler and sums their severity scores.
//! 2.  **Merge:** the freshly sorted batch is merged into the running
//!     sorted null distribution, so the rank lookup stays a binary search
//!     without ever re-sorting accumulated totals.
//! 3.  **Rank:** the one-sided p-value is the fraction of trials at or
//!     above the observed total, with a +1/+1 continuity correction so an
//!     estimate is never exactly zero and never read off an empty set.
//! 4.  **Grow or stop:** the precision rule (see [`crate::precision`])
//!     decides whether the estimate is tight enough; if not, the trial
//!     target grows by a fixed increment until a hard ceiling.
//!
//! The loop is single-threaded and runs to completion; the only entropy it
//! consumes is the sampler's. Given a deterministic sampler the returned
//! p-value is exactly reproducible.

use itertools::Itertools;
use log::debug;

use crate::config::SimulationConfig;
use crate::error::InputError;
use crate::precision::should_halt;
use crate::sampler::SiteSampler;
use crate::severity::SeverityIndex;

/// Accumulated trial totals, kept ascending across batch merges.
///
/// Owned by one `analyse` call for its whole lifetime; it only ever grows.
#[derive(Debug, Default)]
struct NullDistribution {
    totals: Vec<f64>,
}

impl NullDistribution {
    fn len(&self) -> usize {
        self.totals.len()
    }

    /// Folds a batch of trial totals into the distribution. The batch is
    /// sorted here; the standing totals are already sorted, so a single
    /// linear merge preserves the global order.
    fn merge(&mut self, mut batch: Vec<f64>) {
        batch.sort_unstable_by(f64::total_cmp);
        self.totals = std::mem::take(&mut self.totals)
            .into_iter()
            .merge_by(batch, |a, b| a <= b)
            .collect();
    }

    /// One-sided empirical p-value of `observed` against the distribution:
    /// `(1 + trials strictly above observed) / (1 + trials)`.
    fn p_value(&self, observed: f64) -> f64 {
        let size = self.totals.len();
        let position = self.totals.partition_point(|&total| total <= observed);
        (1 + (size - position)) as f64 / (1 + size) as f64
    }
}

/// Estimates the probability of observing `count` de novo mutations with a
/// combined severity of at least `observed`, under default
/// [`SimulationConfig`] limits.
///
/// `scores` must be index-aligned with the sampler's universe. The
/// simulation starts at `initial_iterations` trials and grows until the
/// estimate is precise enough or the iteration ceiling is reached.
///
/// Returns a p-value in (0, 1], or an [`InputError`] if the inputs are
/// rejected before any sampling.
pub fn analyse<S: SiteSampler>(
    sampler: &mut S,
    scores: &[f64],
    observed: f64,
    count: usize,
    initial_iterations: usize,
) -> Result<f64, InputError> {
    analyse_with_config(
        sampler,
        scores,
        observed,
        count,
        initial_iterations,
        &SimulationConfig::default(),
    )
}

/// [`analyse`] with caller-supplied growth and precision limits.
pub fn analyse_with_config<S: SiteSampler>(
    sampler: &mut S,
    scores: &[f64],
    observed: f64,
    count: usize,
    initial_iterations: usize,
    config: &SimulationConfig,
) -> Result<f64, InputError> {
    if count == 0 {
        return Err(InputError::ZeroSampleCount);
    }
    let index = SeverityIndex::build(sampler, scores)?;

    let ceiling = config.iteration_ceiling.max(1);
    let mut distribution = NullDistribution::default();
    let mut target = initial_iterations.clamp(1, ceiling);

    loop {
        let batch = simulate_batch(sampler, &index, count, target - distribution.len());
        distribution.merge(batch);

        let p_value = distribution.p_value(observed);
        let halt = should_halt(
            p_value,
            distribution.len(),
            config.confidence_z,
            config.precision_threshold,
        );
        debug!(
            "simulated {} trials: p = {:.6e} ({})",
            distribution.len(),
            p_value,
            if halt { "precise enough" } else { "growing" }
        );

        if halt || target >= ceiling {
            return Ok(p_value);
        }
        target = (target + config.iteration_increment).min(ceiling);
    }
}

/// Runs `trials` independent trials of `count` weighted draws each.
fn simulate_batch<S: SiteSampler>(
    sampler: &mut S,
    index: &SeverityIndex,
    count: usize,
    trials: usize,
) -> Vec<f64> {
    let mut totals = Vec::with_capacity(trials);
    for _ in 0..trials {
        let mut total = 0.0;
        for _ in 0..count {
            let site = sampler.choice();
            let score = index.score(site).unwrap_or_else(|| {
                panic!(
                    "sampler drew site {site}, which has no severity score; \
                     the sampler universe and the score sequence disagree"
                )
            });
            total += score;
        }
        totals.push(total);
    }
    totals
}
