//! Weighted random sampling of mutation sites.
//!
//! The simulation engine is written against the [`SiteSampler`] trait so
//! that tests can substitute deterministic doubles that replay a scripted
//! draw sequence. [`WeightedSampler`] is the production implementation: it
//! holds per-site mutation rates as a cumulative table and draws by binary
//! search over a uniform variate, so a draw costs O(log n) regardless of
//! how skewed the rate distribution is.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::site::Site;

/// A weighted random source of mutation sites.
///
/// The engine only ever reads the universe (`len`, `site`) and requests
/// draws; it never alters the weighting. `choice` takes `&mut self`
/// because each draw advances whatever random state the implementation
/// carries. One sampler is owned and driven by one analysis at a time.
pub trait SiteSampler {
    /// Number of sites in the enumerable universe.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The i-th site of the universe. Panics if `index >= len()`.
    fn site(&self, index: usize) -> &Site;

    /// One weighted random draw from the universe.
    fn choice(&mut self) -> &Site;
}

/// Samples sites in proportion to their background mutation rate.
pub struct WeightedSampler {
    sites: Vec<Site>,
    /// cumulative[i] = sum of the rates of sites[0..=i].
    cumulative: Vec<f64>,
    total: f64,
    rng: StdRng,
}

impl WeightedSampler {
    /// An empty sampler seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// An empty sampler with a fixed seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        WeightedSampler {
            sites: Vec::new(),
            cumulative: Vec::new(),
            total: 0.0,
            rng,
        }
    }

    /// Appends a site with its mutation rate.
    ///
    /// Rates are relative weights, not probabilities; they need not sum to
    /// one. A zero-rate site is admissible and will never be drawn.
    pub fn add_site(&mut self, site: Site, rate: f64) {
        assert!(
            rate.is_finite() && rate >= 0.0,
            "mutation rate for {site} must be finite and non-negative, got {rate}"
        );
        self.total += rate;
        self.sites.push(site);
        self.cumulative.push(self.total);
    }
}

impl Default for WeightedSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteSampler for WeightedSampler {
    fn len(&self) -> usize {
        self.sites.len()
    }

    fn site(&self, index: usize) -> &Site {
        &self.sites[index]
    }

    fn choice(&mut self) -> &Site {
        assert!(
            self.total > 0.0,
            "cannot draw from a sampler with no rate mass"
        );
        let u = self.rng.gen_range(0.0..self.total);
        // First index whose cumulative rate exceeds u. A zero-rate site
        // spans an empty interval of the cumulative table, so it can never
        // be selected.
        let index = self.cumulative.partition_point(|&c| c <= u);
        &self.sites[index]
    }
}
