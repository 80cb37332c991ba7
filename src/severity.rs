//! The severity index: site identity to severity score.
//!
//! Scores arrive as a plain slice that is index-aligned with the sampler's
//! universe (the i-th score belongs to the i-th enumerable site). Random
//! draws come back as site identities, not indices, so the engine needs a
//! keyed lookup to score them. Building it is the only place the alignment
//! contract between the two sequences can be checked, which is why the
//! length validation lives here rather than with the caller.

use ahash::AHashMap;

use crate::error::InputError;
use crate::sampler::SiteSampler;
use crate::site::Site;

/// Keyed lookup from [`Site`] to severity score, built once per analysis.
#[derive(Debug, Clone)]
pub struct SeverityIndex {
    scores: AHashMap<Site, f64>,
}

impl SeverityIndex {
    /// Builds the index from a sampler universe and its index-aligned
    /// severity scores.
    ///
    /// Fails if the two sequences differ in length or are empty; nothing
    /// is sampled before these checks pass. If the universe lists the same
    /// site twice, the later score wins; under a consistent sampler/score
    /// pairing duplicate entries carry equal scores, so the overwrite is
    /// unobservable.
    pub fn build(sampler: &impl SiteSampler, scores: &[f64]) -> Result<Self, InputError> {
        if sampler.is_empty() {
            return Err(InputError::EmptyUniverse);
        }
        if sampler.len() != scores.len() {
            return Err(InputError::LengthMismatch {
                sites: sampler.len(),
                scores: scores.len(),
            });
        }

        let mut index = AHashMap::with_capacity(scores.len());
        for (i, &score) in scores.iter().enumerate() {
            index.insert(sampler.site(i).clone(), score);
        }
        Ok(SeverityIndex { scores: index })
    }

    /// The severity score recorded for `site`, if the site is part of the
    /// indexed universe.
    pub fn score(&self, site: &Site) -> Option<f64> {
        self.scores.get(site).copied()
    }

    /// Number of distinct sites in the index. Smaller than the universe
    /// only when the universe listed duplicate sites.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
