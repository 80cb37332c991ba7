//! Monte Carlo estimation of de novo mutation severity burden.
//!
//! Given the de novo mutations observed in a gene and their combined
//! severity score, `onus` estimates how surprising that total is under a
//! null model where the same number of mutations land at random across the
//! gene, weighted by the background mutation rate of each site and allele.
//! The result is a one-sided empirical p-value.

#![deny(unused_variables)]
#![deny(dead_code)]
#![deny(unused_imports)]
#![deny(clippy::no_effect_underscore_binding)]

pub mod config;
pub mod error;
pub mod precision;
pub mod sampler;
pub mod severity;
pub mod simulate;
pub mod site;
pub mod weights;
