use thiserror::Error;

/// Input validation failures for a burden analysis.
///
/// All three causes are caller errors, detected before any random draw is
/// requested. None are recoverable internally and none produce a partial
/// result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error(
        "the sampler universe holds {sites} sites but {scores} severity scores were supplied. \
         The two sequences must be index-aligned."
    )]
    LengthMismatch { sites: usize, scores: usize },

    #[error("the sampler universe is empty. There are no sites to score against.")]
    EmptyUniverse,

    #[error("cannot simulate zero de novo mutations per trial. Every trial total would be zero.")]
    ZeroSampleCount,
}
