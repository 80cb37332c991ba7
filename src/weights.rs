//! Enrichment weighting of raw severity scores.
//!
//! Raw CADD-style severity scores understate how unevenly pathogenic
//! burden concentrates: de novo mutations in known dominant genes are
//! enriched at high scores, in regionally constrained stretches of
//! protein, and above all among protein-truncating alleles. These tables
//! hold the empirically derived enrichment of each severity band, and
//! callers multiply raw scores by them before handing the score sequence
//! to the simulation engine. The engine itself never consults this
//! module; weighted and unweighted scores flow through it identically.
//!
//! Bands are half-open `[lo, hi)` intervals of the scaled severity score,
//! five units wide up to 40; everything at or above 40 takes the last
//! band's weight.

/// Enrichment by severity band for protein-altering sites outside
/// regionally constrained stretches.
const UNCONSTRAINED: [(f64, f64, f64); 9] = [
    (0.0, 5.0, 0.89378999169559),
    (5.0, 10.0, 2.45095807132636),
    (10.0, 15.0, 1.23783036756664),
    (15.0, 20.0, 1.04908176145445),
    (20.0, 25.0, 2.13085809157198),
    (25.0, 30.0, 4.97619976726511),
    (30.0, 35.0, 6.73650544131241),
    (35.0, 40.0, 5.68752647734537),
    (40.0, 1000.0, 5.68752647734537),
];

/// Enrichment by severity band for protein-altering sites inside
/// regionally constrained stretches. The lowest band is zero: benign
/// missense in constrained regions is depleted, not enriched.
const CONSTRAINED: [(f64, f64, f64); 9] = [
    (0.0, 5.0, 0.0),
    (5.0, 10.0, 4.05516581596172),
    (10.0, 15.0, 2.75708159237827),
    (15.0, 20.0, 4.81275329358394),
    (20.0, 25.0, 7.41041424690547),
    (25.0, 30.0, 16.5358474569603),
    (30.0, 35.0, 19.0139355018205),
    (35.0, 40.0, 35.7654385873813),
    (40.0, 1000.0, 35.7654385873813),
];

/// Enrichment for protein-truncating alleles, independent of score.
pub const TRUNCATING_WEIGHT: f64 = 30.4986359738963;

/// Functional class of a candidate allele, as far as weighting cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consequence {
    /// Protein-altering (missense and equivalents); weight depends on the
    /// severity band and on regional constraint.
    Altering { constrained: bool },
    /// Protein-truncating (nonsense, frameshift, splice-disrupting).
    Truncating,
}

/// The enrichment weight for one allele.
///
/// Scores below the first band clamp to it, scores beyond the last band
/// clamp to the last; CADD scaled scores live well inside the tabled
/// range either way.
pub fn enrichment_weight(score: f64, consequence: Consequence) -> f64 {
    match consequence {
        Consequence::Truncating => TRUNCATING_WEIGHT,
        Consequence::Altering { constrained } => {
            let table = if constrained {
                &CONSTRAINED
            } else {
                &UNCONSTRAINED
            };
            let (_, _, last_weight) = table[table.len() - 1];
            table
                .iter()
                .find(|&&(_, hi, _)| score < hi)
                .map_or(last_weight, |&(_, _, weight)| weight)
        }
    }
}

/// Applies [`enrichment_weight`] across an index-aligned score sequence,
/// producing the weighted scores the simulation engine consumes.
pub fn weight_scores(scores: &[f64], consequences: &[Consequence]) -> Vec<f64> {
    assert_eq!(
        scores.len(),
        consequences.len(),
        "scores and consequences must be index-aligned"
    );
    scores
        .iter()
        .zip(consequences)
        .map(|(&score, &cq)| score * enrichment_weight(score, cq))
        .collect()
}
