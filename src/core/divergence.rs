// divergence.rs - Jensen-Shannon distance between matching alignment columns

use crate::core::distribution::{alignment_distributions, Distribution, DistributionMode};
use crate::core::error::{Result, StatsError};
use crate::data::Alignment;
use rayon::prelude::*;

/// Fail unless both alignments have the same number of columns
pub fn validate_alignment_lengths(first: &Alignment, second: &Alignment) -> Result<()> {
    if first.length() != second.length() {
        return Err(StatsError::LengthMismatch {
            first: first.length(),
            second: second.length(),
        });
    }
    Ok(())
}

/// Jensen-Shannon distance (base 2), in [0, 1] and symmetric in its arguments
pub fn jensen_shannon_distance(p: &Distribution, q: &Distribution) -> f64 {
    let mut divergence = 0.0;
    for (&pi, &qi) in p.iter().zip(q.iter()) {
        let mi = 0.5 * (pi + qi);
        if pi > 0.0 {
            divergence += pi * (pi / mi).log2();
        }
        if qi > 0.0 {
            divergence += qi * (qi / mi).log2();
        }
    }
    (0.5 * divergence).clamp(0.0, 1.0).sqrt()
}

/// Per-column distance between the residue distributions of two alignments.
///
/// Statistical divergence is asymmetric; the square root of the Jensen-Shannon
/// divergence is a bounded metric, so distance(A, B) == distance(B, A).
pub fn alignment_divergence(first: &Alignment, second: &Alignment) -> Result<Vec<f64>> {
    validate_alignment_lengths(first, second)?;

    let p = alignment_distributions(first, DistributionMode::Raw)?;
    let q = alignment_distributions(second, DistributionMode::Raw)?;

    Ok(p.par_iter()
        .zip(q.par_iter())
        .map(|(pk, qk)| jensen_shannon_distance(pk, qk))
        .collect())
}
