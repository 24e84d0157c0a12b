// information.rs - Information content (conservation) per alignment column

use crate::core::alphabet::{AA_COUNT, AMINO_ACIDS};
use crate::core::distribution::{alignment_distributions, Distribution, DistributionMode};
use crate::core::error::{Result, StatsError};
use crate::data::Alignment;
use rayon::prelude::*;
use std::f64::consts::LN_2;

/// Shannon entropy of a distribution in bits. Zero-probability terms contribute nothing.
pub fn shannon_entropy(distribution: &Distribution) -> f64 {
    -distribution
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * p.log2())
        .sum::<f64>()
}

/// Finite-sample bias correction for `sequence_count` observations, in bits
pub fn small_sample_correction(sequence_count: usize) -> f64 {
    (1.0 / LN_2) * (AA_COUNT as f64 - 1.0) / (2.0 * sequence_count as f64)
}

/// Information content of every column relative to a uniform background.
///
/// `R_i = max(0, log2(20) - (H_i + e_n))` where `H_i` is the entropy of the raw
/// column distribution and `e_n` the small-sample correction. Reference:
/// Schneider et al. (1986), as used for sequence logos.
pub fn information_content(alignment: &Alignment) -> Result<Vec<f64>> {
    if alignment.is_empty() {
        return Err(StatsError::EmptyAlignment);
    }

    let max_bits = AMINO_ACIDS.max_entropy_bits();
    let correction = small_sample_correction(alignment.sequence_count());
    let distributions = alignment_distributions(alignment, DistributionMode::Raw)?;

    Ok(distributions
        .par_iter()
        .map(|d| (max_bits - (shannon_entropy(d) + correction)).max(0.0))
        .collect())
}
