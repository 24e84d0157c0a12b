// distribution.rs - Per-column residue distributions

use crate::core::alphabet::{AA_COUNT, AMINO_ACIDS};
use crate::core::error::{Result, StatsError};
use crate::data::Alignment;
use rayon::prelude::*;

/// Probability of each residue, in alphabet order
pub type Distribution = [f64; AA_COUNT];

/// Pseudo-count added to every residue in smoothed mode (uninformative prior)
pub const PSEUDO_COUNT: f64 = 0.05;

/// How column counts are turned into probabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionMode {
    /// Counts plus [`PSEUDO_COUNT`]; every entry is strictly positive.
    /// Used where the distribution seeds a Dirichlet posterior.
    Smoothed,
    /// Plain relative frequencies; an all-gap column becomes uniform.
    Raw,
}

/// Count residues at one column. Gaps and unknown symbols are not counted.
pub fn column_counts(alignment: &Alignment, position: usize) -> Result<[usize; AA_COUNT]> {
    check_position(alignment, position)?;

    let mut counts = [0usize; AA_COUNT];
    for residue in alignment.column(position) {
        if let Some(i) = AMINO_ACIDS.index_of(residue) {
            counts[i] += 1;
        }
    }
    Ok(counts)
}

/// Distribution of residues at one column
pub fn column_distribution(
    alignment: &Alignment,
    position: usize,
    mode: DistributionMode,
) -> Result<Distribution> {
    let counts = column_counts(alignment, position)?;
    Ok(normalize(&counts, mode))
}

/// Distributions for every column, indexed by position
pub fn alignment_distributions(
    alignment: &Alignment,
    mode: DistributionMode,
) -> Result<Vec<Distribution>> {
    if alignment.is_empty() {
        return Err(StatsError::EmptyAlignment);
    }

    (0..alignment.length())
        .into_par_iter()
        .map(|position| column_distribution(alignment, position, mode))
        .collect()
}

fn normalize(counts: &[usize; AA_COUNT], mode: DistributionMode) -> Distribution {
    let mut dist = [0.0; AA_COUNT];

    match mode {
        DistributionMode::Smoothed => {
            for (d, &c) in dist.iter_mut().zip(counts) {
                *d = c as f64 + PSEUDO_COUNT;
            }
        }
        DistributionMode::Raw => {
            if counts.iter().all(|&c| c == 0) {
                return [1.0 / AA_COUNT as f64; AA_COUNT];
            }
            for (d, &c) in dist.iter_mut().zip(counts) {
                *d = c as f64;
            }
        }
    }

    let total: f64 = dist.iter().sum();
    for d in dist.iter_mut() {
        *d /= total;
    }
    dist
}

fn check_position(alignment: &Alignment, position: usize) -> Result<()> {
    if alignment.is_empty() {
        return Err(StatsError::EmptyAlignment);
    }
    if position >= alignment.length() {
        return Err(StatsError::PositionOutOfRange {
            position,
            length: alignment.length(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(symbol: u8) -> usize {
        AMINO_ACIDS.index_of(symbol).unwrap()
    }

    fn make_alignment(seqs: &[&str]) -> Alignment {
        Alignment::from_sequences(seqs).unwrap()
    }

    #[test]
    fn test_raw_distribution_simple_case() {
        let aln = make_alignment(&["ACDE", "ACDE", "ACDE"]);
        let dist = alignment_distributions(&aln, DistributionMode::Raw).unwrap();

        assert_eq!(dist.len(), 4);
        for (i, d) in dist.iter().enumerate() {
            assert!((d.iter().sum::<f64>() - 1.0).abs() < 1e-12);
            assert_eq!(d[idx(b"ACDE"[i])], 1.0);
        }
    }

    #[test]
    fn test_raw_distribution_mixed_residues() {
        let aln = make_alignment(&["ACDE", "ACDF", "ACDG"]);
        let dist = alignment_distributions(&aln, DistributionMode::Raw).unwrap();

        for aa in b"EFG" {
            assert!((dist[3][idx(*aa)] - 1.0 / 3.0).abs() < 1e-12);
        }
        let others: f64 = AMINO_ACIDS
            .symbols()
            .iter()
            .filter(|s| !b"EFG".contains(*s))
            .map(|s| dist[3][idx(*s)])
            .sum();
        assert_eq!(others, 0.0);
    }

    #[test]
    fn test_all_gap_column_is_uniform() {
        let aln = make_alignment(&["A--E", "A--E", "A--E"]);
        let dist = alignment_distributions(&aln, DistributionMode::Raw).unwrap();

        assert_eq!(dist[0][idx(b'A')], 1.0);
        assert_eq!(dist[3][idx(b'E')], 1.0);
        for d in &dist[1..3] {
            assert!(d.iter().all(|&p| p == 1.0 / 20.0));
        }
    }

    #[test]
    fn test_unknown_symbols_behave_like_gaps() {
        let aln = make_alignment(&["X", "A", "-"]);
        let dist = column_distribution(&aln, 0, DistributionMode::Raw).unwrap();
        assert_eq!(dist[idx(b'A')], 1.0);
    }

    #[test]
    fn test_raw_weighted_counts() {
        let aln = make_alignment(&["A", "A", "C", "C", "C"]);
        let dist = column_distribution(&aln, 0, DistributionMode::Raw).unwrap();

        assert!((dist[idx(b'A')] - 0.4).abs() < 1e-12);
        assert!((dist[idx(b'C')] - 0.6).abs() < 1e-12);
        let rest: f64 = dist.iter().sum::<f64>() - dist[idx(b'A')] - dist[idx(b'C')];
        assert!(rest.abs() < 1e-12);
    }

    #[test]
    fn test_smoothed_distribution_is_strictly_positive() {
        let aln = make_alignment(&["A", "A", "C", "C", "C"]);
        let dist = column_distribution(&aln, 0, DistributionMode::Smoothed).unwrap();

        assert!(dist.iter().all(|&p| p > 0.0));
        assert!((dist.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        // (3 + 0.05) / (5 + 20 * 0.05)
        assert!((dist[idx(b'C')] - 3.05 / 6.0).abs() < 1e-12);
        assert!((dist[idx(b'W')] - 0.05 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_smoothed_all_gap_column_is_uniform() {
        let aln = make_alignment(&["-", "-"]);
        let dist = column_distribution(&aln, 0, DistributionMode::Smoothed).unwrap();
        assert!(dist.iter().all(|&p| (p - 0.05).abs() < 1e-12));
    }

    #[test]
    fn test_column_counts() {
        let aln = make_alignment(&["W", "w", "-", "Y"]);
        let counts = column_counts(&aln, 0).unwrap();
        assert_eq!(counts[idx(b'W')], 2);
        assert_eq!(counts[idx(b'Y')], 1);
        assert_eq!(counts.iter().sum::<usize>(), 3);
    }

    #[test]
    fn test_errors() {
        let aln = make_alignment(&["ACD"]);
        assert_eq!(
            column_distribution(&aln, 3, DistributionMode::Raw),
            Err(StatsError::PositionOutOfRange {
                position: 3,
                length: 3
            })
        );

        let empty = Alignment::empty();
        assert_eq!(
            alignment_distributions(&empty, DistributionMode::Raw),
            Err(StatsError::EmptyAlignment)
        );
    }
}
