// sdi.rs - Selection-differentiation index

use crate::core::alphabet::AMINO_ACIDS;
use crate::core::divergence::alignment_divergence;
use crate::core::error::Result;
use crate::core::information::information_content;
use crate::data::Alignment;
use serde::Serialize;

/// SDI vectors for a pair of alignments, one value per column
#[derive(Debug, Clone, PartialEq)]
pub struct SdiScores {
    pub first: Vec<f64>,
    pub second: Vec<f64>,
}

/// Every per-column score computed when comparing two alignments
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonScores {
    pub info_first: Vec<f64>,
    pub info_second: Vec<f64>,
    pub divergence: Vec<f64>,
    pub sdi_first: Vec<f64>,
    pub sdi_second: Vec<f64>,
}

impl ComparisonScores {
    pub fn len(&self) -> usize {
        self.divergence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.divergence.is_empty()
    }
}

/// Selection-differentiation index of both alignments.
///
/// For alignment A at column n:
///
/// `SDI_A[n] = I_A[n] * JSD[n] / log2(20)`
///
/// `I_A[n]` (information content) measures selective pressure inside family A and
/// `JSD[n]` how far the residue distributions of the two families have drifted
/// apart. Dividing by the maximum information content normalises the index to
/// [0, 1]. High values mark residues under differentiating selection.
pub fn selection_differentiation_index(first: &Alignment, second: &Alignment) -> Result<SdiScores> {
    let scores = compare_alignments(first, second)?;
    Ok(SdiScores {
        first: scores.sdi_first,
        second: scores.sdi_second,
    })
}

/// Information content, divergence and SDI for both alignments in one pass
pub fn compare_alignments(first: &Alignment, second: &Alignment) -> Result<ComparisonScores> {
    let divergence = alignment_divergence(first, second)?;
    let info_first = information_content(first)?;
    let info_second = information_content(second)?;

    let sdi_first = weight_by_divergence(&info_first, &divergence);
    let sdi_second = weight_by_divergence(&info_second, &divergence);

    Ok(ComparisonScores {
        info_first,
        info_second,
        divergence,
        sdi_first,
        sdi_second,
    })
}

fn weight_by_divergence(info: &[f64], divergence: &[f64]) -> Vec<f64> {
    let max_bits = AMINO_ACIDS.max_entropy_bits();
    info.iter()
        .zip(divergence)
        .map(|(i, d)| i * d / max_bits)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::StatsError;

    fn make_alignment(seqs: &[&str]) -> Alignment {
        Alignment::from_sequences(seqs).unwrap()
    }

    #[test]
    fn test_select_diff_index_shapes() {
        let aln1 = make_alignment(&["ACD"; 10]);
        let aln2 = make_alignment(&["AED"; 10]);

        let sdi = selection_differentiation_index(&aln1, &aln2).unwrap();
        assert_eq!(sdi.first.len(), 3);
        assert_eq!(sdi.second.len(), 3);
        assert!(sdi.first.iter().all(|&v| v >= 0.0));
        assert!(sdi.second.iter().all(|&v| v >= 0.0));

        // Only the middle column differs
        assert_eq!(sdi.first[0], 0.0);
        assert!(sdi.first[1] > 0.0);
        assert_eq!(sdi.first[2], 0.0);
    }

    #[test]
    fn test_identical_alignments_have_zero_sdi() {
        let aln1 = make_alignment(&["ACDE", "ACDE", "ACDE"]);
        let aln2 = make_alignment(&["ACDE", "ACDE", "ACDE"]);

        let scores = compare_alignments(&aln1, &aln2).unwrap();
        assert_eq!(scores.divergence, vec![0.0; 4]);
        assert_eq!(scores.sdi_first, vec![0.0; 4]);
        assert_eq!(scores.sdi_second, vec![0.0; 4]);
    }

    #[test]
    fn test_sdi_formula() {
        let aln1 = make_alignment(&["AAAA"; 10]);
        let aln2 = make_alignment(&["CCCC"; 5]);

        let scores = compare_alignments(&aln1, &aln2).unwrap();
        let max_bits = (20f64).log2();
        for i in 0..4 {
            assert!((scores.divergence[i] - 1.0).abs() < 1e-12);
            assert!((scores.sdi_first[i] - scores.info_first[i] / max_bits).abs() < 1e-12);
            assert!((scores.sdi_second[i] - scores.info_second[i] / max_bits).abs() < 1e-12);
        }
        // Larger family carries less small-sample correction
        assert!(scores.sdi_first[0] > scores.sdi_second[0]);
        assert!(scores.sdi_first.iter().all(|&v| v <= 1.0));
    }

    #[test]
    fn test_sdi_non_negative_for_mixed_columns() {
        let aln1 = make_alignment(&["AC-W", "AD-W", "CC-Y", "A--Y"]);
        let aln2 = make_alignment(&["AE-W", "GD-W", "CCKY"]);

        let sdi = selection_differentiation_index(&aln1, &aln2).unwrap();
        assert!(sdi.first.iter().chain(&sdi.second).all(|&v| v >= 0.0));
    }

    #[test]
    fn test_sdi_propagates_length_mismatch() {
        let aln1 = make_alignment(&["ACD"]);
        let aln2 = make_alignment(&["ACDE"]);
        assert_eq!(
            selection_differentiation_index(&aln1, &aln2),
            Err(StatsError::LengthMismatch { first: 3, second: 4 })
        );
    }
}
