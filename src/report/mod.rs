// mod.rs - Report builders (tables consumed by the output writers)

pub mod logo;
pub mod rank;

pub use logo::{logo_matrix, LogoMatrix, LogoMetric};
pub use rank::{build_rank_rows, rank_rows, RankKey, RankRow};

use crate::core::{ComparisonScores, ConsensusRecord};
use serde::Serialize;

/// Every per-position score of a comparison, one row per column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRow {
    pub position: usize,
    pub info_1: f64,
    pub info_2: f64,
    pub divergence: f64,
    pub sdi_1: f64,
    pub sdi_2: f64,
}

/// Consensus record keyed by display position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsensusRow {
    pub position: usize,
    pub symbol: char,
    pub probability: f64,
    pub lower: f64,
    pub upper: f64,
}

pub fn score_rows(start: usize, scores: &ComparisonScores) -> Vec<ScoreRow> {
    (0..scores.len())
        .map(|i| ScoreRow {
            position: start + i,
            info_1: scores.info_first[i],
            info_2: scores.info_second[i],
            divergence: scores.divergence[i],
            sdi_1: scores.sdi_first[i],
            sdi_2: scores.sdi_second[i],
        })
        .collect()
}

pub fn consensus_rows(start: usize, records: &[ConsensusRecord]) -> Vec<ConsensusRow> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| ConsensusRow {
            position: start + i,
            symbol: r.symbol,
            probability: r.probability,
            lower: r.lower,
            upper: r.upper,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compare_alignments;
    use crate::data::Alignment;

    #[test]
    fn test_score_rows_follow_display_range() {
        let aln1 = Alignment::from_sequences(&["ACDE"; 4]).unwrap();
        let aln2 = Alignment::from_sequences(&["ACDW"; 4]).unwrap();
        let scores = compare_alignments(&aln1, &aln2).unwrap();

        let rows = score_rows(10, &scores);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].position, 10);
        assert_eq!(rows[3].position, 13);
        assert_eq!(rows[0].divergence, 0.0);
        assert!((rows[3].divergence - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_consensus_rows() {
        let records = vec![ConsensusRecord {
            symbol: 'K',
            probability: 0.8,
            lower: 0.6,
            upper: 0.95,
        }];
        let rows = consensus_rows(3, &records);
        assert_eq!(rows[0].position, 3);
        assert_eq!(rows[0].symbol, 'K');
    }
}
