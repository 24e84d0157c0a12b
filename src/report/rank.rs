// rank.rs - Ranking of alignment positions by SDI

use crate::core::{ConsensusRecord, SdiScores};
use serde::Serialize;
use std::str::FromStr;

/// One row of the SDI ranking table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankRow {
    #[serde(rename = "Position")]
    pub position: usize,
    #[serde(rename = "Alignment 1 SDI")]
    pub sdi_first: f64,
    #[serde(rename = "Alignment 1 Identity")]
    pub identity_first: char,
    #[serde(rename = "Alignment 1 P")]
    pub p_first: f64,
    #[serde(rename = "Alignment 1 Lower")]
    pub lower_first: f64,
    #[serde(rename = "Alignment 1 Upper")]
    pub upper_first: f64,
    #[serde(rename = "Alignment 2 SDI")]
    pub sdi_second: f64,
    #[serde(rename = "Alignment 2 Identity")]
    pub identity_second: char,
    #[serde(rename = "Alignment 2 P")]
    pub p_second: f64,
    #[serde(rename = "Alignment 2 Lower")]
    pub lower_second: f64,
    #[serde(rename = "Alignment 2 Upper")]
    pub upper_second: f64,
}

/// Which alignment's SDI orders the ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKey {
    First,
    Second,
}

impl FromStr for RankKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" | "1" | "by-1st" => Ok(RankKey::First),
            "second" | "2" | "by-2nd" => Ok(RankKey::Second),
            _ => Err(format!("Invalid rank key: {}. Use: first, second", s)),
        }
    }
}

impl RankKey {
    pub fn description(&self) -> &str {
        match self {
            RankKey::First => "SDI of alignment 1",
            RankKey::Second => "SDI of alignment 2",
        }
    }
}

/// Join SDI scores and consensus records column by column.
/// `start` is the 1-based display position of column 0.
pub fn build_rank_rows(
    start: usize,
    sdi: &SdiScores,
    consensus_first: &[ConsensusRecord],
    consensus_second: &[ConsensusRecord],
) -> Result<Vec<RankRow>, String> {
    let n = sdi.first.len();
    if sdi.second.len() != n || consensus_first.len() != n || consensus_second.len() != n {
        return Err(format!(
            "Cannot join report columns of different lengths: SDI {}/{}, consensus {}/{}",
            n,
            sdi.second.len(),
            consensus_first.len(),
            consensus_second.len()
        ));
    }

    Ok((0..n)
        .map(|i| {
            let c1 = &consensus_first[i];
            let c2 = &consensus_second[i];
            RankRow {
                position: start + i,
                sdi_first: sdi.first[i],
                identity_first: c1.symbol,
                p_first: c1.probability,
                lower_first: c1.lower,
                upper_first: c1.upper,
                sdi_second: sdi.second[i],
                identity_second: c2.symbol,
                p_second: c2.probability,
                lower_second: c2.lower,
                upper_second: c2.upper,
            }
        })
        .collect())
}

/// Sort rows by descending SDI and keep the first `top`. Ties keep position order.
pub fn rank_rows(mut rows: Vec<RankRow>, key: RankKey, top: usize) -> Vec<RankRow> {
    let score = |row: &RankRow| match key {
        RankKey::First => row.sdi_first,
        RankKey::Second => row.sdi_second,
    };
    rows.sort_by(|a, b| score(b).total_cmp(&score(a)));
    rows.truncate(top);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(symbol: char) -> ConsensusRecord {
        ConsensusRecord {
            symbol,
            probability: 0.5,
            lower: 0.1,
            upper: 0.9,
        }
    }

    fn sample_rows() -> Vec<RankRow> {
        let sdi = SdiScores {
            first: vec![0.1, 0.7, 0.3, 0.7],
            second: vec![0.9, 0.0, 0.2, 0.4],
        };
        let c1: Vec<_> = "ACDE".chars().map(record).collect();
        let c2: Vec<_> = "WCDY".chars().map(record).collect();
        build_rank_rows(75, &sdi, &c1, &c2).unwrap()
    }

    #[test]
    fn test_build_rank_rows_positions() {
        let rows = sample_rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].position, 75);
        assert_eq!(rows[3].position, 78);
        assert_eq!(rows[0].identity_second, 'W');
    }

    #[test]
    fn test_build_rank_rows_rejects_mismatched_columns() {
        let sdi = SdiScores {
            first: vec![0.1, 0.2],
            second: vec![0.1, 0.2],
        };
        assert!(build_rank_rows(1, &sdi, &[record('A')], &[record('A')]).is_err());
    }

    #[test]
    fn test_rank_by_first() {
        let ranked = rank_rows(sample_rows(), RankKey::First, 10);
        let positions: Vec<usize> = ranked.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![76, 78, 77, 75]);
    }

    #[test]
    fn test_rank_by_second_with_top() {
        let ranked = rank_rows(sample_rows(), RankKey::Second, 2);
        let positions: Vec<usize> = ranked.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![75, 78]);
    }

    #[test]
    fn test_rank_key_from_str() {
        assert_eq!(RankKey::from_str("first").unwrap(), RankKey::First);
        assert_eq!(RankKey::from_str("2").unwrap(), RankKey::Second);
        assert!(RankKey::from_str("third").is_err());
    }
}
