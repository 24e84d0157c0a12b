// logo.rs - Sequence logo height matrices

use crate::core::alphabet::AA_COUNT;
use crate::core::{
    alignment_distributions, information_content, selection_differentiation_index,
    validate_alignment_lengths, Distribution, DistributionMode,
};
use crate::data::Alignment;
use std::str::FromStr;

/// Metric that sets the total stack height of a logo column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoMetric {
    Info,
    Sdi,
}

impl FromStr for LogoMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(LogoMetric::Info),
            "sdi" => Ok(LogoMetric::Sdi),
            _ => Err(format!("Invalid logo metric: {}. Use: info, sdi", s)),
        }
    }
}

impl LogoMetric {
    pub fn description(&self) -> &str {
        match self {
            LogoMetric::Info => "information content (bits)",
            LogoMetric::Sdi => "Selection-differentiation index",
        }
    }

    /// Symmetric axis limit a renderer should use
    pub fn axis_limit(&self) -> f64 {
        match self {
            LogoMetric::Info => 4.33,
            LogoMetric::Sdi => 1.0,
        }
    }
}

/// Residue heights for a run of columns. The first alignment is drawn above the
/// axis (positive heights), the second below it (negative heights).
#[derive(Debug, Clone, PartialEq)]
pub struct LogoMatrix {
    pub metric: LogoMetric,
    pub positions: Vec<usize>,
    pub first: Vec<Distribution>,
    pub second: Vec<Distribution>,
}

/// Build the logo matrix: stack height is the metric, each residue's share is its
/// smoothed frequency. `start` is the 1-based display position of column 0.
pub fn logo_matrix(
    first: &Alignment,
    second: &Alignment,
    metric: LogoMetric,
    start: usize,
) -> crate::core::Result<LogoMatrix> {
    validate_alignment_lengths(first, second)?;

    let (score_first, score_second) = match metric {
        LogoMetric::Info => (information_content(first)?, information_content(second)?),
        LogoMetric::Sdi => {
            let sdi = selection_differentiation_index(first, second)?;
            (sdi.first, sdi.second)
        }
    };

    let dist_first = alignment_distributions(first, DistributionMode::Smoothed)?;
    let dist_second = alignment_distributions(second, DistributionMode::Smoothed)?;

    Ok(LogoMatrix {
        metric,
        positions: (start..start + first.length()).collect(),
        first: scale(&score_first, &dist_first, 1.0),
        second: scale(&score_second, &dist_second, -1.0),
    })
}

fn scale(scores: &[f64], distributions: &[Distribution], sign: f64) -> Vec<Distribution> {
    scores
        .iter()
        .zip(distributions)
        .map(|(&s, d)| {
            let mut heights = [0.0; AA_COUNT];
            for (h, &p) in heights.iter_mut().zip(d) {
                *h = sign * s * p;
            }
            heights
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StatsError;

    fn make_alignment(seqs: &[&str]) -> Alignment {
        Alignment::from_sequences(seqs).unwrap()
    }

    #[test]
    fn test_info_logo_signs_and_heights() {
        let aln1 = make_alignment(&["AC"; 10]);
        let aln2 = make_alignment(&["AW"; 10]);

        let logo = logo_matrix(&aln1, &aln2, LogoMetric::Info, 5).unwrap();
        assert_eq!(logo.positions, vec![5, 6]);

        let info = information_content(&aln1).unwrap();
        let total_first: f64 = logo.first[0].iter().sum();
        let total_second: f64 = logo.second[0].iter().sum();
        assert!((total_first - info[0]).abs() < 1e-9);
        assert!((total_second + info[0]).abs() < 1e-9);
        assert!(logo.first.iter().flatten().all(|&h| h >= 0.0));
        assert!(logo.second.iter().flatten().all(|&h| h <= 0.0));
    }

    #[test]
    fn test_sdi_logo_flat_where_families_agree() {
        let aln1 = make_alignment(&["AC"; 10]);
        let aln2 = make_alignment(&["AW"; 10]);

        let logo = logo_matrix(&aln1, &aln2, LogoMetric::Sdi, 1).unwrap();
        assert!(logo.first[0].iter().all(|&h| h == 0.0));
        assert!(logo.first[1].iter().sum::<f64>() > 0.0);
    }

    #[test]
    fn test_logo_length_mismatch() {
        let aln1 = make_alignment(&["ACD"]);
        let aln2 = make_alignment(&["ACDE"]);
        assert_eq!(
            logo_matrix(&aln1, &aln2, LogoMetric::Info, 1),
            Err(StatsError::LengthMismatch { first: 3, second: 4 })
        );
    }

    #[test]
    fn test_logo_metric_from_str() {
        assert_eq!(LogoMetric::from_str("INFO").unwrap(), LogoMetric::Info);
        assert_eq!(LogoMetric::from_str("sdi").unwrap(), LogoMetric::Sdi);
        assert!(LogoMetric::from_str("entropy").is_err());
    }
}
