// lib.rs - protcmp library root

//! # protcmp - Comparative statistics for two protein multiple sequence alignments
//!
//! This library scores every column of two equal-length protein alignments, typically
//! two families or subfamilies aligned against each other, to find positions that are
//! conserved within each family but differ between them.
//!
//! ## Features
//!
//! - **Per-column statistics**: pseudo-count smoothed residue distributions, Shannon
//!   information content with small-sample correction, Jensen-Shannon divergence
//! - **Selection-differentiation index**: conservation weighted by between-family divergence
//! - **Bayesian consensus**: modal residue with a highest-posterior-density interval
//!   from Dirichlet posterior sampling
//! - **Parallel processing**: columns are scored and sampled with rayon
//! - **Reports**: SDI ranking, logo height matrices, score and consensus tables (TSV, CSV, JSON)
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use protcmp::prelude::*;
//! use rand::SeedableRng;
//!
//! let family_a = read_alignment(std::path::Path::new("family_a.aln"))?;
//! let family_b = read_alignment(std::path::Path::new("family_b.aln"))?;
//!
//! // Per-column scores of both alignments
//! let scores = compare_alignments(&family_a, &family_b).map_err(|e| e.to_string())?;
//!
//! // Consensus of the first alignment with 95% credible intervals
//! let estimator = ConsensusEstimator::new(ConsensusConfig::default());
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let consensus = estimator.estimate(&family_a, &mut rng).map_err(|e| e.to_string())?;
//!
//! // Rank columns by the SDI of the first alignment
//! let sdi = selection_differentiation_index(&family_a, &family_b).map_err(|e| e.to_string())?;
//! let rows = build_rank_rows(1, &sdi, &consensus, &consensus)?;
//! let ranked = rank_rows(rows, RankKey::First, 25);
//! # let _ = (scores, ranked);
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod output;
pub mod report;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{
        compare_alignments, information_content, selection_differentiation_index,
        validate_alignment_lengths,
    };
    pub use crate::core::{ConsensusConfig, ConsensusEstimator, ConsensusRecord, StatsError};
    pub use crate::data::{read_alignment, Alignment, SequenceRecord};
    pub use crate::report::{build_rank_rows, consensus_rows, logo_matrix, rank_rows, score_rows};
    pub use crate::report::{LogoMetric, RankKey};
}

// Re-export main types at the root level for convenience
pub use crate::cli::{Args, ValidationResult};
pub use crate::core::{ComparisonScores, ConsensusEstimator, StatsError};
pub use crate::data::{Alignment, SequenceRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "protcmp v{} - Comparative statistics for protein alignments",
        VERSION
    )
}
