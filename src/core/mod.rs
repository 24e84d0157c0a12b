// mod.rs - Statistics core module

pub mod alphabet;
pub mod consensus;
pub mod distribution;
pub mod divergence;
pub mod error;
pub mod information;
pub mod sdi;

// Re-export main types for convenience
pub use alphabet::{AA_COUNT, AMINO_ACIDS, GAP};
pub use consensus::{
    consensus_sequence, hpd_interval, ConsensusConfig, ConsensusEstimator, ConsensusRecord,
};
pub use distribution::{alignment_distributions, column_distribution, Distribution, DistributionMode};
pub use divergence::{alignment_divergence, jensen_shannon_distance, validate_alignment_lengths};
pub use error::{Result, StatsError};
pub use information::{information_content, shannon_entropy};
pub use sdi::{compare_alignments, selection_differentiation_index, ComparisonScores, SdiScores};
