// error.rs - Error types for the statistics core

use thiserror::Error;

/// Failures raised by the statistics core.
///
/// All-gap columns are not an error: they yield a uniform distribution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("Alignment lengths differ: {first} vs {second}")]
    LengthMismatch { first: usize, second: usize },

    #[error("Alignment must contain at least one sequence")]
    EmptyAlignment,

    #[error("Invalid credible interval: {0}")]
    InvalidInterval(String),

    #[error("Position {position} is out of range for alignment of length {length}")]
    PositionOutOfRange { position: usize, length: usize },

    #[error("Posterior sampling failed: {0}")]
    Sampling(String),
}

/// Result type alias for the statistics core.
pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message_names_both_lengths() {
        let err = StatsError::LengthMismatch { first: 3, second: 4 };
        assert_eq!(err.to_string(), "Alignment lengths differ: 3 vs 4");
    }

    #[test]
    fn test_empty_alignment_message() {
        assert!(StatsError::EmptyAlignment
            .to_string()
            .starts_with("Alignment must contain at least one"));
    }
}
