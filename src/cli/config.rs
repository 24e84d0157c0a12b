// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub aln1: Option<String>,
    pub aln2: Option<String>,
    pub output: Option<String>,
    pub format: Option<String>,

    // Range
    pub start: Option<usize>,
    pub end: Option<usize>,

    // Ranking
    pub top: Option<usize>,
    pub by_second: Option<bool>,
    pub save: Option<String>,

    // Logo
    pub metric: Option<String>,

    // Posterior sampling
    pub ci: Option<f64>,
    pub samples: Option<usize>,
    pub seed: Option<u64>,
    pub progress: Option<bool>,

    // Performance
    pub threads: Option<usize>,

    // Sequence filtering
    pub include_seqs: Option<String>,
    pub exclude_seqs: Option<String>,

    // Flags
    pub symbols_only: Option<bool>,
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# protcmp.toml - Configuration file for protcmp
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# First and second alignment (Clustal format)
aln1 = "/path/to/family_a.aln"
aln2 = "/path/to/family_b.aln"

# Output file for logo, scores and consensus tables
# output = "scores.tsv"

# Output format: tsv, csv, json (default: from file extension)
# format = "tsv"

# =============================================================================
# RANGE (1-based, inclusive; out-of-range values fall back to the full alignment)
# =============================================================================

# start = 75
# end = 125

# =============================================================================
# RANKING
# =============================================================================

# Number of top positions to report
top = 25

# Order by the SDI of the second alignment
by_second = false

# Save the ranking instead of printing it
# save = "sdi_rank.csv"

# =============================================================================
# LOGO
# =============================================================================

# Stack height metric: info, sdi
metric = "sdi"

# =============================================================================
# POSTERIOR SAMPLING
# =============================================================================

# Credible interval coverage, strictly between 0 and 1
ci = 0.95

# Posterior draws per column
samples = 100000

# Random seed (omit for a random seed, printed at run time)
# seed = 42

# Show a progress bar while sampling
progress = false

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detection)
# threads = 8

# =============================================================================
# SEQUENCE FILTERING
# =============================================================================

# Keep only sequences whose id matches this regex
# include_seqs = "^sp\\|"

# Drop sequences whose id matches this regex
# exclude_seqs = "fragment"

# =============================================================================
# FLAGS
# =============================================================================

# Consensus: print only the consensus sequence
symbols_only = false

# Validate inputs without computation (dry run)
dry_run = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config: Config = toml::from_str(&Config::generate_sample()).unwrap();
        assert_eq!(config.aln1.as_deref(), Some("/path/to/family_a.aln"));
        assert_eq!(config.top, Some(25));
        assert_eq!(config.ci, Some(0.95));
        assert_eq!(config.metric.as_deref(), Some("sdi"));
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("protcmp.toml");

        let config = Config {
            aln1: Some("a.aln".to_string()),
            seed: Some(7),
            samples: Some(500),
            ..Config::new()
        };
        config.to_file(&path).unwrap();

        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_config_file() {
        let err = Config::from_file("/nonexistent/protcmp.toml").unwrap_err();
        assert!(err.contains("Failed to read config file"));
    }
}
