// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};
use crate::core::consensus::{DEFAULT_CI, DEFAULT_SAMPLES};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.aln1.is_none() {
            self.aln1 = config.aln1;
        }
        if self.aln2.is_none() {
            self.aln2 = config.aln2;
        }
        if self.output.is_none() {
            self.output = config.output;
        }
        if self.format.is_none() {
            self.format = config.format;
        }

        // Range
        if self.start.is_none() {
            self.start = config.start;
        }
        if self.end.is_none() {
            self.end = config.end;
        }

        // Ranking (only override defaults, not explicit CLI values)
        if self.top == 25 {
            if let Some(top) = config.top {
                self.top = top;
            }
        }
        if self.save.is_none() {
            self.save = config.save;
        }
        if self.metric == "sdi" {
            if let Some(metric) = config.metric {
                self.metric = metric;
            }
        }

        // Posterior sampling
        if self.ci == DEFAULT_CI {
            if let Some(ci) = config.ci {
                self.ci = ci;
            }
        }
        if self.samples == DEFAULT_SAMPLES {
            if let Some(samples) = config.samples {
                self.samples = samples;
            }
        }
        if self.seed.is_none() {
            self.seed = config.seed;
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Sequence filtering
        if self.include_seqs.is_none() {
            self.include_seqs = config.include_seqs;
        }
        if self.exclude_seqs.is_none() {
            self.exclude_seqs = config.exclude_seqs;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.by_second && config.by_second.unwrap_or(false) {
            self.by_second = true;
        }
        if !self.progress && config.progress.unwrap_or(false) {
            self.progress = true;
        }
        if !self.symbols_only && config.symbols_only.unwrap_or(false) {
            self.symbols_only = true;
        }
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    fn parse(args: &[&str]) -> Args {
        Args::from_args(&["protcmp"], args).unwrap()
    }

    #[test]
    fn test_cli_values_win_over_config() {
        let args = parse(&["rank", "--aln1", "cli.aln", "--top", "10"]);
        let config = Config {
            aln1: Some("config.aln".to_string()),
            aln2: Some("second.aln".to_string()),
            top: Some(50),
            ..Config::new()
        };

        let merged = args.merge_with_config(config);
        assert_eq!(merged.aln1.as_deref(), Some("cli.aln"));
        assert_eq!(merged.aln2.as_deref(), Some("second.aln"));
        assert_eq!(merged.top, 10);
    }

    #[test]
    fn test_config_fills_defaults() {
        let args = parse(&["consensus"]);
        let config = Config {
            ci: Some(0.9),
            samples: Some(2000),
            seed: Some(11),
            metric: Some("info".to_string()),
            symbols_only: Some(true),
            ..Config::new()
        };

        let merged = args.merge_with_config(config);
        assert_eq!(merged.ci, 0.9);
        assert_eq!(merged.samples, 2000);
        assert_eq!(merged.seed, Some(11));
        assert_eq!(merged.metric, "info");
        assert!(merged.symbols_only);
        assert!(!merged.by_second);
    }
}
