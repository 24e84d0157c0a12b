// args.rs - Command line arguments definition

use argh::FromArgs;
use std::str::FromStr;

#[derive(FromArgs)]
/// protcmp - Compare conservation and divergence of two protein alignments
pub struct Args {
    /// command: rank, logo, scores, consensus
    #[argh(positional)]
    pub command: Option<String>,

    /// first alignment (Clustal format)
    #[argh(option)]
    pub aln1: Option<String>,

    /// second alignment (Clustal format)
    #[argh(option)]
    pub aln2: Option<String>,

    /// first column of the analysed range, 1-based inclusive (default: 1)
    #[argh(option)]
    pub start: Option<usize>,

    /// last column of the analysed range, 1-based inclusive (default: alignment length)
    #[argh(option)]
    pub end: Option<usize>,

    /// rank: number of top positions to report (default: 25)
    #[argh(option, default = "25")]
    pub top: usize,

    /// rank: order by the SDI of the second alignment instead of the first
    #[argh(switch)]
    pub by_second: bool,

    /// rank: save the ranking to this file (.csv, .tsv, .json) instead of printing it
    #[argh(option)]
    pub save: Option<String>,

    /// logo: metric for stack heights: info, sdi (default: sdi)
    #[argh(option, default = "String::from(\"sdi\")")]
    pub metric: String,

    /// output file for logo, scores and consensus tables
    #[argh(option)]
    pub output: Option<String>,

    /// output format: tsv, csv, json (default: from file extension, else tsv)
    #[argh(option)]
    pub format: Option<String>,

    /// credible interval coverage for consensus probabilities (default: 0.95)
    #[argh(option, default = "0.95")]
    pub ci: f64,

    /// number of posterior draws per column (default: 100000)
    #[argh(option, default = "100000")]
    pub samples: usize,

    /// random seed for posterior sampling (default: random)
    #[argh(option)]
    pub seed: Option<u64>,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// keep only sequences whose id matches this regex
    #[argh(option)]
    pub include_seqs: Option<String>,

    /// drop sequences whose id matches this regex
    #[argh(option)]
    pub exclude_seqs: Option<String>,

    /// consensus: print only the consensus sequence, without intervals
    #[argh(switch)]
    pub symbols_only: bool,

    /// show a progress bar during posterior sampling
    #[argh(switch)]
    pub progress: bool,

    /// validate inputs without computation (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}

/// Subcommand selected by the positional argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Rank,
    Logo,
    Scores,
    Consensus,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rank" => Ok(Command::Rank),
            "logo" => Ok(Command::Logo),
            "scores" => Ok(Command::Scores),
            "consensus" => Ok(Command::Consensus),
            _ => Err(format!(
                "Invalid command: {}. Use: rank, logo, scores, consensus",
                s
            )),
        }
    }
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Rank => "rank",
            Command::Logo => "logo",
            Command::Scores => "scores",
            Command::Consensus => "consensus",
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Command::Rank => "rank positions by selection-differentiation index",
            Command::Logo => "sequence logo height matrix",
            Command::Scores => "per-position information content, divergence and SDI",
            Command::Consensus => "consensus sequence with credible intervals",
        }
    }

    /// Whether the command compares two alignments
    pub fn needs_pair(&self) -> bool {
        !matches!(self, Command::Consensus)
    }

    /// Default output path when none is given
    pub fn default_output(&self) -> Option<&'static str> {
        match self {
            Command::Logo => Some("logo.tsv"),
            Command::Scores => Some("scores.tsv"),
            Command::Rank | Command::Consensus => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rank_arguments() {
        let args = Args::from_args(
            &["protcmp"],
            &["rank", "--aln1", "a.aln", "--aln2", "b.aln", "--start", "75", "--end", "125", "--by-second"],
        )
        .unwrap();

        assert_eq!(args.command.as_deref(), Some("rank"));
        assert_eq!(args.aln1.as_deref(), Some("a.aln"));
        assert_eq!(args.start, Some(75));
        assert_eq!(args.end, Some(125));
        assert!(args.by_second);
        assert_eq!(args.top, 25);
        assert_eq!(args.ci, 0.95);
        assert_eq!(args.samples, 100_000);
    }

    #[test]
    fn test_command_from_str() {
        assert_eq!(Command::from_str("Logo").unwrap(), Command::Logo);
        assert!(Command::from_str("plot").is_err());
        assert!(!Command::Consensus.needs_pair());
        assert!(Command::Rank.needs_pair());
        assert_eq!(Command::Logo.default_output(), Some("logo.tsv"));
    }
}
