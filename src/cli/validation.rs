// validation.rs - Input validation utilities

use crate::cli::args::{Args, Command};
use crate::core::ConsensusConfig;
use crate::output::OutputFormat;
use crate::report::{LogoMetric, RankKey};
use regex::Regex;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug)]
pub struct ValidationResult {
    pub command: Command,
    pub metric: LogoMetric,
    pub format: OutputFormat,
    pub rank_key: RankKey,
    pub consensus: ConsensusConfig,
    pub include_regex: Option<Regex>,
    pub exclude_regex: Option<Regex>,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    let command = match &args.command {
        Some(name) => Command::from_str(name)?,
        None => return Err("Missing command. Use: rank, logo, scores, consensus".to_string()),
    };

    // Validate input files
    let aln1 = args
        .aln1
        .as_deref()
        .ok_or_else(|| "--aln1 is required".to_string())?;
    check_input_file(aln1)?;

    if command.needs_pair() {
        let aln2 = args
            .aln2
            .as_deref()
            .ok_or_else(|| format!("--aln2 is required for the '{}' command", command.name()))?;
        check_input_file(aln2)?;
    }

    // Command-specific options
    if args.save.is_some() && command != Command::Rank {
        return Err("--save is only valid for the 'rank' command".to_string());
    }
    if args.symbols_only && command != Command::Consensus {
        return Err("--symbols-only is only valid for the 'consensus' command".to_string());
    }
    if args.top == 0 {
        return Err("--top must be at least 1".to_string());
    }

    let metric = LogoMetric::from_str(&args.metric)?;
    let rank_key = if args.by_second {
        RankKey::Second
    } else {
        RankKey::First
    };

    // Explicit format wins, otherwise guess from the destination path
    let destination = args.save.as_deref().or(args.output.as_deref());
    let format = match &args.format {
        Some(name) => OutputFormat::from_str(name)?,
        None => destination
            .map(|path| OutputFormat::from_path(path, OutputFormat::Tsv))
            .unwrap_or(OutputFormat::Tsv),
    };
    if command == Command::Logo && format == OutputFormat::Json {
        return Err("Logo matrices are written as tsv or csv".to_string());
    }

    // Validate sampling parameters
    if args.ci.is_nan() || args.ci <= 0.0 || args.ci >= 1.0 {
        return Err(format!(
            "Credible interval must be strictly between 0.0 and 1.0, got {}",
            args.ci
        ));
    }
    if args.samples < 2 {
        return Err("--samples must be at least 2".to_string());
    }

    if let Some(threads) = args.threads {
        if threads == 0 {
            return Err("--threads must be at least 1".to_string());
        }
    }

    // Compile regex patterns
    let include_regex = if let Some(pattern) = &args.include_seqs {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid include_seqs regex: {}", e))?)
    } else {
        None
    };

    let exclude_regex = if let Some(pattern) = &args.exclude_seqs {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid exclude_seqs regex: {}", e))?)
    } else {
        None
    };

    Ok(ValidationResult {
        command,
        metric,
        format,
        rank_key,
        consensus: ConsensusConfig {
            samples: args.samples,
            ci: args.ci,
            show_progress: args.progress,
        },
        include_regex,
        exclude_regex,
    })
}

/// Clamp a requested 1-based inclusive range to an alignment of `length` columns.
/// A missing, zero or out-of-range start becomes 1; a missing or out-of-range end
/// becomes `length`; an inverted range falls back to the whole alignment.
pub fn resolve_range(start: Option<usize>, end: Option<usize>, length: usize) -> (usize, usize) {
    let start = match start {
        Some(s) if s >= 1 && s <= length => s,
        _ => 1,
    };
    let end = match end {
        Some(e) if e >= 1 && e <= length => e,
        _ => length,
    };

    if start > end {
        (1, length)
    } else {
        (start, end)
    }
}

/// Number of ranked rows to report. Asking for more rows than there are
/// positions prints a notice and returns every position.
pub fn resolve_top(top: usize, positions: usize) -> usize {
    if top > positions {
        println!(
            "⚠️  Requested top {} exceeds the {} positions in range, reporting all of them",
            top, positions
        );
        positions
    } else {
        top
    }
}

fn check_input_file(file_path: &str) -> Result<(), String> {
    if !Path::new(file_path).is_file() {
        return Err(format!("Alignment file '{}' does not exist", file_path));
    }
    Ok(())
}
