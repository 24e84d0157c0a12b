// main.rs - CLI entry point

use protcmp::cli::{resolve_range, resolve_top, Command, Config};
use protcmp::output::{format_rank_table, write_logo_matrix, write_table};
use protcmp::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::time::Instant;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    println!("🚀 protcmp v{}", env!("CARGO_PKG_VERSION"));

    // Validate all arguments
    let validation = validate_args(&args)?;
    println!(
        "🧪 Command: {} ({})",
        validation.command.name(),
        validation.command.description()
    );

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("🧵 Threads: {}", n);
    } else {
        let num_threads = rayon::current_num_threads();
        println!("🧵 Threads: {} (auto-detected)", num_threads);
    }

    let total_start = Instant::now();

    // Load alignments; validate_args guarantees the paths needed by the command
    let first_path = args.aln1.as_deref().unwrap_or_default();
    let first = load_alignment(first_path, &validation)?;
    let second = match (validation.command.needs_pair(), args.aln2.as_deref()) {
        (true, Some(path)) => Some(load_alignment(path, &validation)?),
        _ => None,
    };

    if let Some(second) = &second {
        validate_alignment_lengths(&first, second).map_err(|e| e.to_string())?;
    }

    // Restrict to the requested column range
    let (start, end) = resolve_range(args.start, args.end, first.length());
    println!(
        "📏 Range: columns {}-{} of {}",
        start,
        end,
        first.length()
    );
    let first = first.slice(start, end)?;
    let second = second.map(|aln| aln.slice(start, end)).transpose()?;

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    println!("🎲 Seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let estimator = ConsensusEstimator::new(validation.consensus.clone());

    match (validation.command, second) {
        (Command::Rank, Some(second)) => {
            println!("📊 Ranking by {}", validation.rank_key.description());
            let sdi = selection_differentiation_index(&first, &second).map_err(|e| e.to_string())?;
            let consensus_first = estimator
                .estimate(&first, &mut rng)
                .map_err(|e| e.to_string())?;
            let consensus_second = estimator
                .estimate(&second, &mut rng)
                .map_err(|e| e.to_string())?;

            let rows = build_rank_rows(start, &sdi, &consensus_first, &consensus_second)?;
            let top = resolve_top(args.top, rows.len());
            let ranked = rank_rows(rows, validation.rank_key, top);

            match &args.save {
                Some(path) => write_table(path, validation.format, &ranked, &command_line)?,
                None => print!("{}", format_rank_table(&ranked)),
            }
        }
        (Command::Logo, Some(second)) => {
            println!("📊 Logo metric: {}", validation.metric.description());
            let logo = logo_matrix(&first, &second, validation.metric, start)
                .map_err(|e| e.to_string())?;
            let path = output_path(&args, validation.command);
            write_logo_matrix(&path, validation.format, &logo, &command_line)?;
        }
        (Command::Scores, Some(second)) => {
            let scores = compare_alignments(&first, &second).map_err(|e| e.to_string())?;
            let path = output_path(&args, validation.command);
            write_table(&path, validation.format, &score_rows(start, &scores), &command_line)?;
        }
        (Command::Consensus, _) => {
            if args.symbols_only {
                let sequence = estimator
                    .consensus_sequence(&first)
                    .map_err(|e| e.to_string())?;
                println!("{}", sequence);
            } else {
                let records = estimator
                    .estimate(&first, &mut rng)
                    .map_err(|e| e.to_string())?;
                let rows = consensus_rows(start, &records);
                match &args.output {
                    Some(path) => write_table(path, validation.format, &rows, &command_line)?,
                    None => {
                        for row in &rows {
                            println!(
                                "{}\t{}\t{:.3}\t{:.3}\t{:.3}",
                                row.position, row.symbol, row.probability, row.lower, row.upper
                            );
                        }
                    }
                }
            }
        }
        (command, None) => {
            return Err(format!(
                "--aln2 is required for the '{}' command",
                command.name()
            ))
        }
    }

    println!(
        "⏱️  Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn load_alignment(path: &str, validation: &ValidationResult) -> Result<Alignment, String> {
    let alignment = read_alignment(Path::new(path))?;
    Ok(alignment.filter_sequences(
        validation.include_regex.as_ref(),
        validation.exclude_regex.as_ref(),
    ))
}

fn output_path(args: &Args, command: Command) -> String {
    args.output
        .clone()
        .or_else(|| command.default_output().map(String::from))
        .unwrap_or_else(|| format!("{}.tsv", command.name()))
}
