// mod.rs - Output writers module

use crate::core::alphabet::AMINO_ACIDS;
use crate::report::{LogoMatrix, RankRow};
use serde::Serialize;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// Tabular output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tsv,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(OutputFormat::Tsv),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unsupported output format: {}. Use: tsv, csv, json", s)),
        }
    }
}

impl OutputFormat {
    /// Guess the format from a file extension, falling back to `default`
    pub fn from_path(file_path: &str, default: OutputFormat) -> OutputFormat {
        Path::new(file_path)
            .extension()
            .and_then(|s| s.to_str())
            .and_then(|ext| OutputFormat::from_str(ext).ok())
            .unwrap_or(default)
    }

    fn delimiter(&self) -> u8 {
        match self {
            OutputFormat::Csv => b',',
            _ => b'\t',
        }
    }
}

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent).map_err(|e| {
            format!(
                "Failed to create parent directory '{}': {}",
                parent.display(),
                e
            )
        })?;
    }
    Ok(())
}

fn create_output(file_path: &str) -> Result<BufWriter<File>, String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    Ok(BufWriter::new(file))
}

/// Provenance header written above delimited tables
fn write_header<W: Write>(writer: &mut W, command_line: &str) -> Result<(), String> {
    writeln!(writer, "# Command: {}", command_line).map_err(|e| format!("Write error: {}", e))?;
    writeln!(
        writer,
        "# Generated: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# protcmp v{}", env!("CARGO_PKG_VERSION"))
        .map_err(|e| format!("Write error: {}", e))?;
    Ok(())
}

/// Write serializable rows as TSV, CSV (with a `#` provenance header) or JSON
pub fn write_table<T: Serialize>(
    file_path: &str,
    format: OutputFormat,
    rows: &[T],
    command_line: &str,
) -> Result<(), String> {
    let mut writer = create_output(file_path)?;

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, rows)
                .map_err(|e| format!("Failed to serialize JSON: {}", e))?;
            writeln!(writer).map_err(|e| format!("Write error: {}", e))?;
        }
        OutputFormat::Tsv | OutputFormat::Csv => {
            write_header(&mut writer, command_line)?;
            let mut table = csv::WriterBuilder::new()
                .delimiter(format.delimiter())
                .from_writer(&mut writer);
            for row in rows {
                table
                    .serialize(row)
                    .map_err(|e| format!("Write error: {}", e))?;
            }
            table.flush().map_err(|e| format!("Flush error: {}", e))?;
        }
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ {} rows written to: {}", rows.len(), file_path);
    Ok(())
}

/// Write a logo height matrix: one row per position and alignment, one column per residue
pub fn write_logo_matrix(
    file_path: &str,
    format: OutputFormat,
    logo: &LogoMatrix,
    command_line: &str,
) -> Result<(), String> {
    if format == OutputFormat::Json {
        return Err("Logo matrices are written as tsv or csv".to_string());
    }

    let mut writer = create_output(file_path)?;
    write_header(&mut writer, command_line)?;
    writeln!(writer, "# Metric: {}", logo.metric.description())
        .map_err(|e| format!("Write error: {}", e))?;

    let mut table = csv::WriterBuilder::new()
        .delimiter(format.delimiter())
        .from_writer(&mut writer);

    let mut header = vec!["Position".to_string(), "Alignment".to_string()];
    header.extend(AMINO_ACIDS.symbols().iter().map(|&s| (s as char).to_string()));
    table
        .write_record(&header)
        .map_err(|e| format!("Write error: {}", e))?;

    for (alignment, heights) in [(1, &logo.first), (2, &logo.second)] {
        for (position, row) in logo.positions.iter().zip(heights.iter()) {
            let mut record = vec![position.to_string(), alignment.to_string()];
            record.extend(row.iter().map(|h| format!("{:.6}", h)));
            table
                .write_record(&record)
                .map_err(|e| format!("Write error: {}", e))?;
        }
    }

    table.flush().map_err(|e| format!("Flush error: {}", e))?;
    drop(table);
    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!(
        "✅ Logo matrix ({}) written to: {}",
        logo.metric.description(),
        file_path
    );
    Ok(())
}

/// Render the ranking as a console table with three decimals
pub fn format_rank_table(rows: &[RankRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:^8} | {:^42} | {:^42}\n",
        "", "Alignment 1", "Alignment 2"
    ));
    out.push_str(&format!(
        "{:^8} | {:>7} {:>8} {:>7} {:>7} {:>7} | {:>7} {:>8} {:>7} {:>7} {:>7}\n",
        "Position", "SDI", "Identity", "P", "Lower", "Upper", "SDI", "Identity", "P", "Lower",
        "Upper"
    ));
    for r in rows {
        out.push_str(&format!(
            "{:^8} | {:>7.3} {:>8} {:>7.3} {:>7.3} {:>7.3} | {:>7.3} {:>8} {:>7.3} {:>7.3} {:>7.3}\n",
            r.position,
            r.sdi_first,
            r.identity_first,
            r.p_first,
            r.lower_first,
            r.upper_first,
            r.sdi_second,
            r.identity_second,
            r.p_second,
            r.lower_second,
            r.upper_second
        ));
    }
    out
}
