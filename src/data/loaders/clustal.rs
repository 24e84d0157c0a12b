// clustal.rs - Clustal alignment loader

use crate::core::alphabet::{AMINO_ACIDS, GAP};
use crate::data::alignment::{Alignment, SequenceRecord};
use bio::alphabets::Alphabet;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Header keywords written by Clustal-compatible aligners
const HEADER_KEYWORDS: [&str; 3] = ["CLUSTAL", "MUSCLE", "PROBCONS"];

/// Read a Clustal-format multiple sequence alignment from disk
pub fn read_alignment(file_path: &Path) -> Result<Alignment, String> {
    let file = File::open(file_path).map_err(|e| {
        format!(
            "Failed to open alignment file '{}': {}",
            file_path.display(),
            e
        )
    })?;

    let alignment = parse_clustal(BufReader::new(file))
        .map_err(|e| format!("Invalid alignment file '{}': {}", file_path.display(), e))?;

    println!(
        "✅ Alignment loaded: {} sequences × {} columns ({})",
        alignment.sequence_count(),
        alignment.length(),
        file_path.display()
    );
    Ok(alignment)
}

/// Parse Clustal text. Blocks may be interleaved; sequence order is first appearance.
pub fn parse_clustal<R: BufRead>(reader: R) -> Result<Alignment, String> {
    let mut lines = reader.lines();

    // Header
    let header = loop {
        match lines.next() {
            Some(line) => {
                let line = line.map_err(|e| format!("Failed to read header: {}", e))?;
                if !line.trim().is_empty() {
                    break line;
                }
            }
            None => return Err("Empty alignment file".to_string()),
        }
    };

    if !HEADER_KEYWORDS.iter().any(|k| header.starts_with(k)) {
        return Err(format!(
            "Missing Clustal header, found '{}'",
            header.chars().take(40).collect::<String>()
        ));
    }

    let mut order: Vec<String> = Vec::new();
    let mut residues: HashMap<String, Vec<u8>> = HashMap::new();

    for (line_num, line) in lines.enumerate() {
        let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 2, e))?;

        // Blank separators and conservation lines (which start with whitespace)
        if line.trim().is_empty() || line.starts_with(char::is_whitespace) {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.len() {
            2 => {}
            3 if parts[2].parse::<usize>().is_ok() => {}
            _ => {
                return Err(format!(
                    "Line {} is not an 'id residues [count]' line: '{}'",
                    line_num + 2,
                    line
                ))
            }
        }

        let id = parts[0];
        if !residues.contains_key(id) {
            order.push(id.to_string());
        }
        residues
            .entry(id.to_string())
            .or_default()
            .extend(parts[1].bytes());
    }

    if order.is_empty() {
        return Err("Alignment contains no sequences".to_string());
    }

    let records: Vec<SequenceRecord> = order
        .into_iter()
        .map(|id| {
            let seq = residues.remove(&id).unwrap_or_default();
            SequenceRecord::new(id, seq)
        })
        .collect();

    report_nonstandard_residues(&records);
    Alignment::new(records)
}

/// Warn about residues outside the 20 amino acids and gap. They are kept and
/// count toward no category.
fn report_nonstandard_residues(records: &[SequenceRecord]) {
    let alphabet = Alphabet::new(AMINO_ACIDS.symbols().iter().chain(std::iter::once(&GAP)));

    let flagged: Vec<&str> = records
        .iter()
        .filter(|r| !alphabet.is_word(&r.residues))
        .map(|r| r.id.as_str())
        .collect();

    if !flagged.is_empty() {
        println!(
            "⚠️  {} sequence(s) contain non-standard residues, ignored in statistics (first: {})",
            flagged.len(),
            flagged[0]
        );
    }
}
