// alignment.rs - Multiple sequence alignment data structures

use regex::Regex;

/// One aligned sequence
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceRecord {
    pub id: String,
    pub residues: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, residues: impl AsRef<[u8]>) -> Self {
        Self {
            id: id.into(),
            residues: residues.as_ref().to_ascii_uppercase(),
        }
    }
}

/// Ordered set of equal-length aligned sequences.
///
/// Immutable once built: slicing and filtering return new alignments.
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    records: Vec<SequenceRecord>,
    length: usize,
}

impl Default for Alignment {
    fn default() -> Self {
        Self::empty()
    }
}

impl Alignment {
    /// Create an alignment with no sequences
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            length: 0,
        }
    }

    /// Build an alignment, checking that every sequence has the same length
    pub fn new(records: Vec<SequenceRecord>) -> Result<Self, String> {
        let length = records.first().map(|r| r.residues.len()).unwrap_or(0);

        if let Some(bad) = records.iter().find(|r| r.residues.len() != length) {
            return Err(format!(
                "Sequence '{}' has length {}, expected {}",
                bad.id,
                bad.residues.len(),
                length
            ));
        }

        Ok(Self { records, length })
    }

    /// Build an alignment from bare sequences, naming them seq0, seq1, ...
    pub fn from_sequences<S: AsRef<[u8]>>(sequences: &[S]) -> Result<Self, String> {
        let records = sequences
            .iter()
            .enumerate()
            .map(|(i, s)| SequenceRecord::new(format!("seq{}", i), s))
            .collect();
        Self::new(records)
    }

    pub fn records(&self) -> &[SequenceRecord] {
        &self.records
    }

    /// Number of sequences
    pub fn sequence_count(&self) -> usize {
        self.records.len()
    }

    /// Number of columns shared by all sequences
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Residues of one column, top to bottom
    pub fn column(&self, position: usize) -> impl Iterator<Item = u8> + '_ {
        self.records.iter().map(move |r| r.residues[position])
    }

    /// Restrict to the inclusive 1-based column range `start..=end`
    pub fn slice(&self, start: usize, end: usize) -> Result<Self, String> {
        if start == 0 {
            return Err("Slice start must be at least 1".to_string());
        }
        if start > end {
            return Err(format!("Slice start {} is after end {}", start, end));
        }
        if end > self.length {
            return Err(format!(
                "Slice end {} exceeds alignment length {}",
                end, self.length
            ));
        }

        let records = self
            .records
            .iter()
            .map(|r| SequenceRecord {
                id: r.id.clone(),
                residues: r.residues[start - 1..end].to_vec(),
            })
            .collect();

        Ok(Self {
            records,
            length: end - start + 1,
        })
    }

    /// Keep sequences whose id matches `include` and does not match `exclude`
    pub fn filter_sequences(&self, include: Option<&Regex>, exclude: Option<&Regex>) -> Self {
        let records: Vec<SequenceRecord> = self
            .records
            .iter()
            .filter(|r| {
                // Include regex filter
                if let Some(regex) = include {
                    if !regex.is_match(&r.id) {
                        return false;
                    }
                }

                // Exclude regex filter
                if let Some(regex) = exclude {
                    if regex.is_match(&r.id) {
                        return false;
                    }
                }

                true
            })
            .cloned()
            .collect();

        let removed = self.records.len() - records.len();
        if removed > 0 {
            println!(
                "🔍 Sequence filters: kept {} sequences (removed {})",
                records.len(),
                removed
            );
        }

        Self {
            records,
            length: self.length,
        }
    }
}
