// alphabet.rs - Shared amino acid alphabet

/// Number of residue categories every distribution is defined over
pub const AA_COUNT: usize = 20;

/// Gap symbol used in aligned sequences
pub const GAP: u8 = b'-';

/// Fixed residue alphabet with an O(1) byte-to-category lookup
#[derive(Debug)]
pub struct ResidueAlphabet {
    symbols: [u8; AA_COUNT],
    index: [u8; 256],
}

const NOT_A_RESIDUE: u8 = u8::MAX;

impl ResidueAlphabet {
    const fn new(symbols: &[u8; AA_COUNT]) -> Self {
        let mut index = [NOT_A_RESIDUE; 256];
        let mut i = 0;
        while i < AA_COUNT {
            index[symbols[i] as usize] = i as u8;
            index[symbols[i].to_ascii_lowercase() as usize] = i as u8;
            i += 1;
        }
        Self {
            symbols: *symbols,
            index,
        }
    }

    /// Residue symbols in category order
    pub fn symbols(&self) -> &[u8; AA_COUNT] {
        &self.symbols
    }

    /// Category index of a residue byte, `None` for gaps and unknown symbols
    pub fn index_of(&self, residue: u8) -> Option<usize> {
        match self.index[residue as usize] {
            NOT_A_RESIDUE => None,
            i => Some(i as usize),
        }
    }

    /// Residue letter for a category index
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index] as char
    }

    pub fn contains(&self, residue: u8) -> bool {
        self.index_of(residue).is_some()
    }

    pub fn len(&self) -> usize {
        AA_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Maximum entropy of a distribution over this alphabet, in bits
    pub fn max_entropy_bits(&self) -> f64 {
        (AA_COUNT as f64).log2()
    }
}

/// The 20 standard amino acids in alphabetical one-letter order
pub static AMINO_ACIDS: ResidueAlphabet = ResidueAlphabet::new(b"ACDEFGHIKLMNPQRSTVWY");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_lookup() {
        assert_eq!(AMINO_ACIDS.index_of(b'A'), Some(0));
        assert_eq!(AMINO_ACIDS.index_of(b'Y'), Some(19));
        assert_eq!(AMINO_ACIDS.index_of(b'c'), Some(1));
        assert_eq!(AMINO_ACIDS.index_of(GAP), None);
        assert_eq!(AMINO_ACIDS.index_of(b'X'), None);
        assert_eq!(AMINO_ACIDS.index_of(b'B'), None);
    }

    #[test]
    fn test_symbols_round_trip() {
        for (i, &s) in AMINO_ACIDS.symbols().iter().enumerate() {
            assert_eq!(AMINO_ACIDS.index_of(s), Some(i));
            assert_eq!(AMINO_ACIDS.symbol(i), s as char);
        }
        assert_eq!(AMINO_ACIDS.len(), 20);
    }

    #[test]
    fn test_max_entropy() {
        assert!((AMINO_ACIDS.max_entropy_bits() - 4.321928).abs() < 1e-6);
    }
}
