// mod.rs - Alignment file loaders

pub mod clustal;

pub use clustal::{parse_clustal, read_alignment};
