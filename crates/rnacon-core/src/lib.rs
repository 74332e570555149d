//! Codon-level RNA construction: build an RNA sequence for a chain of amino
//! acids (or biochemical properties) and decode RNA/DNA back into amino acids.

pub mod builder;
pub mod config;
pub mod decode;
pub mod filter;
pub mod input;
pub mod optimize;
pub mod random;
pub mod scoring;
pub mod tables;

pub use builder::*;
pub use filter::*;
pub use scoring::*;

use thiserror::Error;

/// A requested symbol, property or codon has no entry in the table in use.
///
/// Always aborts the build or decode of the current input; no partial
/// result is ever produced alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("Amino acid cannot be built from supported codons: {0}")]
    MissingAmino(String),
    #[error("Biochemical property cannot be built from supported codons: {0}")]
    MissingProperty(String),
    #[error("Unrecognized codon: {0}")]
    UnknownCodon(String),
    #[error("No short tag for amino acid: {0}")]
    MissingShortTag(String),
    #[error("Truncated codon at position {position}: {fragment}")]
    TruncatedCodon { position: usize, fragment: String },
}

/// Malformed caller input, rejected before any table lookup happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unknown biochemical property label: {0}")]
    UnknownPropertyLabel(String),
    #[error("Invalid codon literal: {0}")]
    InvalidCodon(String),
    #[error("Iteration count must be at least 1")]
    ZeroIterations,
    #[error("Duplicate count must be at least 1")]
    ZeroDuplicate,
    #[error("Duplicating {len} token(s) {times} times exceeds the chain length limit")]
    DuplicateTooLarge { len: usize, times: usize },
}
