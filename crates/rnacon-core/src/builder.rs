//! Randomized construction of RNA sequences from amino acid or biochemical
//! property chains.

use serde::Serialize;

use crate::filter::{CodonMap, PropertyMap};
use crate::optimize::{best_of, Ranked};
use crate::random::{choose, IndexSource, SecureIndexSource};
use crate::scoring::{longest_run, Run};
use crate::MappingError;

/// A built RNA sequence with its homopolymer run score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredSequence {
    pub sequence: String,
    pub run: Run,
}

impl ScoredSequence {
    pub fn new(sequence: impl Into<String>) -> Self {
        let sequence = sequence.into();
        let run = longest_run(&sequence);
        Self { sequence, run }
    }
}

impl Ranked for ScoredSequence {
    fn score(&self) -> i32 {
        self.run.length
    }
}

/// Result of a property build: the amino acids picked for each property and
/// the best sequence found for that chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyChain {
    pub aminos: Vec<&'static str>,
    /// Comma-joined `aminos`
    pub label: String,
    pub scored: ScoredSequence,
}

impl Ranked for PropertyChain {
    fn score(&self) -> i32 {
        self.scored.score()
    }
}

/// Builds sequences by picking one codon per amino acid (and one amino acid
/// per property) from the supplied tables.
pub struct ChainBuilder<R = SecureIndexSource> {
    source: R,
}

impl ChainBuilder<SecureIndexSource> {
    pub fn new() -> Self {
        Self {
            source: SecureIndexSource,
        }
    }
}

impl Default for ChainBuilder<SecureIndexSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: IndexSource> ChainBuilder<R> {
    pub fn with_source(source: R) -> Self {
        Self { source }
    }

    pub fn into_source(self) -> R {
        self.source
    }

    /// One trial: a codon per amino acid, concatenated in input order.
    pub fn build_from_amino<S: AsRef<str>>(
        &mut self,
        aminos: &[S],
        codons: &CodonMap,
    ) -> Result<ScoredSequence, MappingError> {
        let mut sequence = String::with_capacity(aminos.len() * 3);
        for amino in aminos {
            let amino = amino.as_ref();
            let codon = codons
                .codons_for(amino)
                .and_then(|options| choose(&mut self.source, options))
                .ok_or_else(|| MappingError::MissingAmino(amino.to_string()))?;
            sequence.push_str(codon);
        }
        Ok(ScoredSequence::new(sequence))
    }

    pub fn build_best_from_amino<S: AsRef<str>>(
        &mut self,
        aminos: &[S],
        codons: &CodonMap,
        iterations: usize,
    ) -> Result<ScoredSequence, MappingError> {
        best_of(iterations, || self.build_from_amino(aminos, codons))
    }

    /// One trial: an amino acid per property, then the best of `iterations`
    /// codon builds for the resulting chain.
    pub fn build_from_property<S: AsRef<str>>(
        &mut self,
        properties: &[S],
        property_map: &PropertyMap,
        codons: &CodonMap,
        iterations: usize,
    ) -> Result<PropertyChain, MappingError> {
        let mut aminos = Vec::with_capacity(properties.len());
        for property in properties {
            let property = property.as_ref();
            let amino = property_map
                .aminos_for(property)
                .and_then(|options| choose(&mut self.source, options))
                .ok_or_else(|| MappingError::MissingProperty(property.to_string()))?;
            aminos.push(*amino);
        }

        let scored = self.build_best_from_amino(&aminos, codons, iterations)?;
        Ok(PropertyChain {
            label: aminos.join(","),
            aminos,
            scored,
        })
    }

    pub fn build_best_from_property<S: AsRef<str>>(
        &mut self,
        properties: &[S],
        property_map: &PropertyMap,
        codons: &CodonMap,
        iterations: usize,
    ) -> Result<PropertyChain, MappingError> {
        best_of(iterations, || {
            self.build_from_property(properties, property_map, codons, iterations)
        })
    }
}
