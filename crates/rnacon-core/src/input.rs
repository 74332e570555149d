//! Tokenizing of comma-separated command-line and file inputs.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::decode::normalize;
use crate::tables::property_for_label;
use crate::InputError;

static RNA_CODON: Lazy<Regex> = Lazy::new(|| Regex::new("^[ACGU]{3}$").expect("codon pattern is valid"));

/// Longest chain `duplicate` will produce
pub const MAX_CHAIN_LEN: usize = 1 << 20;

fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.trim().trim_matches('\'').split(',')
}

/// Amino acid symbols, kept verbatim (no per-token trimming). Empty tokens
/// are kept so they fail lookup instead of silently shortening the chain.
pub fn parse_amino_list(raw: &str) -> Vec<String> {
    tokens(raw).map(String::from).collect()
}

/// Property short labels (`NP`, `P`, `B`, `A`, `S`) to property names
pub fn parse_property_list(raw: &str) -> Result<Vec<&'static str>, InputError> {
    tokens(raw)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| property_for_label(t).ok_or_else(|| InputError::UnknownPropertyLabel(t.to_string())))
        .collect()
}

/// Normalize a codon literal to uppercase RNA and check it is a triplet.
pub fn normalize_codon(literal: &str) -> Result<String, InputError> {
    let codon = normalize(literal.trim());
    if RNA_CODON.is_match(&codon) {
        Ok(codon)
    } else {
        Err(InputError::InvalidCodon(literal.to_string()))
    }
}

pub fn parse_codon_list(raw: &str) -> Result<Vec<String>, InputError> {
    tokens(raw)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(normalize_codon)
        .collect()
}

/// Repeat `items` back to back `times` times.
pub fn duplicate<T: Clone>(items: &[T], times: usize) -> Result<Vec<T>, InputError> {
    let total = items
        .len()
        .checked_mul(times)
        .filter(|total| *total <= MAX_CHAIN_LEN)
        .ok_or(InputError::DuplicateTooLarge {
            len: items.len(),
            times,
        })?;
    Ok(items.iter().cloned().cycle().take(total).collect())
}
