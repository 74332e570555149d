//! Reverse path: RNA or DNA sequence back to amino acid symbols.

use crate::tables::{amino_for_codon, short_tag};
use crate::MappingError;

/// Uppercase and map every `T` to `U`
pub fn normalize(sequence: &str) -> String {
    sequence
        .chars()
        .map(|c| match c.to_ascii_uppercase() {
            'T' => 'U',
            other => other,
        })
        .collect()
}

/// Decode consecutive codons from offset 0 into amino acid symbols.
///
/// A trailing fragment shorter than a codon is reported as
/// [`MappingError::TruncatedCodon`].
pub fn decode_aminos(sequence: &str) -> Result<Vec<&'static str>, MappingError> {
    let bases: Vec<char> = normalize(sequence).chars().collect();
    let mut aminos = Vec::with_capacity(bases.len() / 3);

    for (i, chunk) in bases.chunks(3).enumerate() {
        let codon: String = chunk.iter().collect();
        if chunk.len() < 3 {
            return Err(MappingError::TruncatedCodon {
                position: i * 3,
                fragment: codon,
            });
        }
        let amino = amino_for_codon(&codon).ok_or(MappingError::UnknownCodon(codon))?;
        aminos.push(amino);
    }

    Ok(aminos)
}

/// Decode to comma-joined symbols, or to concatenated short tags.
pub fn decode(sequence: &str, short_tags: bool) -> Result<String, MappingError> {
    let aminos = decode_aminos(sequence)?;
    if !short_tags {
        return Ok(aminos.join(","));
    }

    aminos
        .iter()
        .map(|amino| short_tag(amino).ok_or_else(|| MappingError::MissingShortTag(amino.to_string())))
        .collect()
}
