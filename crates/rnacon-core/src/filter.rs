//! Narrowing of the genetic tables to an allowed set of codons.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::tables::{AMINO_CODONS, PROPERTY_AMINOS};

/// Amino acid symbol to the codons still usable for it.
///
/// Symbols without any usable codon are absent rather than mapped to an
/// empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CodonMap {
    entries: BTreeMap<&'static str, Vec<&'static str>>,
}

/// Biochemical property to the amino acids still buildable for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropertyMap {
    entries: BTreeMap<&'static str, Vec<&'static str>>,
}

/// Narrowing dropped whole rows from a table. Not an error: builds still
/// proceed and only fail if they ask for a dropped row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageWarning {
    Aminos { kept: usize, total: usize },
    Properties { kept: usize, total: usize },
}

impl fmt::Display for CoverageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverageWarning::Aminos { kept, total } => write!(
                f,
                "Not all amino acids are buildable with the specified set of supported codons ({kept}/{total})"
            ),
            CoverageWarning::Properties { kept, total } => write!(
                f,
                "Not all biochem properties are buildable with the specified set of supported codons ({kept}/{total})"
            ),
        }
    }
}

fn push_entry(
    entries: &mut BTreeMap<&'static str, Vec<&'static str>>,
    key: &'static str,
    value: &'static str,
) {
    entries.entry(key).or_default().push(value);
}

impl CodonMap {
    /// The unrestricted table
    pub fn base() -> Self {
        narrow_codon_map(None, None)
    }

    pub fn codons_for(&self, amino: &str) -> Option<&[&'static str]> {
        self.entries.get(amino).map(Vec::as_slice)
    }

    pub fn contains(&self, amino: &str) -> bool {
        self.entries.contains_key(amino)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[&'static str])> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    pub fn coverage_warning(&self) -> Option<CoverageWarning> {
        (self.len() < AMINO_CODONS.len()).then(|| CoverageWarning::Aminos {
            kept: self.len(),
            total: AMINO_CODONS.len(),
        })
    }
}

impl PropertyMap {
    pub fn aminos_for(&self, property: &str) -> Option<&[&'static str]> {
        self.entries.get(property).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[&'static str])> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    pub fn coverage_warning(&self) -> Option<CoverageWarning> {
        (self.len() < PROPERTY_AMINOS.len()).then(|| CoverageWarning::Properties {
            kept: self.len(),
            total: PROPERTY_AMINOS.len(),
        })
    }
}

/// Restrict the base codon table.
///
/// A codon survives if it is in `allow` (or `allow` is absent) and is not
/// in `deny`. Deny wins when a codon appears in both.
pub fn narrow_codon_map(
    allow: Option<&HashSet<String>>,
    deny: Option<&HashSet<String>>,
) -> CodonMap {
    let mut entries = BTreeMap::new();
    for (amino, codons) in AMINO_CODONS {
        for codon in codons.iter() {
            let allowed = allow.map_or(true, |set| set.contains(*codon));
            let denied = deny.map_or(false, |set| set.contains(*codon));
            if allowed && !denied {
                push_entry(&mut entries, *amino, *codon);
            }
        }
    }

    let map = CodonMap { entries };
    if let Some(warning) = map.coverage_warning() {
        log::warn!("{warning}");
    }
    map
}

/// Keep, per property, only the amino acids that still have a codon.
pub fn narrow_property_map(codons: &CodonMap) -> PropertyMap {
    let mut entries = BTreeMap::new();
    for (property, aminos) in PROPERTY_AMINOS {
        for amino in aminos.iter() {
            if codons.contains(amino) {
                push_entry(&mut entries, *property, *amino);
            }
        }
    }

    let map = PropertyMap { entries };
    if let Some(warning) = map.coverage_warning() {
        log::warn!("{warning}");
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(codons: &[&str]) -> HashSet<String> {
        codons.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_unrestricted_is_base_table() {
        let map = narrow_codon_map(None, None);
        assert_eq!(map.len(), AMINO_CODONS.len());
        for (amino, codons) in AMINO_CODONS {
            assert_eq!(map.codons_for(amino), Some(*codons));
        }
        assert_eq!(map.coverage_warning(), None);
    }

    #[test]
    fn test_allow_single_codon() {
        let map = narrow_codon_map(Some(&set(&["AUG"])), None);
        assert_eq!(map.len(), 1);
        assert_eq!(map.codons_for("Met"), Some(&["AUG"][..]));
        assert!(!map.contains("Phe"));
        assert_eq!(
            map.coverage_warning(),
            Some(CoverageWarning::Aminos { kept: 1, total: 23 })
        );
    }

    #[test]
    fn test_deny_removes_codons() {
        let map = narrow_codon_map(None, Some(&set(&["UUU", "AUG"])));
        assert_eq!(map.codons_for("Phe"), Some(&["UUC"][..]));
        assert!(!map.contains("Met"));
        assert_eq!(map.len(), AMINO_CODONS.len() - 1);
    }

    #[test]
    fn test_deny_overrides_allow() {
        let map = narrow_codon_map(Some(&set(&["UUU", "UUC"])), Some(&set(&["UUU"])));
        assert_eq!(map.codons_for("Phe"), Some(&["UUC"][..]));
        assert_eq!(map.len(), 1);

        let map = narrow_codon_map(Some(&set(&["AUG"])), Some(&set(&["AUG"])));
        assert!(map.is_empty());
    }

    #[test]
    fn test_codon_order_preserved() {
        let map = narrow_codon_map(Some(&set(&["CUG", "UUA", "CUU"])), None);
        assert_eq!(map.codons_for("Leu"), Some(&["UUA", "CUU", "CUG"][..]));
    }

    #[test]
    fn test_property_map_unrestricted() {
        let props = narrow_property_map(&CodonMap::base());
        assert_eq!(props.len(), PROPERTY_AMINOS.len());
        assert_eq!(props.aminos_for("Acidic"), Some(&["Asp", "Glu"][..]));
        assert_eq!(props.coverage_warning(), None);
    }

    #[test]
    fn test_property_map_drops_unbuildable() {
        let codons = narrow_codon_map(Some(&set(&["GAU", "AAA", "UGG"])), None);
        let props = narrow_property_map(&codons);
        assert_eq!(props.aminos_for("Acidic"), Some(&["Asp"][..]));
        assert_eq!(props.aminos_for("Basic"), Some(&["Lys"][..]));
        assert_eq!(props.aminos_for("Non-polar"), Some(&["Trp"][..]));
        assert_eq!(props.aminos_for("Polar"), None);
        assert_eq!(props.aminos_for("Stop"), None);
        assert_eq!(
            props.coverage_warning(),
            Some(CoverageWarning::Properties { kept: 3, total: 5 })
        );
    }
}
