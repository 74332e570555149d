//! Constant genetic tables: codons per amino acid, amino acids per
//! biochemical property, and compact short tags.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Amino acid symbol to its synonymous RNA codons, in table order.
pub const AMINO_CODONS: &[(&str, &[&str])] = &[
    ("Phe", &["UUU", "UUC"]),
    ("Leu", &["UUA", "UUG", "CUU", "CUC", "CUA", "CUG"]),
    ("Ile", &["AUU", "AUC", "AUA"]),
    ("Met", &["AUG"]),
    ("Val", &["GUU", "GUC", "GUA", "GUG"]),
    ("Ser", &["UCU", "UCC", "UCA", "UCG", "AGU", "AGC"]),
    ("Pro", &["CCU", "CCC", "CCA", "CCG"]),
    ("Thr", &["ACU", "ACC", "ACA", "ACG"]),
    ("Ala", &["GCU", "GCC", "GCA", "GCG"]),
    ("Tyr", &["UAU", "UAC"]),
    ("Stop_Ochre", &["UAA"]),
    ("Stop_Amber", &["UAG"]),
    ("His", &["CAU", "CAC"]),
    ("Gln", &["CAA", "CAG"]),
    ("Asn", &["AAU", "AAC"]),
    ("Lys", &["AAA", "AAG"]),
    ("Asp", &["GAU", "GAC"]),
    ("Glu", &["GAA", "GAG"]),
    ("Cys", &["UGU", "UGC"]),
    ("Stop_Opal", &["UGA"]),
    ("Trp", &["UGG"]),
    ("Arg", &["CGU", "CGC", "CGA", "CGG", "AGA", "AGG"]),
    ("Gly", &["GGU", "GGC", "GGA", "GGG"]),
];

/// Biochemical property to the amino acids exhibiting it.
pub const PROPERTY_AMINOS: &[(&str, &[&str])] = &[
    (
        "Non-polar",
        &["Phe", "Leu", "Ile", "Met", "Val", "Pro", "Ala", "Trp", "Gly"],
    ),
    ("Polar", &["Ser", "Thr", "Tyr", "Gln", "Asn", "Cys"]),
    ("Basic", &["His", "Lys", "Arg"]),
    ("Acidic", &["Asp", "Glu"]),
    ("Stop", &["Stop_Ochre", "Stop_Amber", "Stop_Opal"]),
];

/// Command-line short labels for the biochemical properties.
pub const PROPERTY_LABELS: &[(&str, &str)] = &[
    ("NP", "Non-polar"),
    ("P", "Polar"),
    ("B", "Basic"),
    ("A", "Acidic"),
    ("S", "Stop"),
];

/// IUPAC one-letter codes; stop signals get delimited tags.
pub const SHORT_TAGS: &[(&str, &str)] = &[
    ("Phe", "F"),
    ("Leu", "L"),
    ("Ile", "I"),
    ("Met", "M"),
    ("Val", "V"),
    ("Ser", "S"),
    ("Pro", "P"),
    ("Thr", "T"),
    ("Ala", "A"),
    ("Tyr", "Y"),
    ("Stop_Ochre", "*Och*"),
    ("Stop_Amber", "*Amb*"),
    ("His", "H"),
    ("Gln", "Q"),
    ("Asn", "N"),
    ("Lys", "K"),
    ("Asp", "D"),
    ("Glu", "E"),
    ("Cys", "C"),
    ("Stop_Opal", "*Opa*"),
    ("Trp", "W"),
    ("Arg", "R"),
    ("Gly", "G"),
];

static CODON_TO_AMINO: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    AMINO_CODONS
        .iter()
        .flat_map(|(amino, codons)| codons.iter().map(move |codon| (*codon, *amino)))
        .collect()
});

static AMINO_TO_TAG: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SHORT_TAGS.iter().copied().collect());

/// Codons encoding `amino` in the unrestricted table
pub fn codons_for(amino: &str) -> Option<&'static [&'static str]> {
    AMINO_CODONS
        .iter()
        .find(|(name, _)| *name == amino)
        .map(|(_, codons)| *codons)
}

/// Reverse lookup; expects an uppercase RNA codon.
pub fn amino_for_codon(codon: &str) -> Option<&'static str> {
    CODON_TO_AMINO.get(codon).copied()
}

pub fn short_tag(amino: &str) -> Option<&'static str> {
    AMINO_TO_TAG.get(amino).copied()
}

/// Resolve a short label such as `NP` to its property name
pub fn property_for_label(label: &str) -> Option<&'static str> {
    PROPERTY_LABELS
        .iter()
        .find(|(short, _)| *short == label)
        .map(|(_, property)| *property)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codons_are_rna_triplets() {
        for (_, codons) in AMINO_CODONS {
            for codon in codons.iter() {
                assert_eq!(codon.len(), 3);
                assert!(codon.chars().all(|c| matches!(c, 'A' | 'C' | 'G' | 'U')));
            }
        }
    }

    #[test]
    fn test_codons_cover_all_triplets_once() {
        let all: Vec<&str> = AMINO_CODONS
            .iter()
            .flat_map(|(_, codons)| codons.iter().copied())
            .collect();
        let unique: HashSet<&str> = all.iter().copied().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(unique.len(), 64);
    }

    #[test]
    fn test_reverse_lookup() {
        assert_eq!(amino_for_codon("AUG"), Some("Met"));
        assert_eq!(amino_for_codon("UAA"), Some("Stop_Ochre"));
        assert_eq!(amino_for_codon("UUA"), Some("Leu"));
        assert_eq!(amino_for_codon("XXX"), None);
    }

    #[test]
    fn test_every_amino_has_a_tag_and_property() {
        for (amino, _) in AMINO_CODONS {
            assert!(short_tag(amino).is_some(), "no tag for {amino}");
            assert!(
                PROPERTY_AMINOS.iter().any(|(_, aminos)| aminos.contains(amino)),
                "no property for {amino}"
            );
        }
    }

    #[test]
    fn test_property_labels() {
        assert_eq!(property_for_label("NP"), Some("Non-polar"));
        assert_eq!(property_for_label("S"), Some("Stop"));
        assert_eq!(property_for_label("X"), None);
        assert_eq!(codons_for("Met"), Some(&["AUG"][..]));
    }
}
