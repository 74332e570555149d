//! Flat output records, printed as text or as one JSON object per line.

use std::fmt;

use rnacon_core::{PropertyChain, ScoredSequence};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AminoBuildDto {
    pub input: String,
    pub sequence: String,
    pub run_length: i32,
    pub repeated: String,
}

impl AminoBuildDto {
    pub fn new(input: &str, scored: &ScoredSequence) -> Self {
        Self {
            input: input.to_string(),
            sequence: scored.sequence.clone(),
            run_length: scored.run.length,
            repeated: scored.run.character(),
        }
    }
}

impl fmt::Display for AminoBuildDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t({}, '{}')", self.sequence, self.run_length, self.repeated)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyBuildDto {
    pub input: String,
    pub aminos: String,
    pub sequence: String,
    pub run_length: i32,
    pub repeated: String,
}

impl PropertyBuildDto {
    pub fn new(input: &str, chain: &PropertyChain) -> Self {
        Self {
            input: input.to_string(),
            aminos: chain.label.clone(),
            sequence: chain.scored.sequence.clone(),
            run_length: chain.scored.run.length,
            repeated: chain.scored.run.character(),
        }
    }
}

impl fmt::Display for PropertyBuildDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t({}, '{}')",
            self.aminos, self.sequence, self.run_length, self.repeated
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DecodeDto {
    pub input: String,
    pub decoded: String,
}

impl fmt::Display for DecodeDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decoded)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TableRowDto {
    pub key: &'static str,
    pub values: Vec<&'static str>,
}

impl fmt::Display for TableRowDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.key, self.values.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amino_dto_text_and_json() {
        let dto = AminoBuildDto::new("Met,Trp,Phe", &ScoredSequence::new("AUGUGGUUU"));
        assert_eq!(dto.to_string(), "AUGUGGUUU\t(3, 'U')");
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["runLength"], 3);
        assert_eq!(json["repeated"], "U");
    }

    #[test]
    fn test_table_row_text() {
        let row = TableRowDto {
            key: "Phe",
            values: vec!["UUU", "UUC"],
        };
        assert_eq!(row.to_string(), "Phe\tUUU,UUC");
    }
}
