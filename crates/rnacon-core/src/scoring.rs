use std::fmt;

use serde::Serialize;

/// Longest homopolymer run in a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Run {
    pub length: i32,
    pub base: Option<char>,
}

impl Run {
    /// No run at all (empty input)
    pub const NONE: Run = Run {
        length: -1,
        base: None,
    };

    pub fn new(length: i32, base: char) -> Self {
        Self {
            length,
            base: Some(base),
        }
    }

    /// The repeated character, or an empty string for [`Run::NONE`]
    pub fn character(&self) -> String {
        self.base.map(String::from).unwrap_or_default()
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, '{}')", self.length, self.character())
    }
}

/// Find the longest run of one repeated character.
///
/// Ties keep the earliest run. The run still open at the end of the input
/// is compared too, so `"UUUU"` scores 4.
pub fn longest_run(sequence: &str) -> Run {
    let mut best = Run::NONE;
    let mut current: Option<(char, i32)> = None;

    for c in sequence.chars() {
        current = match current {
            Some((base, length)) if base == c => Some((base, length + 1)),
            Some((base, length)) => {
                if length > best.length {
                    best = Run::new(length, base);
                }
                Some((c, 1))
            }
            None => Some((c, 1)),
        };
    }

    if let Some((base, length)) = current {
        if length > best.length {
            best = Run::new(length, base);
        }
    }

    best
}
