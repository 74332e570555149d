//! Run configuration, loadable from JSON and overridable from the command line.
//!
//! ```rust
//! use rnacon_core::config::{FilterConfig, RunConfig};
//!
//! let config = RunConfig {
//!     iterations: 10,
//!     filter: FilterConfig {
//!         excluded: Some(vec!["UUU".to_string()]),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter::{narrow_codon_map, CodonMap};
use crate::input::normalize_codon;
use crate::InputError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Allow-list and deny-list of codon literals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub supported: Option<Vec<String>>,
    pub excluded: Option<Vec<String>>,
}

impl FilterConfig {
    pub fn is_unrestricted(&self) -> bool {
        self.supported.is_none() && self.excluded.is_none()
    }

    /// Uppercase RNA form of both lists; rejects anything that is not a codon.
    pub fn normalized(&self) -> Result<FilterConfig, InputError> {
        let normalize_all = |list: &Option<Vec<String>>| -> Result<Option<Vec<String>>, InputError> {
            list.as_ref()
                .map(|codons| {
                    codons
                        .iter()
                        .map(|c| normalize_codon(c))
                        .collect::<Result<Vec<_>, _>>()
                })
                .transpose()
        };
        Ok(FilterConfig {
            supported: normalize_all(&self.supported)?,
            excluded: normalize_all(&self.excluded)?,
        })
    }

    /// The codon table usable under this filter
    pub fn narrow(&self) -> CodonMap {
        if self.is_unrestricted() {
            return CodonMap::base();
        }
        let to_set = |list: &Option<Vec<String>>| -> Option<HashSet<String>> {
            list.as_ref().map(|codons| codons.iter().cloned().collect())
        };
        let allow = to_set(&self.supported);
        let deny = to_set(&self.excluded);
        narrow_codon_map(allow.as_ref(), deny.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Randomized trials per input; the lowest run length wins
    pub iterations: usize,
    /// Times the input chain is repeated before building
    pub duplicate: usize,
    pub filter: FilterConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterations: 1,
            duplicate: 1,
            filter: FilterConfig::default(),
        }
    }
}

impl RunConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Check counts and return a copy with normalized codon lists.
    pub fn validate(&self) -> Result<RunConfig, InputError> {
        if self.iterations == 0 {
            return Err(InputError::ZeroIterations);
        }
        if self.duplicate == 0 {
            return Err(InputError::ZeroDuplicate);
        }
        Ok(RunConfig {
            iterations: self.iterations,
            duplicate: self.duplicate,
            filter: self.filter.normalized()?,
        })
    }
}
