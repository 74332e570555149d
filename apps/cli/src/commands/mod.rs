pub mod build;
pub mod decode;
pub mod tables;

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use rnacon_core::config::RunConfig;
use rnacon_core::input::parse_codon_list;
use serde::Serialize;

/// Codon filter options shared by `build` and `tables`
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// JSON run configuration; flags override its fields
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Comma-separated codons the target supports
    #[arg(short, long, value_name = "CODONS")]
    pub supported_codons: Option<String>,

    /// Comma-separated codons to exclude
    #[arg(short, long, value_name = "CODONS")]
    pub excluded_codons: Option<String>,
}

impl FilterArgs {
    /// Config file (if any) with flags applied on top, validated.
    pub fn run_config(
        &self,
        iterations: Option<usize>,
        duplicate: Option<usize>,
    ) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => RunConfig::default(),
        };
        if let Some(codons) = &self.supported_codons {
            config.filter.supported = Some(parse_codon_list(codons)?);
        }
        if let Some(codons) = &self.excluded_codons {
            config.filter.excluded = Some(parse_codon_list(codons)?);
        }
        if let Some(iterations) = iterations {
            config.iterations = iterations;
        }
        if let Some(duplicate) = duplicate {
            config.duplicate = duplicate;
        }
        Ok(config.validate()?)
    }
}

/// Writes records as text lines or JSON lines to stdout or a file.
pub struct Printer {
    out: Box<dyn Write>,
    json: bool,
}

impl Printer {
    pub fn open(path: Option<&Path>, json: bool) -> Result<Self> {
        let out: Box<dyn Write> = match path {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output {}", path.display()))?,
            )),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };
        Ok(Self { out, json })
    }

    pub fn emit<R: Serialize + Display>(&mut self, record: &R) -> Result<()> {
        if self.json {
            serde_json::to_writer(&mut self.out, record)?;
            writeln!(self.out)?;
        } else {
            writeln!(self.out, "{record}")?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Trimmed non-blank lines of an input file, one logical input each
pub fn read_inputs(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Counts per-input failures; a failed input is logged and skipped.
#[derive(Debug, Default)]
pub struct Tally {
    total: usize,
    failed: usize,
}

impl Tally {
    pub fn record<E: Display>(&mut self, input: &str, outcome: std::result::Result<(), E>) {
        self.total += 1;
        if let Err(e) = outcome {
            self.failed += 1;
            log::error!("{input}: {e}");
        }
    }

    pub fn finish(self) -> Result<()> {
        log::info!("{} of {} inputs succeeded", self.total - self.failed, self.total);
        if self.failed > 0 {
            bail!("{} of {} inputs failed", self.failed, self.total);
        }
        Ok(())
    }
}
