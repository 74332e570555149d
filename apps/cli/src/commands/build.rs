use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use rnacon_core::config::RunConfig;
use rnacon_core::input::{duplicate, parse_amino_list, parse_property_list};
use rnacon_core::{narrow_property_map, ChainBuilder, CodonMap, PropertyMap};

use super::{read_inputs, FilterArgs, Printer, Tally};
use crate::dto::{AminoBuildDto, PropertyBuildDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputKind {
    /// Comma-separated amino acid symbols, e.g. Met,Trp,Phe
    Amino,
    /// Comma-separated property labels: NP, P, B, A, S
    Property,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Amino acid chain
    #[arg(short, long, value_name = "AMINOS")]
    pub amino_sequence: Option<String>,

    /// Biochemical property sequence
    #[arg(short, long, value_name = "LABELS")]
    pub property_sequence: Option<String>,

    /// Number of iterations to attempt
    #[arg(short, long)]
    pub iterations: Option<usize>,

    /// Number of times to duplicate the input sequence
    #[arg(short, long)]
    pub duplicate: Option<usize>,

    /// File with one chain per line
    #[arg(short = 'f', long, value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// How to read lines of --input-file
    #[arg(long, value_enum, default_value_t = InputKind::Amino)]
    pub kind: InputKind,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print one JSON object per result
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Tables and builder shared by every input of one invocation
struct Session {
    config: RunConfig,
    codons: CodonMap,
    properties: Option<PropertyMap>,
    builder: ChainBuilder,
}

impl Session {
    fn new(config: RunConfig) -> Self {
        let codons = config.filter.narrow();
        Self {
            config,
            codons,
            properties: None,
            builder: ChainBuilder::new(),
        }
    }

    fn amino(&mut self, printer: &mut Printer, raw: &str) -> Result<()> {
        let aminos = duplicate(&parse_amino_list(raw), self.config.duplicate)?;
        let scored = self
            .builder
            .build_best_from_amino(&aminos, &self.codons, self.config.iterations)?;
        printer.emit(&AminoBuildDto::new(raw, &scored))
    }

    fn property(&mut self, printer: &mut Printer, raw: &str) -> Result<()> {
        let codons = &self.codons;
        let property_map = self
            .properties
            .get_or_insert_with(|| narrow_property_map(codons));
        let properties = duplicate(&parse_property_list(raw)?, self.config.duplicate)?;
        let chain = self.builder.build_best_from_property(
            &properties,
            property_map,
            &self.codons,
            self.config.iterations,
        )?;
        printer.emit(&PropertyBuildDto::new(raw, &chain))
    }
}

/// Amino chain first, then property chain, then each line of the input file.
fn execute(args: &BuildArgs, session: &mut Session, printer: &mut Printer) -> Result<Tally> {
    let mut tally = Tally::default();

    if let Some(raw) = &args.amino_sequence {
        tally.record(raw, session.amino(printer, raw));
    }
    if let Some(raw) = &args.property_sequence {
        tally.record(raw, session.property(printer, raw));
    }
    if let Some(path) = &args.input_file {
        for line in read_inputs(path)? {
            let outcome = match args.kind {
                InputKind::Amino => session.amino(printer, &line),
                InputKind::Property => session.property(printer, &line),
            };
            tally.record(&line, outcome);
        }
    }

    Ok(tally)
}

pub fn run(args: BuildArgs) -> Result<()> {
    let config = args.filter.run_config(args.iterations, args.duplicate)?;
    log::info!(
        "building with {} iteration(s), duplicate x{}",
        config.iterations,
        config.duplicate
    );
    let mut session = Session::new(config);

    let mut printer = Printer::open(args.output.as_deref(), args.json)?;
    let tally = execute(&args, &mut session, &mut printer)?;

    printer.finish()?;
    tally.finish()
}
