//! # rnacon
//!
//! Construct RNA sequences for amino acid or biochemical property chains,
//! and decode RNA/DNA sequences back into amino acids.
//!
//! ```bash
//! # Best of 20 random codon choices for a chain
//! rnacon build -a 'Met,Trp,Phe,Leu' -i 20
//!
//! # Property chain, restricted to a codon subset
//! rnacon build -p 'NP,P,B,A,S' -s 'AUG,UGG,GAU,AAA,UAG,UCU' -i 5
//!
//! # One chain per line, JSON output
//! rnacon build -f chains.txt --json -o out.jsonl
//!
//! # Decode to one-letter tags
//! rnacon decode ATGTGGTTT --short-tags
//! ```

mod commands;
mod dto;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "rnacon", version, about = "Optimize RNA sequence for target amino acids by mapping RNA codons")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build RNA sequences for amino acid or property chains
    Build(commands::build::BuildArgs),
    /// Decode RNA/DNA sequences into amino acids
    Decode(commands::decode::DecodeArgs),
    /// Print the codon and property tables left after filtering
    Tables(commands::tables::TablesArgs),
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Build(args) => commands::build::run(args),
        Command::Decode(args) => commands::decode::run(args),
        Command::Tables(args) => commands::tables::run(args),
    }
}
