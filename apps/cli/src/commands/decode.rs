use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rnacon_core::decode::decode;

use super::{read_inputs, Printer, Tally};
use crate::dto::DecodeDto;

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// RNA or DNA sequence, any case
    #[arg(value_name = "SEQUENCE")]
    pub sequence: Option<String>,

    /// Emit one-letter tags instead of comma-joined names
    #[arg(short = 't', long)]
    pub short_tags: bool,

    /// File with one sequence per line
    #[arg(short = 'f', long, value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print one JSON object per result
    #[arg(long)]
    pub json: bool,
}

fn decode_one(printer: &mut Printer, raw: &str, short_tags: bool) -> Result<()> {
    let decoded = decode(raw, short_tags)?;
    printer.emit(&DecodeDto {
        input: raw.to_string(),
        decoded,
    })
}

fn execute(args: &DecodeArgs, printer: &mut Printer) -> Result<Tally> {
    let mut tally = Tally::default();

    if let Some(raw) = &args.sequence {
        let raw = raw.trim();
        tally.record(raw, decode_one(printer, raw, args.short_tags));
    }
    if let Some(path) = &args.input_file {
        for line in read_inputs(path)? {
            tally.record(&line, decode_one(printer, &line, args.short_tags));
        }
    }

    Ok(tally)
}

pub fn run(args: DecodeArgs) -> Result<()> {
    let mut printer = Printer::open(args.output.as_deref(), args.json)?;
    let tally = execute(&args, &mut printer)?;

    printer.finish()?;
    tally.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn decode_args(sequence: Option<&str>, input_file: Option<PathBuf>, short_tags: bool) -> DecodeArgs {
        DecodeArgs {
            sequence: sequence.map(String::from),
            short_tags,
            input_file,
            output: None,
            json: false,
        }
    }

    fn execute_to_string(dir: &TempDir, args: &DecodeArgs, json: bool) -> (String, Tally) {
        let out = dir.path().join("decoded.txt");
        let mut printer = Printer::open(Some(out.as_path()), json).unwrap();
        let tally = execute(args, &mut printer).unwrap();
        printer.finish().unwrap();
        (fs::read_to_string(&out).unwrap(), tally)
    }

    #[test]
    fn test_decode_single_sequence_text() {
        let dir = TempDir::new().unwrap();
        let (out, tally) = execute_to_string(&dir, &decode_args(Some(" ATGTGGTTT "), None, true), false);
        assert_eq!(out, "MWF\n");
        assert_eq!((tally.total, tally.failed), (1, 0));
    }

    #[test]
    fn test_decode_json_shape() {
        let dir = TempDir::new().unwrap();
        let (out, _) = execute_to_string(&dir, &decode_args(Some("AUGUGG"), None, false), true);
        let record: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(
            record,
            serde_json::json!({ "input": "AUGUGG", "decoded": "Met,Trp" })
        );
    }

    #[test]
    fn test_decode_batch_skips_failed_line() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("seqs.txt");
        fs::write(&input, "AUGUGG\nAUGXX\n\nuaa\n").unwrap();
        let (out, tally) = execute_to_string(&dir, &decode_args(None, Some(input), false), false);
        assert_eq!(out, "Met,Trp\nStop_Ochre\n");
        assert_eq!((tally.total, tally.failed), (3, 1));
    }
}
