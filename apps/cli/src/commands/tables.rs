use anyhow::Result;
use clap::Args;
use rnacon_core::narrow_property_map;

use super::{FilterArgs, Printer};
use crate::dto::TableRowDto;

#[derive(Args, Debug)]
pub struct TablesArgs {
    /// Print one JSON object per row
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub filter: FilterArgs,
}

pub fn run(args: TablesArgs) -> Result<()> {
    let config = args.filter.run_config(None, None)?;
    let codons = config.filter.narrow();
    let properties = narrow_property_map(&codons);

    let mut printer = Printer::open(None, args.json)?;
    for (key, values) in codons.iter().chain(properties.iter()) {
        printer.emit(&TableRowDto {
            key,
            values: values.to_vec(),
        })?;
    }

    printer.finish()
}
