use clap::Parser;

use crate::{cli::sources::SourceArgs, core::merge, prelude::*, tables::build_records_table};

#[derive(Parser)]
pub struct DumpArgs {
    #[clap(flatten)]
    sources: SourceArgs,
}

#[instrument(skip_all)]
pub fn dump(args: &DumpArgs) -> Result {
    let (consumption, prices) = args.sources.load()?;
    let records = merge(consumption, prices);
    info!(len = records.len(), "merged");
    println!("{}", build_records_table(&records));
    Ok(())
}
