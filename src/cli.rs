mod dump;
mod report;
mod sources;

use clap::{Parser, Subcommand};

pub use self::{
    dump::{DumpArgs, dump},
    report::{ReportArgs, report},
    sources::SourceArgs,
};

#[derive(Parser)]
#[command(author, version, about)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load both sources, merge them, and render the aggregated report.
    Report(Box<ReportArgs>),

    /// Print the merged hourly records without aggregating them.
    Dump(Box<DumpArgs>),
}
