mod cli;
mod core;
mod prelude;
mod quantity;
mod sources;
mod tables;

use clap::Parser;

use crate::{
    cli::{Args, Command, dump, report},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();

    match Args::parse().command {
        Command::Report(args) => report(&args),
        Command::Dump(args) => dump(&args),
    }
}
