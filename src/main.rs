mod boundaries_cmd;
mod check_cmd;
mod cli;
mod config;
mod convert;
mod logging;
mod schedule_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => check_cmd::run(args),
        Command::Boundaries(args) => boundaries_cmd::run(args),
        Command::Schedule(args) => schedule_cmd::run(args),
    }
}
