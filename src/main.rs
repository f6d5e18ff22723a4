mod cli;
mod config;
mod convert;
mod find_cmd;
mod logging;
mod verify_cmd;

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
        Command::Find(args) => find_cmd::run(args),
        Command::Verify(args) => verify_cmd::run(args),
    }
}
