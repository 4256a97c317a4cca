mod cli;
mod convert_cmd;
mod logging;
mod year_cmd;

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
        Command::ToLunar(args) => convert_cmd::to_lunar(args),
        Command::ToSolar(args) => convert_cmd::to_solar(args),
        Command::Today => convert_cmd::today(),
        Command::Year(args) => year_cmd::run(args),
    }
}
