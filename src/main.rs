mod cli;
mod config;
mod convert_cmd;
mod logging;
mod shift_cmd;
mod show;

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
        Command::Show(args) => show::run(args),
        Command::Convert(args) => convert_cmd::run(args),
        Command::Shift(args) => shift_cmd::run(args),
    }
}
