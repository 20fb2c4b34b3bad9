mod cli;
mod config;
mod convert_cmd;
mod logging;
mod month_cmd;
mod system_clock;
mod today_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref(), cli.data_dir)?;
    match cli.command {
        Command::Today(args) => today_cmd::run(args, &config),
        Command::Convert(args) => convert_cmd::run(args, &config),
        Command::Month(args) => month_cmd::run(args, &config),
    }
}
