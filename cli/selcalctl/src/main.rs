//! selcalctl (selcal) - offline tool for selected-calendar ids
//!
//! Decodes composite ids of the form `{owner}_{vendor}_calendar_{external}`
//! and reports every validation failure.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
