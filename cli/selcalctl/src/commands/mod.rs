//! CLI commands.

mod format;
mod parse;
mod query;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::Config;
use crate::error::CliError;
use crate::output::{KeyReport, OutputFormat};

/// selcal - decode and check selected-calendar ids.
#[derive(Debug, Parser)]
#[command(name = "selcal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json). Overrides SELCAL_FORMAT and config.
    #[arg(long, global = true)]
    format: Option<String>,

    /// Log filter (e.g. debug). RUST_LOG takes precedence.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Decode composite ids given as arguments or on stdin.
    Parse(parse::ParseCommand),

    /// Check JSON query objects of the form {"id": "..."}.
    Query(query::QueryCommand),

    /// Build a composite id from its parts.
    Format(format::FormatCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let mut config = Config::load()?;
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(format) = self.format {
            config.format = format;
        }

        crate::logging::init(&config.log_level);
        debug!(?config, "Configuration loaded");

        let ctx = CommandContext {
            format: OutputFormat::parse(&config.format)?,
        };

        match self.command {
            Commands::Parse(cmd) => cmd.run(ctx),
            Commands::Query(cmd) => cmd.run(ctx),
            Commands::Format(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("selcal {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}

/// Fail with [`CliError::Rejected`] when any report is invalid.
fn ensure_all_valid(reports: &[KeyReport]) -> Result<()> {
    let rejected = reports.iter().filter(|report| !report.valid).count();
    if rejected > 0 {
        return Err(CliError::Rejected {
            rejected,
            total: reports.len(),
        }
        .into());
    }
    Ok(())
}
