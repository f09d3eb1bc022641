//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{rejected} of {total} id(s) rejected")]
    Rejected { rejected: usize, total: usize },

    #[error("No input. Pass ids as arguments or use --stdin.")]
    NoInput,

    #[error("Unknown output format '{0}' (expected 'table' or 'json')")]
    UnknownFormat(String),

    #[error("Invalid query input: {0}")]
    InvalidQueryInput(#[from] serde_json::Error),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::NoInput => {
                eprintln!(
                    "\n{}",
                    "Hint: `selcal parse 5_google_calendar_primary`".yellow()
                );
            }
            CliError::UnknownFormat(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: set --format, SELCAL_FORMAT, or \"format\" in config.json.".yellow()
                );
            }
            CliError::InvalidQueryInput(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: expected a JSON object like {\"id\": \"...\"} or an array of them."
                        .yellow()
                );
            }
            _ => {}
        }
    }
}
