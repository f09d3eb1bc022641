//! Parse command.
//!
//! Operates purely on local input (offline).

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Args;
use selcal_id::KeyParser;
use tracing::{debug, info, warn};

use crate::error::CliError;
use crate::output::{print_reports, KeyReport};

use super::{ensure_all_valid, CommandContext};

/// Parse command.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Composite ids, e.g. 5_google_calendar_primary.
    #[arg(value_name = "ID")]
    ids: Vec<String>,

    /// Also read ids from stdin, one per line.
    #[arg(long)]
    stdin: bool,
}

impl ParseCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let mut inputs = self.ids;
        if self.stdin {
            inputs.extend(read_lines(io::stdin().lock()).context("failed to read stdin")?);
        }
        if inputs.is_empty() {
            return Err(CliError::NoInput.into());
        }

        let reports = parse_all(&KeyParser::new(), &inputs);
        print_reports(&reports, ctx.format);
        ensure_all_valid(&reports)
    }
}

/// Non-empty, trimmed lines.
fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}

fn parse_all(parser: &KeyParser, inputs: &[String]) -> Vec<KeyReport> {
    let reports: Vec<KeyReport> = inputs
        .iter()
        .map(|input| {
            let result = parser.parse(input);
            match &result {
                Ok(key) => debug!(
                    input = %input,
                    user_id = %key.owner_id(),
                    integration = %key.integration(),
                    "Parsed id"
                ),
                Err(errors) => warn!(input = %input, error = %errors, "Rejected id"),
            }
            KeyReport::from_result(input.as_str(), result)
        })
        .collect();

    let rejected = reports.iter().filter(|r| !r.valid).count();
    info!(total = reports.len(), rejected, "Parse finished");
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_read_lines_skips_blank_lines() {
        let input = "1_google_calendar_a\n\n  2_google_calendar_b  \n";
        let lines = read_lines(input.as_bytes()).unwrap();
        assert_eq!(lines, vec!["1_google_calendar_a", "2_google_calendar_b"]);
    }

    #[rstest]
    #[case("5_google_calendar_primary", true)]
    #[case("7_hubspot_other_calendar_c_blabla@group.calendar.google.com", true)]
    #[case("abc_google_calendar_xyz", false)]
    #[case("5_google_calendar_", false)]
    #[case("3_foo", false)]
    fn test_parse_all_marks_validity(#[case] input: &str, #[case] valid: bool) {
        let reports = parse_all(&KeyParser::new(), &[input.to_string()]);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].valid, valid);
        assert_eq!(reports[0].input, input);
    }
}
