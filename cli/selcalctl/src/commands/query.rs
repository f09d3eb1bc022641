//! Query command.
//!
//! Reads `{"id": "..."}` objects (one object or an array) and runs the
//! shape check and the parser on each.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use selcal_id::SelectedCalendarIdQuery;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::CliError;
use crate::output::{print_reports, KeyReport};

use super::{ensure_all_valid, CommandContext};

/// Query command.
#[derive(Debug, Args)]
pub struct QueryCommand {
    /// JSON file to read. Reads stdin when omitted.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

impl QueryCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let contents = match &self.file {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                buf
            }
        };

        let reports = check_queries(&contents)?;
        print_reports(&reports, ctx.format);
        ensure_all_valid(&reports)
    }
}

fn check_queries(contents: &str) -> Result<Vec<KeyReport>, CliError> {
    let value: Value = serde_json::from_str(contents)?;
    let items = match value {
        Value::Array(items) => items,
        other => vec![other],
    };

    let reports: Vec<KeyReport> = items.iter().map(check_query).collect();
    info!(
        total = reports.len(),
        rejected = reports.iter().filter(|r| !r.valid).count(),
        "Query check finished"
    );
    Ok(reports)
}

fn check_query(item: &Value) -> KeyReport {
    let input = match item.get("id") {
        Some(Value::String(id)) => id.clone(),
        _ => item.to_string(),
    };

    match SelectedCalendarIdQuery::validate(item) {
        Ok(key) => KeyReport::accepted(input, key),
        Err(issues) => {
            warn!(input = %input, issues = issues.len(), "Rejected query");
            KeyReport::rejected(input, issues)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selcal_id::IssueCode;

    #[test]
    fn test_single_object() {
        let reports = check_queries(r#"{ "id": "5_google_calendar_primary" }"#).unwrap();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].valid);
        assert_eq!(reports[0].input, "5_google_calendar_primary");
    }

    #[test]
    fn test_array_mixes_shape_and_parser_issues() {
        let reports = check_queries(
            r#"[
                { "id": "5_google_calendar_primary" },
                { "id": 5 },
                { "id": "3_foo" }
            ]"#,
        )
        .unwrap();
        assert_eq!(reports.len(), 3);
        assert!(reports[0].valid);
        assert_eq!(reports[1].input, r#"{"id":5}"#);
        assert_eq!(reports[1].issues[0].code, IssueCode::InvalidType);
        assert_eq!(reports[2].issues.len(), 2);
        assert_eq!(reports[2].issues[0].code, IssueCode::Custom);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            check_queries("{ nope"),
            Err(CliError::InvalidQueryInput(_))
        ));
    }
}
