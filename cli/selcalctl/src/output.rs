//! Output formatting for CLI commands.

use colored::Colorize;
use selcal_id::{SelectedCalendarKey, ValidationErrors, ValidationIssue};
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::CliError;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self, CliError> {
        match value {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(CliError::UnknownFormat(other.to_string())),
        }
    }
}

/// Outcome of checking one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyReport {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<SelectedCalendarKey>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<ValidationIssue>,
}

impl KeyReport {
    pub fn from_result(
        input: impl Into<String>,
        result: Result<SelectedCalendarKey, ValidationErrors>,
    ) -> Self {
        match result {
            Ok(key) => Self::accepted(input, key),
            Err(errors) => Self::rejected(input, errors.issues()),
        }
    }

    pub fn accepted(input: impl Into<String>, key: SelectedCalendarKey) -> Self {
        Self {
            input: input.into(),
            valid: true,
            key: Some(key),
            issues: Vec::new(),
        }
    }

    pub fn rejected(input: impl Into<String>, issues: Vec<ValidationIssue>) -> Self {
        Self {
            input: input.into(),
            valid: false,
            key: None,
            issues,
        }
    }
}

#[derive(Tabled)]
struct KeyRow {
    #[tabled(rename = "INPUT")]
    input: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "USER ID")]
    user_id: String,
    #[tabled(rename = "INTEGRATION")]
    integration: String,
    #[tabled(rename = "EXTERNAL ID")]
    external_id: String,
    #[tabled(rename = "ISSUES")]
    issues: String,
}

impl From<&KeyReport> for KeyRow {
    fn from(report: &KeyReport) -> Self {
        let (user_id, integration, external_id) = match &report.key {
            Some(key) => (
                key.owner_id().to_string(),
                key.integration().to_string(),
                key.external_id().to_string(),
            ),
            None => ("-".to_string(), "-".to_string(), "-".to_string()),
        };
        Self {
            input: report.input.clone(),
            status: (if report.valid { "ok" } else { "rejected" }).to_string(),
            user_id,
            integration,
            external_id,
            issues: report
                .issues
                .iter()
                .map(|issue| issue.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Print reports in the specified format.
pub fn print_reports(reports: &[KeyReport], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if reports.is_empty() {
                println!("{}", "No ids checked.".dimmed());
            } else {
                let rows: Vec<KeyRow> = reports.iter().map(KeyRow::from).collect();
                println!("{}", Table::new(rows));
            }
        }
        OutputFormat::Json => {
            println!("{}", format_json(&reports, "[]"));
        }
    }
}

/// Print a single item in the specified format.
pub fn print_single<T: Serialize>(data: &T) {
    println!("{}", format_json(data, "{}"));
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("table").unwrap(), OutputFormat::Table);
        assert!(matches!(
            OutputFormat::parse("yaml"),
            Err(CliError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_report_json_for_accepted_id() {
        let input = "5_google_calendar_primary";
        let report = KeyReport::from_result(input, selcal_id::parse(input));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "input": input,
                "valid": true,
                "key": {
                    "userId": 5,
                    "integration": "google_calendar",
                    "externalId": "primary",
                },
            })
        );
    }

    #[test]
    fn test_report_json_for_rejected_id() {
        let report = KeyReport::from_result("x_foo", selcal_id::parse("x_foo"));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["valid"], false);
        assert!(json.get("key").is_none());
        assert_eq!(json["issues"].as_array().unwrap().len(), 3);
        assert_eq!(json["issues"][0]["message"], "userId is not a number");
    }

    #[test]
    fn test_row_for_rejected_id() {
        let report = KeyReport::from_result("3_foo", selcal_id::parse("3_foo"));
        let row = KeyRow::from(&report);
        assert_eq!(row.status, "rejected");
        assert_eq!(row.user_id, "-");
        assert_eq!(row.issues, "Missing integration; Missing externalId");
    }
}
