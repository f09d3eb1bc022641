//! Error types for selected-calendar ID parsing and validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the query field the composite id arrives in.
pub(crate) const ID_FIELD: &str = "id";

/// A single reason a composite id or one of its segments was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum KeyError {
    /// The owner id prefix is not a number.
    #[error("userId is not a number")]
    InvalidOwnerId,

    /// No integration segment could be isolated.
    #[error("Missing integration")]
    MissingIntegration,

    /// No external id segment could be isolated.
    #[error("Missing externalId")]
    MissingExternalId,

    /// An integration key built by hand does not round-trip through the
    /// composite form. Never produced by the parser.
    #[error("malformed integration '{value}': expected '<vendor>_calendar'")]
    MalformedIntegration { value: String },
}

impl KeyError {
    /// Stable machine-readable name for this error.
    pub fn code(&self) -> &'static str {
        match self {
            KeyError::InvalidOwnerId => "invalid_owner_id",
            KeyError::MissingIntegration => "missing_integration",
            KeyError::MissingExternalId => "missing_external_id",
            KeyError::MalformedIntegration { .. } => "malformed_integration",
        }
    }

    /// Returns true if this error concerns the owner id segment.
    pub fn is_owner_error(&self) -> bool {
        matches!(self, KeyError::InvalidOwnerId)
    }

    /// Returns true if a segment could not be isolated at all.
    pub fn is_missing_segment(&self) -> bool {
        matches!(
            self,
            KeyError::MissingIntegration | KeyError::MissingExternalId
        )
    }
}

/// Ordered, non-empty set of failures for one composite id.
///
/// Order follows validation precedence: owner id, integration, external id.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid selected calendar id: {}", join_messages(.errors))]
pub struct ValidationErrors {
    errors: Vec<KeyError>,
}

fn join_messages(errors: &[KeyError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    /// Wraps a list of failures. Callers guarantee `errors` is non-empty.
    pub(crate) fn new(errors: Vec<KeyError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self { errors }
    }

    pub fn errors(&self) -> &[KeyError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always false for errors produced by this crate.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn contains(&self, error: &KeyError) -> bool {
        self.errors.contains(error)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeyError> {
        self.errors.iter()
    }

    /// Converts every failure into an issue against the `id` field.
    pub fn issues(&self) -> Vec<ValidationIssue> {
        self.errors.iter().map(ValidationIssue::from).collect()
    }

    pub fn into_inner(self) -> Vec<KeyError> {
        self.errors
    }
}

impl From<KeyError> for ValidationErrors {
    fn from(err: KeyError) -> Self {
        Self::new(vec![err])
    }
}

impl IntoIterator for ValidationErrors {
    type Item = KeyError;
    type IntoIter = std::vec::IntoIter<KeyError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a KeyError;
    type IntoIter = std::slice::Iter<'a, KeyError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Category of a reported issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// Rule-specific failure raised by the composite id parser.
    Custom,
    /// The input had the wrong JSON shape.
    InvalidType,
}

/// Issue in the shape a schema-validation layer reports to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub code: IssueCode,
    pub message: String,
    pub path: Vec<String>,
}

impl ValidationIssue {
    /// A parser issue against the `id` field.
    pub fn custom(message: impl Into<String>) -> Self {
        Self {
            code: IssueCode::Custom,
            message: message.into(),
            path: vec![ID_FIELD.to_string()],
        }
    }

    /// A shape issue at the given path.
    pub fn invalid_type(message: impl Into<String>, path: Vec<String>) -> Self {
        Self {
            code: IssueCode::InvalidType,
            message: message.into(),
            path,
        }
    }
}

impl From<&KeyError> for ValidationIssue {
    fn from(err: &KeyError) -> Self {
        Self::custom(err.to_string())
    }
}

impl From<KeyError> for ValidationIssue {
    fn from(err: KeyError) -> Self {
        Self::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_issue_texts() {
        assert_eq!(KeyError::InvalidOwnerId.to_string(), "userId is not a number");
        assert_eq!(KeyError::MissingIntegration.to_string(), "Missing integration");
        assert_eq!(KeyError::MissingExternalId.to_string(), "Missing externalId");
    }

    #[test]
    fn test_validation_errors_display_joins_messages() {
        let errors = ValidationErrors::new(vec![
            KeyError::MissingIntegration,
            KeyError::MissingExternalId,
        ]);
        assert_eq!(
            errors.to_string(),
            "invalid selected calendar id: Missing integration; Missing externalId"
        );
    }

    #[test]
    fn test_issue_json_shape() {
        let issue = ValidationIssue::from(KeyError::InvalidOwnerId);
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "custom",
                "message": "userId is not a number",
                "path": ["id"],
            })
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(KeyError::InvalidOwnerId.is_owner_error());
        assert!(!KeyError::InvalidOwnerId.is_missing_segment());
        assert!(KeyError::MissingExternalId.is_missing_segment());
        assert_eq!(KeyError::MissingIntegration.code(), "missing_integration");
    }
}
