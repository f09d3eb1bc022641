//! Query-parameter object carrying a composite id.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ID_FIELD;
use crate::{
    KeyParser, OwnerIdValidator, SelectedCalendarKey, ValidationErrors, ValidationIssue,
};

/// `{ "id": "<composite id>" }` as it arrives on a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCalendarIdQuery {
    pub id: String,
}

impl SelectedCalendarIdQuery {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Checks that `value` is an object whose `id` is a string.
    pub fn from_json_value(value: &Value) -> Result<Self, ValidationIssue> {
        let Some(object) = value.as_object() else {
            return Err(ValidationIssue::invalid_type(
                format!("Expected object, received {}", json_type_name(value)),
                Vec::new(),
            ));
        };

        match object.get(ID_FIELD) {
            Some(Value::String(id)) => Ok(Self::new(id.as_str())),
            Some(other) => Err(ValidationIssue::invalid_type(
                format!("Expected string, received {}", json_type_name(other)),
                vec![ID_FIELD.to_string()],
            )),
            None => Err(ValidationIssue::invalid_type(
                "Required",
                vec![ID_FIELD.to_string()],
            )),
        }
    }

    /// Decodes the id with the default owner id rule.
    pub fn parse_key(&self) -> Result<SelectedCalendarKey, ValidationErrors> {
        crate::parse(&self.id)
    }

    pub fn parse_key_with<V: OwnerIdValidator>(
        &self,
        parser: &KeyParser<V>,
    ) -> Result<SelectedCalendarKey, ValidationErrors> {
        parser.parse(&self.id)
    }

    /// Shape check plus decoding, reported as a flat issue list.
    pub fn validate(value: &Value) -> Result<SelectedCalendarKey, Vec<ValidationIssue>> {
        let query = Self::from_json_value(value).map_err(|issue| vec![issue])?;
        query.parse_key().map_err(|errors| errors.issues())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
