//! Composite id parser.

use crate::{
    ExternalId, Integration, KeyError, OwnerId, SelectedCalendarKey, ValidationErrors, DELIMITER,
};

/// Capability that turns the owner id candidate into an integer id.
///
/// Implemented for any `Fn(&str) -> Option<OwnerId>`, so tests and callers
/// with their own id rules can pass a closure.
pub trait OwnerIdValidator {
    fn validate(&self, candidate: &str) -> Option<OwnerId>;
}

impl<F> OwnerIdValidator for F
where
    F: Fn(&str) -> Option<OwnerId>,
{
    fn validate(&self, candidate: &str) -> Option<OwnerId> {
        self(candidate)
    }
}

/// Query-id rule: one or more ASCII digits that fit an owner id.
///
/// Signs, whitespace, decimal points and overflowing values are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitsOnly;

impl OwnerIdValidator for DigitsOnly {
    fn validate(&self, candidate: &str) -> Option<OwnerId> {
        if candidate.is_empty() || !candidate.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        candidate.parse::<u32>().ok().map(OwnerId::new)
    }
}

/// Decodes `{owner}_{vendor}_calendar_{external}` strings.
#[derive(Debug, Clone, Default)]
pub struct KeyParser<V = DigitsOnly> {
    validator: V,
}

impl KeyParser<DigitsOnly> {
    /// Parser using the digits-only owner id rule.
    #[must_use]
    pub fn new() -> Self {
        Self {
            validator: DigitsOnly,
        }
    }
}

impl<V: OwnerIdValidator> KeyParser<V> {
    /// Parser using a caller-supplied owner id rule.
    #[must_use]
    pub fn with_validator(validator: V) -> Self {
        Self { validator }
    }

    /// Parses a composite id, collecting every failed check.
    pub fn parse(&self, raw: &str) -> Result<SelectedCalendarKey, ValidationErrors> {
        // Owner ids never contain '_'; everything after the first one is
        // integration and external id together.
        let (owner_part, rest) = raw.split_once('_').unwrap_or((raw, ""));

        // Without the delimiter neither segment can be isolated.
        let (prefix, remainder) = match rest.split_once(DELIMITER) {
            Some((prefix, remainder)) => (Some(prefix), Some(remainder)),
            None => (None, None),
        };

        let owner_id = self.validator.validate(owner_part);
        let integration = prefix.and_then(Integration::from_prefix);
        let external_id = remainder.and_then(ExternalId::from_remainder);

        match (owner_id, integration, external_id) {
            (Some(owner_id), Some(integration), Some(external_id)) => Ok(
                SelectedCalendarKey::new(owner_id, integration, external_id),
            ),
            (owner_id, integration, external_id) => {
                let mut errors = Vec::with_capacity(3);
                if owner_id.is_none() {
                    errors.push(KeyError::InvalidOwnerId);
                }
                if integration.is_none() {
                    errors.push(KeyError::MissingIntegration);
                }
                if external_id.is_none() {
                    errors.push(KeyError::MissingExternalId);
                }
                Err(ValidationErrors::new(errors))
            }
        }
    }
}

/// Parses a composite id with the default owner id rule.
pub fn parse(raw: &str) -> Result<SelectedCalendarKey, ValidationErrors> {
    KeyParser::new().parse(raw)
}
