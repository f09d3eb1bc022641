//! Typed segments of a selected-calendar composite id.
//!
//! Each segment type enforces its own invariant on construction, so a
//! [`SelectedCalendarKey`] built from them always formats to a string that
//! parses back to an equal key.

use serde::{Deserialize, Serialize};

use crate::{KeyError, DELIMITER, INTEGRATION_SUFFIX};

// =============================================================================
// Owner
// =============================================================================

/// Integer id of the account that owns a calendar connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OwnerId(u32);

impl OwnerId {
    /// Creates a new OwnerId from a u32.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for OwnerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<OwnerId> for u32 {
    fn from(id: OwnerId) -> Self {
        id.0
    }
}

impl Serialize for OwnerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for OwnerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = u32::deserialize(deserializer)?;
        Ok(Self(id))
    }
}

// =============================================================================
// Integration and external id
// =============================================================================

fn check_integration(value: &str) -> Result<(), KeyError> {
    let malformed = || KeyError::MalformedIntegration {
        value: value.to_string(),
    };

    let prefix = value.strip_suffix(INTEGRATION_SUFFIX).ok_or_else(malformed)?;
    if prefix.is_empty() {
        return Err(KeyError::MissingIntegration);
    }

    // The suffix must be the first delimiter boundary once an external id follows.
    let probe = format!("{value}_");
    if probe.find(DELIMITER) != Some(prefix.len()) {
        return Err(malformed());
    }

    Ok(())
}

fn check_external_id(value: &str) -> Result<(), KeyError> {
    if value.is_empty() {
        return Err(KeyError::MissingExternalId);
    }
    Ok(())
}

define_segment!(
    /// Calendar provider key, always of the form `<vendor>_calendar`
    /// (e.g. `google_calendar`, `hubspot_other_calendar`).
    Integration,
    check_integration
);

define_segment!(
    /// Provider-specific calendar id. Opaque, non-empty.
    ExternalId,
    check_external_id
);

impl Integration {
    /// Builds the integration key from the text before the first delimiter.
    pub(crate) fn from_prefix(prefix: &str) -> Option<Self> {
        if prefix.is_empty() {
            return None;
        }
        Some(Self(format!("{prefix}{INTEGRATION_SUFFIX}")))
    }

    /// Returns the vendor part, without the `_calendar` suffix.
    #[must_use]
    pub fn vendor(&self) -> &str {
        self.0
            .strip_suffix(INTEGRATION_SUFFIX)
            .unwrap_or(&self.0)
    }
}

impl ExternalId {
    pub(crate) fn from_remainder(remainder: &str) -> Option<Self> {
        if remainder.is_empty() {
            return None;
        }
        Some(Self(remainder.to_string()))
    }
}

// =============================================================================
// Composite key
// =============================================================================

/// A decoded selected-calendar id.
///
/// Serializes as `{ "userId": .., "integration": .., "externalId": .. }`;
/// `Display` yields the canonical composite string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedCalendarKey {
    #[serde(rename = "userId")]
    owner_id: OwnerId,
    integration: Integration,
    external_id: ExternalId,
}

impl SelectedCalendarKey {
    #[must_use]
    pub fn new(owner_id: OwnerId, integration: Integration, external_id: ExternalId) -> Self {
        Self {
            owner_id,
            integration,
            external_id,
        }
    }

    #[must_use]
    pub fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    #[must_use]
    pub fn integration(&self) -> &Integration {
        &self.integration
    }

    #[must_use]
    pub fn external_id(&self) -> &ExternalId {
        &self.external_id
    }

    /// Splits the key into its three segments.
    #[must_use]
    pub fn into_parts(self) -> (OwnerId, Integration, ExternalId) {
        (self.owner_id, self.integration, self.external_id)
    }
}

impl std::fmt::Display for SelectedCalendarKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}_{}_{}",
            self.owner_id, self.integration, self.external_id
        )
    }
}

impl std::str::FromStr for SelectedCalendarKey {
    type Err = crate::ValidationErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key(owner: u32, integration: &str, external: &str) -> SelectedCalendarKey {
        SelectedCalendarKey::new(
            OwnerId::new(owner),
            Integration::new(integration).unwrap(),
            ExternalId::new(external).unwrap(),
        )
    }

    #[test]
    fn test_integration_accepts_vendor_calendar() {
        let integration = Integration::new("hubspot_other_calendar").unwrap();
        assert_eq!(integration.vendor(), "hubspot_other");
        assert_eq!(integration.to_string(), "hubspot_other_calendar");
    }

    #[test]
    fn test_integration_missing_suffix() {
        let result = Integration::new("google");
        assert!(matches!(
            result.unwrap_err(),
            KeyError::MalformedIntegration { .. }
        ));
    }

    #[test]
    fn test_integration_empty_vendor() {
        assert_eq!(
            Integration::new("_calendar").unwrap_err(),
            KeyError::MissingIntegration
        );
    }

    #[test]
    fn test_integration_rejects_ambiguous_vendor() {
        // "a_calendar_calendar" would split after "a" when re-parsed
        let result = Integration::new("a_calendar_calendar");
        assert!(matches!(
            result.unwrap_err(),
            KeyError::MalformedIntegration { .. }
        ));
    }

    #[test]
    fn test_external_id_empty() {
        assert_eq!(
            ExternalId::new("").unwrap_err(),
            KeyError::MissingExternalId
        );
    }

    #[test]
    fn test_external_id_keeps_underscores() {
        let id: ExternalId = "c_blabla@group.calendar.google.com".parse().unwrap();
        assert_eq!(id.as_str(), "c_blabla@group.calendar.google.com");
    }

    #[test]
    fn test_key_display_is_composite() {
        let k = key(7, "google_calendar", "primary");
        assert_eq!(k.to_string(), "7_google_calendar_primary");
    }

    #[test]
    fn test_key_display_reparses() {
        let k = key(12, "office365_calendar", "AAMk_calendar_x");
        let parsed: SelectedCalendarKey = k.to_string().parse().unwrap();
        assert_eq!(parsed, k);
    }

    #[test]
    fn test_key_json_shape() {
        let k = key(5, "google_calendar", "a@b.c");
        let json = serde_json::to_value(&k).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "userId": 5,
                "integration": "google_calendar",
                "externalId": "a@b.c",
            })
        );
    }

    #[test]
    fn test_key_json_rejects_invalid_segments() {
        let result: Result<SelectedCalendarKey, _> = serde_json::from_value(serde_json::json!({
            "userId": 5,
            "integration": "google",
            "externalId": "x",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_owner_id_json_roundtrip() {
        let id = OwnerId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");
        let parsed: OwnerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
