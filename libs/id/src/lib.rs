//! # selcal-id
//!
//! Parsing and validation of composite selected-calendar identifiers.
//!
//! ## ID Format
//!
//! A selected calendar is addressed by a single string that packs three
//! fields together: `{owner_id}_{integration}_{external_id}`.
//!
//! Examples:
//! - `5_google_calendar_primary`
//! - `7_hubspot_other_calendar_c_blabla@group.calendar.google.com`
//!
//! Integrations always take the form `{vendor}_calendar`, so the string is
//! split at the first `_` (owner id) and then at the first `_calendar_`
//! (integration prefix vs external id). External ids are opaque and may
//! contain underscores, `@`, or further `_calendar` substrings.
//!
//! ## Validation
//!
//! Parsing never panics and never stops at the first problem: every failed
//! check is reported, in the order owner id, integration, external id.
//!
//! ```
//! use selcal_id::{parse, KeyError};
//!
//! let key = parse("7_hubspot_other_calendar_c_blabla@group.calendar.google.com").unwrap();
//! assert_eq!(key.owner_id().value(), 7);
//! assert_eq!(key.integration().as_str(), "hubspot_other_calendar");
//! assert_eq!(key.external_id().as_str(), "c_blabla@group.calendar.google.com");
//!
//! let errors = parse("3_foo").unwrap_err();
//! assert_eq!(
//!     errors.errors(),
//!     &[KeyError::MissingIntegration, KeyError::MissingExternalId]
//! );
//! ```

#[macro_use]
mod macros;

mod error;
mod parse;
mod query;
mod types;

pub use error::{IssueCode, KeyError, ValidationErrors, ValidationIssue};
pub use parse::{parse, DigitsOnly, KeyParser, OwnerIdValidator};
pub use query::SelectedCalendarIdQuery;
pub use types::*;

/// Literal boundary between the integration prefix and the external id.
pub const DELIMITER: &str = "_calendar_";

/// Suffix every integration key carries.
pub const INTEGRATION_SUFFIX: &str = "_calendar";
