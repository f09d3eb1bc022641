//! Macros for defining validated string segments.

/// Macro to define a string segment of a composite id with a validation rule.
///
/// This generates a newtype wrapper around `String` with:
/// - `new()` that runs `$check` and rejects invalid values
/// - `as_str()` and `into_inner()` accessors
/// - `Display`, `FromStr` and `AsRef<str>` implementations
/// - `Serialize` and `Deserialize` implementations (deserialization validates)
///
/// # Example
///
/// ```ignore
/// fn check_label(value: &str) -> Result<(), KeyError> { /* ... */ }
///
/// define_segment!(Label, check_label);
///
/// let label = Label::new("primary")?;
/// ```
macro_rules! define_segment {
    ($(#[$meta:meta])* $name:ident, $check:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Validates and wraps a segment value.
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::KeyError> {
                let value = value.into();
                $check(&value)?;
                Ok(Self(value))
            }

            /// Returns the segment as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the segment and returns the owned string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::KeyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<$name> for String {
            fn from(segment: $name) -> Self {
                segment.0
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::new(s).map_err(serde::de::Error::custom)
            }
        }
    };
}
