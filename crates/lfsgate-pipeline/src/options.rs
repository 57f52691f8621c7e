// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2025 LfsGate Contributors

//! Loader options and their validation
//!
//! Options arrive from the host pipeline as a JSON value and are checked
//! field-by-field against the recognized schema: two optional fields,
//! `pointerFileFound` and `errorEncountered`, each restricted to
//! `{error, warning}`. Any other field name is rejected. Validation
//! errors name the offending field as `options.<field>` and carry the
//! loader name for traceability.

use crate::error::{OptionsError, OptionsResult};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Name of the pipeline component, embedded in validation errors.
pub const LOADER_NAME: &str = "lfsgate-loader";

/// The reporting channel a detected condition is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Route through the host's fatal-style channel.
    Error,

    /// Route through the host's advisory channel.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// Per-invocation loader configuration.
///
/// Each field defaults to [`Severity::Warning`] when not supplied by the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderOptions {
    /// What should happen when a Git LFS pointer file is found.
    pub pointer_file_found: Severity,

    /// What should happen when a file cannot be checked successfully.
    pub error_encountered: Severity,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            pointer_file_found: Severity::Warning,
            error_encountered: Severity::Warning,
        }
    }
}

impl LoaderOptions {
    /// Validates caller-supplied options against the recognized schema.
    ///
    /// `Null` (no options supplied) yields the defaults. Unknown fields
    /// and out-of-enumeration values are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError`] naming the offending field and the
    /// expected enumeration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lfsgate_pipeline::{LoaderOptions, Severity};
    /// use serde_json::json;
    ///
    /// let options = LoaderOptions::from_value(&json!({ "pointerFileFound": "error" }))?;
    /// assert_eq!(options.pointer_file_found, Severity::Error);
    /// assert_eq!(options.error_encountered, Severity::Warning);
    /// # Ok::<(), lfsgate_pipeline::OptionsError>(())
    /// ```
    pub fn from_value(value: &Value) -> OptionsResult<Self> {
        let object = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(object) => object,
            other => {
                return Err(OptionsError::NotAnObject {
                    found: other.to_string(),
                })
            }
        };

        let mut options = Self::default();
        for (field, value) in object {
            match field.as_str() {
                "pointerFileFound" => {
                    options.pointer_file_found = severity_from_value(field, value)?;
                }
                "errorEncountered" => {
                    options.error_encountered = severity_from_value(field, value)?;
                }
                _ => {
                    return Err(OptionsError::UnknownField {
                        field: field.clone(),
                    })
                }
            }
        }
        Ok(options)
    }
}

fn severity_from_value(field: &str, value: &Value) -> OptionsResult<Severity> {
    // The derive's rename attribute is the single source of the accepted
    // spellings.
    Severity::deserialize(value).map_err(|_| OptionsError::InvalidSeverity {
        field: field.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let options = LoaderOptions::default();
        assert_eq!(options.pointer_file_found, Severity::Warning);
        assert_eq!(options.error_encountered, Severity::Warning);
    }

    #[test]
    fn test_null_yields_defaults() {
        let options = LoaderOptions::from_value(&Value::Null).unwrap();
        assert_eq!(options, LoaderOptions::default());
    }

    #[test]
    fn test_empty_object_yields_defaults() {
        let options = LoaderOptions::from_value(&json!({})).unwrap();
        assert_eq!(options, LoaderOptions::default());
    }

    #[test]
    fn test_both_fields_supplied() {
        let options = LoaderOptions::from_value(&json!({
            "pointerFileFound": "error",
            "errorEncountered": "error",
        }))
        .unwrap();
        assert_eq!(options.pointer_file_found, Severity::Error);
        assert_eq!(options.error_encountered, Severity::Error);
    }

    #[test]
    fn test_one_field_supplied_other_defaults() {
        let options = LoaderOptions::from_value(&json!({ "errorEncountered": "error" })).unwrap();
        assert_eq!(options.pointer_file_found, Severity::Warning);
        assert_eq!(options.error_encountered, Severity::Error);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let error = LoaderOptions::from_value(&json!({ "halloj": "warning" })).unwrap_err();
        assert!(matches!(&error, OptionsError::UnknownField { field } if field == "halloj"));

        let message = error.to_string();
        assert!(message.contains(LOADER_NAME), "{}", message);
        assert!(message.contains("options.halloj"), "{}", message);
        assert!(message.contains("errorEncountered"), "{}", message);
        assert!(message.contains("pointerFileFound"), "{}", message);
    }

    #[test]
    fn test_out_of_enumeration_value_rejected() {
        let error =
            LoaderOptions::from_value(&json!({ "pointerFileFound": "fatal" })).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("options.pointerFileFound"), "{}", message);
        assert!(message.contains("error = emit an error"), "{}", message);
        assert!(message.contains("warning = emit a warning"), "{}", message);
    }

    #[test]
    fn test_severity_spellings_are_lowercase_only() {
        let error = LoaderOptions::from_value(&json!({ "pointerFileFound": "Error" })).unwrap_err();
        assert!(matches!(
            error,
            OptionsError::InvalidSeverity { ref field, .. } if field == "pointerFileFound"
        ));
    }

    #[test]
    fn test_non_string_value_rejected() {
        let error = LoaderOptions::from_value(&json!({ "errorEncountered": 1 })).unwrap_err();
        assert!(matches!(
            error,
            OptionsError::InvalidSeverity { ref field, .. } if field == "errorEncountered"
        ));
    }

    #[test]
    fn test_non_object_options_rejected() {
        let error = LoaderOptions::from_value(&json!("warning")).unwrap_err();
        assert!(matches!(error, OptionsError::NotAnObject { .. }));
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
