// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2025 LfsGate Contributors

//! Error and diagnostic types for the pipeline adapter

use thiserror::Error;

/// Result type for options validation.
pub type OptionsResult<T> = Result<T, OptionsError>;

/// A caller-side misconfiguration of the loader options.
///
/// This is the one fatal error class of the adapter: it affects every
/// file of the build, so it propagates out of [`crate::run`] instead of
/// being reported through the severity channels.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The options value was neither absent nor a JSON object.
    #[error("Invalid options for lfsgate-loader: expected an object, got {found}")]
    NotAnObject {
        /// JSON rendering of the offending value.
        found: String,
    },

    /// An option name outside the recognized schema.
    #[error(
        "Invalid options for lfsgate-loader: options.{field} is not a recognized option \
         (allowed options: errorEncountered, pointerFileFound)"
    )]
    UnknownField {
        /// The offending option name.
        field: String,
    },

    /// An option value outside the severity enumeration.
    #[error(
        "Invalid options for lfsgate-loader: options.{field} should be one of these: \
         error = emit an error, warning = emit a warning (got {value})"
    )]
    InvalidSeverity {
        /// The offending option name.
        field: String,
        /// JSON rendering of the offending value.
        value: String,
    },
}

/// An error-like value carrying one report message.
///
/// Handed to the host's error- or warning-reporting callback depending on
/// the configured severity. The adapter makes no assumption about how the
/// host renders or aggregates these.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct Diagnostic {
    message: String,
}

impl Diagnostic {
    /// Creates a diagnostic carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The report message text.
    pub fn message(&self) -> &str {
        &self.message
    }
}
