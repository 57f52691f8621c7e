// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2025 LfsGate Contributors

//! # LfsGate Pipeline Adapter
//!
//! Integrates Git LFS pointer-file detection into a build tool's per-file
//! asset processing step, so pointer files accidentally bundled into a
//! build can be flagged.
//!
//! The adapter is transparent: [`run`] returns the file content unchanged
//! and only emits diagnostics. A detected pointer file or a failed check
//! is routed to the host's error or warning channel according to the
//! configured [`Severity`]; only a caller-side misconfiguration
//! ([`OptionsError`]) aborts the invocation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lfsgate_pipeline::{run, Diagnostic, LoaderContext};
//! use serde_json::Value;
//!
//! struct HostContext {
//!     options: Value,
//! }
//!
//! impl LoaderContext for HostContext {
//!     fn options(&self) -> &Value {
//!         &self.options
//!     }
//!
//!     fn emit_error(&mut self, diagnostic: Diagnostic) {
//!         eprintln!("error: {}", diagnostic);
//!     }
//!
//!     fn emit_warning(&mut self, diagnostic: Diagnostic) {
//!         eprintln!("warning: {}", diagnostic);
//!     }
//! }
//!
//! let mut context = HostContext { options: Value::Null };
//! let content = std::fs::read("assets/logo.png")?;
//! let passed_through = run(&mut context, &content)?;
//! assert_eq!(passed_through, content.as_slice());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod loader;
pub mod options;

pub use error::{Diagnostic, OptionsError, OptionsResult};
pub use loader::{run, LoaderContext, MAX_CONTENT_LENGTH};
pub use options::{LoaderOptions, Severity, LOADER_NAME};
