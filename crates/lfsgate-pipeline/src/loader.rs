// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2025 LfsGate Contributors

//! The per-file pipeline step
//!
//! Transparent to the data flow: content always passes through unchanged,
//! and detection outcomes surface only as diagnostics on the host's
//! reporting channels. Oversized inputs short-circuit before any process
//! is spawned.

use crate::error::{Diagnostic, OptionsResult};
use crate::options::{LoaderOptions, Severity};
use lfsgate_detect::{PointerFileResult, GIT_LFS_POINTER_FILE};
use serde_json::Value;
use tracing::debug;

/// Inputs larger than this bypass detection entirely.
///
/// Git LFS pointer files are usually around 130 bytes, so this is a good
/// enough heuristic. Spawning the external process costs around 10 ms,
/// which is not worth paying for files that are highly unlikely to be
/// pointer files.
pub const MAX_CONTENT_LENGTH: usize = 1000;

/// The host pipeline's per-file collaborator contract.
///
/// The host supplies the per-invocation configuration and two reporting
/// callbacks: one for fatal-style diagnostics, one for advisory ones.
pub trait LoaderContext {
    /// Caller-supplied configuration for this invocation.
    fn options(&self) -> &Value;

    /// Reports a fatal-style diagnostic.
    fn emit_error(&mut self, diagnostic: Diagnostic);

    /// Reports an advisory diagnostic.
    fn emit_warning(&mut self, diagnostic: Diagnostic);
}

/// Runs the pointer-file check on one file's content.
///
/// Returns the input slice unchanged in every case. A detected pointer
/// file or a failed check is reported through the severity-selected
/// channel of `context`.
///
/// # Errors
///
/// Returns [`crate::OptionsError`] when the caller-supplied options do
/// not validate; this happens before any process is spawned and is fatal
/// to the invocation.
pub fn run<'a, C>(context: &mut C, content: &'a [u8]) -> OptionsResult<&'a [u8]>
where
    C: LoaderContext + ?Sized,
{
    if content.len() > MAX_CONTENT_LENGTH {
        debug!(
            content_len = content.len(),
            "Content exceeds the pointer-file size bound, skipping check"
        );
        return Ok(content);
    }

    let options = LoaderOptions::from_value(context.options())?;
    handle_result(context, &options, lfsgate_detect::check(content));
    Ok(content)
}

fn handle_result<C>(context: &mut C, options: &LoaderOptions, result: PointerFileResult)
where
    C: LoaderContext + ?Sized,
{
    match result {
        PointerFileResult::Success { is_pointer_file } => {
            if is_pointer_file {
                report(
                    context,
                    options.pointer_file_found,
                    format!(
                        "This looks like a {}. You may want to run 'git lfs pull' \
                         to checkout the actual file.",
                        GIT_LFS_POINTER_FILE
                    ),
                );
            }
        }
        PointerFileResult::Failure(error) => {
            report(
                context,
                options.error_encountered,
                format!(
                    "Could not check if this is a {}. {}",
                    GIT_LFS_POINTER_FILE, error
                ),
            );
        }
    }
}

fn report<C>(context: &mut C, severity: Severity, message: String)
where
    C: LoaderContext + ?Sized,
{
    let diagnostic = Diagnostic::new(message);
    match severity {
        Severity::Error => context.emit_error(diagnostic),
        Severity::Warning => context.emit_warning(diagnostic),
    }
}
