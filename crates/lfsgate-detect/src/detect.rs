// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2025 LfsGate Contributors

//! Pointer-file detection
//!
//! Runs the external pointer-check command on a candidate byte buffer and
//! classifies the raw process outcome into a [`PointerFileResult`].
//!
//! ## Exit code convention
//!
//! `git lfs pointer --check --stdin` exits 0 when the input is a valid
//! pointer file and 1 when it is not. Exit 1 is ambiguous though: plain
//! Git also exits 1 when the `lfs` subcommand is unknown, so the stderr
//! text is the sole disambiguator. This mirrors the tool's observed
//! behavior and may be version-dependent; the rule is preserved as-is.

use crate::command::Command;
use crate::error::DetectError;
use crate::process::{self, ProcessOutcome};
use std::io;
use tracing::debug;

/// Human-readable name of the thing being detected, shared by report
/// messages.
pub const GIT_LFS_POINTER_FILE: &str = "Git LFS pointer file";

/// The classified outcome of a pointer-file check.
///
/// Constructed fresh per invocation and never mutated. Callers must
/// handle both arms; the compiler enforces exhaustiveness.
#[derive(Debug)]
pub enum PointerFileResult {
    /// The external tool ran and gave a verdict.
    Success {
        /// Whether the input is a Git LFS pointer file.
        is_pointer_file: bool,
    },

    /// The check could not be completed.
    Failure(DetectError),
}

impl PointerFileResult {
    /// True when the input was positively identified as a pointer file.
    pub fn is_pointer_file(&self) -> bool {
        matches!(
            self,
            Self::Success {
                is_pointer_file: true
            }
        )
    }

    /// True when the check itself failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

/// Checks whether `content` is a Git LFS pointer file using the default
/// command, `git lfs pointer --check --stdin`.
///
/// Blocks until the external process completes, fails, or hits the
/// wall-clock bound ([`process::COMMAND_TIMEOUT`]).
///
/// # Example
///
/// ```rust,no_run
/// use lfsgate_detect::check;
///
/// let result = check(b"version https://git-lfs.github.com/spec/v1\n...");
/// if result.is_pointer_file() {
///     println!("pointer file");
/// }
/// ```
pub fn check(content: &[u8]) -> PointerFileResult {
    check_with(&Command::default(), content)
}

/// Like [`check`], but with an injectable command.
///
/// Production callers always use the default command; the override exists
/// so tests can substitute a fake or failing executable.
pub fn check_with(command: &Command, content: &[u8]) -> PointerFileResult {
    classify(command, process::run_command(command, content))
}

/// Classifies a raw process outcome into a [`PointerFileResult`].
///
/// Applies, in order: spawn failure, signal termination, the ambiguous
/// exit-1 disambiguation, usage errors (exit > 1), and finally the
/// 0-or-1 verdict.
pub fn classify(command: &Command, outcome: ProcessOutcome) -> PointerFileResult {
    let ProcessOutcome {
        spawn_error,
        signal,
        status,
        stderr,
    } = outcome;

    if let Some(error) = spawn_error {
        let detail = if error.kind() == io::ErrorKind::NotFound {
            format!("{}: command not found", command.executable())
        } else {
            error.to_string()
        };
        debug!(command = %command, %detail, "Pointer check could not run");
        return PointerFileResult::Failure(DetectError::spawn_failed(command, &detail));
    }

    let Some(status) = status else {
        return PointerFileResult::Failure(match signal {
            Some(signal) => DetectError::signal_terminated(command, signal),
            None => DetectError::missing_status(command),
        });
    };

    let stderr = String::from_utf8_lossy(&stderr);

    // Exit code is also 1 when the file is not an LFS pointer file.
    if status == 1 && stderr.contains("is not a git command") {
        return PointerFileResult::Failure(DetectError::git_lfs_missing(command, &stderr));
    }

    // `git lfs halloj`, `git lfs pointer --halloj` etc.
    if status > 1 {
        return PointerFileResult::Failure(DetectError::usage(command, &stderr));
    }

    PointerFileResult::Success {
        is_pointer_file: status == 0,
    }
}
