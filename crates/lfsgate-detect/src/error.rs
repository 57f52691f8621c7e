// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2025 LfsGate Contributors

//! Detection failure messages
//!
//! Each variant corresponds to one way the external pointer-check can go
//! wrong. Failures are returned as data, never propagated as `Err`, so a
//! single bad file never aborts a batch. External text embedded in a
//! message is trimmed of trailing whitespace and indented by 4 spaces on
//! every line before it enters the "command failed" template.

use crate::command::Command;
use thiserror::Error;

/// A classified failure of the external pointer-check command.
#[derive(Debug, Error)]
pub enum DetectError {
    /// The external tool could not be launched: missing executable,
    /// permission problem, or timeout-induced abort.
    #[error("The command '{command}' failed with this error:\n\n{detail}\n")]
    SpawnFailed {
        /// Rendered command line.
        command: String,
        /// Indented description of the spawn-level error.
        detail: String,
    },

    /// The tool ran but rejected its own arguments or subcommand
    /// (exit code greater than 1).
    #[error("The command '{command}' failed with this error:\n\n{detail}\n")]
    Usage {
        /// Rendered command line.
        command: String,
        /// The tool's own stderr, indented.
        detail: String,
    },

    /// Git ran but does not know the `lfs` subcommand.
    #[error("The command '{command}' failed with this error:\n\n{detail}\n\nIs Git LFS installed?")]
    GitLfsMissing {
        /// Rendered command line.
        command: String,
        /// Git's stderr, indented.
        detail: String,
    },

    /// The external process was killed by a signal.
    #[error("The command '{command}' was terminated by a {signal} signal.")]
    SignalTerminated {
        /// Rendered command line.
        command: String,
        /// Signal name, e.g. `SIGKILL`.
        signal: String,
    },

    /// Neither an exit status nor a signal was observed. Should not occur
    /// per the platform contract.
    #[error("Neither exit code nor terminating signal was reported for the command '{command}'.")]
    MissingStatus {
        /// Rendered command line.
        command: String,
    },
}

impl DetectError {
    pub(crate) fn spawn_failed(command: &Command, detail: &str) -> Self {
        Self::SpawnFailed {
            command: command.to_string(),
            detail: indent(detail),
        }
    }

    pub(crate) fn usage(command: &Command, stderr: &str) -> Self {
        Self::Usage {
            command: command.to_string(),
            detail: indent(stderr),
        }
    }

    pub(crate) fn git_lfs_missing(command: &Command, stderr: &str) -> Self {
        Self::GitLfsMissing {
            command: command.to_string(),
            detail: indent(stderr),
        }
    }

    pub(crate) fn signal_terminated(command: &Command, signal: String) -> Self {
        Self::SignalTerminated {
            command: command.to_string(),
            signal,
        }
    }

    pub(crate) fn missing_status(command: &Command) -> Self {
        Self::MissingStatus {
            command: command.to_string(),
        }
    }
}

/// Trims trailing whitespace, then prefixes every line (including empty
/// interior lines) with exactly 4 spaces.
fn indent(text: &str) -> String {
    let trimmed = text.trim_end();
    if trimmed.is_empty() {
        return "    ".to_string();
    }
    trimmed
        .lines()
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_prefixes_every_line() {
        assert_eq!(indent("a\n\nb"), "    a\n    \n    b");
    }

    #[test]
    fn test_indent_trims_trailing_whitespace() {
        assert_eq!(indent("a\nb\n\n"), "    a\n    b");
    }

    #[test]
    fn test_indent_preserves_tabs() {
        assert_eq!(indent("\tlog"), "    \tlog");
    }
}
