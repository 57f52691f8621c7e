// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2025 LfsGate Contributors

//! The external pointer-check command
//!
//! Detection is delegated entirely to `git lfs pointer --check --stdin`.
//! The command is modeled as a value so tests can substitute a fake or
//! failing executable without process-level mocking.

use std::fmt;

/// An external command: an executable name plus its ordered arguments.
///
/// The default is the production command, `git lfs pointer --check --stdin`.
/// Immutable once constructed; safe to share read-only across invocations.
///
/// # Example
///
/// ```rust
/// use lfsgate_detect::Command;
///
/// let command = Command::default();
/// assert_eq!(command.to_string(), "git lfs pointer --check --stdin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    executable: String,
    args: Vec<String>,
}

impl Command {
    /// Creates a command from an executable name and arguments.
    pub fn new(
        executable: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            executable: executable.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The executable name, as passed to the OS.
    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// The arguments, in invocation order.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Default for Command {
    fn default() -> Self {
        Self::new("git", ["lfs", "pointer", "--check", "--stdin"])
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.executable)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command() {
        let command = Command::default();
        assert_eq!(command.executable(), "git");
        assert_eq!(command.args(), ["lfs", "pointer", "--check", "--stdin"]);
    }

    #[test]
    fn test_display_joins_with_spaces() {
        let command = Command::new("git", ["lfs", "halloj"]);
        assert_eq!(command.to_string(), "git lfs halloj");
    }

    #[test]
    fn test_display_bare_executable() {
        let command = Command::new("true", Vec::<String>::new());
        assert_eq!(command.to_string(), "true");
    }
}
