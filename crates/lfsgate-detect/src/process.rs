// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2025 LfsGate Contributors

//! Bounded external-process invocation
//!
//! Spawns the pointer-check command, feeds the candidate content on its
//! standard input, and captures everything the classifier needs: the
//! spawn-level error (if any), the terminating signal (if any), the exit
//! status, and standard error. A hard wall-clock bound guards against a
//! hung or misbehaving external tool; exceeding it surfaces as a
//! spawn-level error, never as a hang.
//!
//! Stdin is fed and stderr drained on helper threads, so the bound spans
//! the whole spawn-to-exit window: a child that never reads its input, or
//! floods stderr past the pipe buffer, still hits the timeout instead of
//! blocking the caller.

use crate::command::Command;
use std::io::{self, Read, Write};
use std::process::{self, Child, ChildStderr, ChildStdin, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::debug;

/// Upper bound on the external command's wall-clock time.
pub const COMMAND_TIMEOUT: Duration = Duration::from_millis(500);

/// How often the deadline loop polls the child for completion.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// The raw result of running a [`Command`].
///
/// Exactly one of `spawn_error`, `signal`, or `status` is meaningful per
/// invocation; `status` and `signal` are mutually exclusive (a process
/// exits via one or the other).
#[derive(Debug)]
pub struct ProcessOutcome {
    /// Error encountered attempting to spawn (or feed) the process at all.
    pub spawn_error: Option<io::Error>,

    /// Name of the signal that terminated the process, e.g. `SIGKILL`.
    pub signal: Option<String>,

    /// Exit status code, absent when the process was killed by a signal.
    pub status: Option<i32>,

    /// Captured standard-error output.
    pub stderr: Vec<u8>,
}

impl ProcessOutcome {
    /// An outcome where the process could not be launched at all.
    pub fn spawn_failed(error: io::Error) -> Self {
        Self {
            spawn_error: Some(error),
            signal: None,
            status: None,
            stderr: Vec::new(),
        }
    }

    /// An outcome for a process that ran to termination.
    pub fn exited(status: Option<i32>, signal: Option<String>, stderr: Vec<u8>) -> Self {
        Self {
            spawn_error: None,
            signal,
            status,
            stderr,
        }
    }
}

/// Runs `command` with `content` as its entire standard input.
///
/// Spawns exactly one child process; no retries. The content buffer is
/// never mutated.
pub(crate) fn run_command(command: &Command, content: &[u8]) -> ProcessOutcome {
    debug!(command = %command, content_len = content.len(), "Spawning pointer-check command");

    let spawned = process::Command::new(command.executable())
        .args(command.args())
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn();

    let mut child = match spawned {
        Ok(child) => child,
        Err(error) => {
            debug!(command = %command, %error, "Failed to spawn");
            return ProcessOutcome::spawn_failed(error);
        }
    };

    let stdin_writer = child
        .stdin
        .take()
        .map(|stdin| spawn_stdin_writer(stdin, content.to_vec()));
    let stderr_reader = child.stderr.take().map(spawn_stderr_reader);

    let deadline = Instant::now() + COMMAND_TIMEOUT;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if Instant::now() >= deadline {
                    debug!(command = %command, "Command timed out");
                    let error = io::Error::new(
                        io::ErrorKind::TimedOut,
                        format!("timed out after {} ms", COMMAND_TIMEOUT.as_millis()),
                    );
                    return kill_and_fail(child, stdin_writer, stderr_reader, error);
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(error) => return kill_and_fail(child, stdin_writer, stderr_reader, error),
        }
    };

    if let Some(Some(error)) = stdin_writer.map(|writer| writer.join().unwrap_or(None)) {
        return ProcessOutcome::spawn_failed(error);
    }
    let stderr = stderr_reader
        .map(|reader| reader.join().unwrap_or_default())
        .unwrap_or_default();

    debug!(command = %command, status = ?status.code(), "Command finished");
    ProcessOutcome::exited(status.code(), terminating_signal(&status), stderr)
}

/// Feeds the child's stdin off-thread. Dropping the handle on return
/// closes the pipe.
fn spawn_stdin_writer(
    mut stdin: ChildStdin,
    content: Vec<u8>,
) -> JoinHandle<Option<io::Error>> {
    thread::spawn(move || {
        match stdin.write_all(&content).and_then(|()| stdin.flush()) {
            Ok(()) => None,
            // The child exited before reading all of its input; its exit
            // status carries the diagnosis.
            Err(error) if error.kind() == io::ErrorKind::BrokenPipe => None,
            Err(error) => Some(error),
        }
    })
}

/// Drains the child's stderr off-thread, so a chatty child never blocks
/// on a full pipe.
fn spawn_stderr_reader(mut pipe: ChildStderr) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut stderr = Vec::new();
        let _ = pipe.read_to_end(&mut stderr);
        stderr
    })
}

/// Kills and reaps the child, lets the helper threads wind down (the
/// closed pipes unblock them), and surfaces `error` as the spawn-level
/// outcome.
fn kill_and_fail(
    mut child: Child,
    stdin_writer: Option<JoinHandle<Option<io::Error>>>,
    stderr_reader: Option<JoinHandle<Vec<u8>>>,
    error: io::Error,
) -> ProcessOutcome {
    let _ = child.kill();
    let _ = child.wait();
    if let Some(writer) = stdin_writer {
        let _ = writer.join();
    }
    if let Some(reader) = stderr_reader {
        let _ = reader.join();
    }
    ProcessOutcome::spawn_failed(error)
}

#[cfg(unix)]
fn terminating_signal(status: &ExitStatus) -> Option<String> {
    use std::os::unix::process::ExitStatusExt;
    status.signal().map(signal_name)
}

#[cfg(not(unix))]
fn terminating_signal(_status: &ExitStatus) -> Option<String> {
    None
}

/// Conventional name for a Unix signal number, e.g. 9 → `SIGKILL`.
#[cfg(unix)]
fn signal_name(signal: i32) -> String {
    match signal {
        1 => "SIGHUP".to_string(),
        2 => "SIGINT".to_string(),
        3 => "SIGQUIT".to_string(),
        4 => "SIGILL".to_string(),
        6 => "SIGABRT".to_string(),
        8 => "SIGFPE".to_string(),
        9 => "SIGKILL".to_string(),
        11 => "SIGSEGV".to_string(),
        13 => "SIGPIPE".to_string(),
        14 => "SIGALRM".to_string(),
        15 => "SIGTERM".to_string(),
        other => format!("SIG{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_failed_outcome() {
        let outcome =
            ProcessOutcome::spawn_failed(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        assert!(outcome.spawn_error.is_some());
        assert!(outcome.signal.is_none());
        assert!(outcome.status.is_none());
        assert!(outcome.stderr.is_empty());
    }

    #[test]
    fn test_exited_outcome() {
        let outcome = ProcessOutcome::exited(Some(0), None, b"noise".to_vec());
        assert!(outcome.spawn_error.is_none());
        assert_eq!(outcome.status, Some(0));
        assert_eq!(outcome.stderr, b"noise");
    }

    #[cfg(unix)]
    #[test]
    fn test_signal_names() {
        assert_eq!(signal_name(9), "SIGKILL");
        assert_eq!(signal_name(15), "SIGTERM");
        assert_eq!(signal_name(64), "SIG64");
    }
}
