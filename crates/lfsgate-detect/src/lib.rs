// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2025 LfsGate Contributors

//! # LfsGate Detection Layer
//!
//! Detects whether a byte buffer is a Git LFS pointer file by delegating
//! to the `git-lfs` command-line tool. This crate does not parse the
//! pointer format itself and does not fetch LFS objects; it invokes
//! `git lfs pointer --check --stdin` within a hard time bound and
//! translates its exit codes, signals, and stderr into a small closed set
//! of structured outcomes.
//!
//! ## Architecture
//!
//! - [`Command`]: the external command as a value, overridable for tests
//! - [`ProcessOutcome`]: the raw result of one bounded invocation
//! - [`PointerFileResult`]: the classified verdict, `Success` or `Failure`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lfsgate_detect::{check, PointerFileResult};
//!
//! match check(b"some file content") {
//!     PointerFileResult::Success { is_pointer_file } => {
//!         println!("pointer file: {}", is_pointer_file);
//!     }
//!     PointerFileResult::Failure(error) => {
//!         eprintln!("{}", error);
//!     }
//! }
//! ```

pub mod command;
pub mod detect;
pub mod error;
pub mod process;

pub use command::Command;
pub use detect::{check, check_with, classify, PointerFileResult, GIT_LFS_POINTER_FILE};
pub use error::DetectError;
pub use process::{ProcessOutcome, COMMAND_TIMEOUT};
