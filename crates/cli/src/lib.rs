#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front end for the `vcfilter` binary. It
//! builds a [`filespec::FilterSpec`] from patterns given inline, pattern
//! files and a per-repository settings file, then classifies each path named
//! on the command line (or read from standard input) and prints one line per
//! path.
//!
//! # Design
//!
//! [`run`] is the entry point. It accepts an iterator of arguments together
//! with handles for standard output and error so tests can drive it with
//! in-memory buffers; [`run_with_input`] additionally takes the reader used
//! when no paths are given. A [`clap`](https://docs.rs/clap/) builder parses
//! the arguments, while help output uses a fixed snapshot so the wording
//! stays stable.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as exit code `1` with a single
//!   `vcfilter: ...` diagnostic on standard error.
//! - Match-flag switches apply to every pattern added by the invocation; the
//!   `--no-*` switches set the global flags after all patterns are loaded.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(
//!     ["vcfilter", "--include", "*.c", "main.c", "main.h"],
//!     &mut stdout,
//!     &mut stderr,
//! );
//!
//! assert_eq!(exit_code, 0);
//! assert_eq!(String::from_utf8(stdout).unwrap(), "included\tmain.c\nmaybe\tmain.h\n");
//! assert!(stderr.is_empty());
//! ```
//!
//! # See also
//!
//! - `src/bin/vcfilter.rs` for the binary that wires [`run`] into `main`.

use std::ffi::OsString;
use std::io::{self, BufRead, Write};

mod args;
mod error;
mod execute;
mod logging;

use error::CliError;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Parses `arguments`, classifies the requested paths and writes the results.
///
/// Paths are read from the process's standard input when none are given.
/// Returns the process exit code.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_with_input(arguments, &mut input, stdout, stderr)
}

/// Variant of [`run`] that reads paths from `input` instead of standard input.
pub fn run_with_input<I, S, In, Out, Err>(
    arguments: I,
    input: &mut In,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    In: BufRead,
    Out: Write,
    Err: Write,
{
    let outcome = args::parse_args(arguments)
        .map_err(CliError::from)
        .and_then(|parsed| execute::execute(parsed, input, stdout));

    match outcome {
        Ok(()) => 0,
        Err(error) => {
            tracing::debug!(target: "vcfilter::cli", error = ?error, "invocation_failed");
            let text = error.to_string();
            let text = text.trim_end();
            let text = text.strip_prefix("error: ").unwrap_or(text);
            let _ = writeln!(stderr, "vcfilter: {text}");
            1
        }
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}

/// Argument parsing internals exposed for integration tests.
#[doc(hidden)]
pub mod test_utils {
    pub use crate::args::{ParsedArgs, parse_args};
}
