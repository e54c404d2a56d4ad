// src/invocation.rs
//! Argument inspection and output rendering for the `busybox` entry point.
//!
//! Only `argv[1]` matters. It selects one of three outcomes:
//! - nothing: banner only
//! - `--help`: banner followed by the usage listing
//! - anything else: banner followed by `Running command: <arg>`
//!
//! Every outcome exits with status 0.

use std::ffi::{OsStr, OsString};
use std::io::Write;
use tracing::debug;

use crate::banner;
use crate::error::Result;

pub const HELP_FLAG: &str = "--help";

/// What the process was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Bare,
    Help,
    /// The first argument, verbatim.
    Command(OsString),
}

/// Rendered output of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub stdout: Vec<u8>,
    pub exit_code: i32,
}

impl RunResult {
    pub fn success(stdout: Vec<u8>) -> Self {
        Self { stdout, exit_code: 0 }
    }

    /// Lossy view of `stdout`, for display and assertions.
    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }
}

impl Invocation {
    /// Classify a full argument vector. Element 0 is the program name and is
    /// skipped; elements past index 1 are ignored.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let first: Option<OsString> = args.into_iter().nth(1).map(Into::into);
        let invocation = match first {
            None => Invocation::Bare,
            Some(arg) if arg == HELP_FLAG => Invocation::Help,
            Some(arg) => Invocation::Command(arg),
        };
        debug!(?invocation, "classified invocation");
        invocation
    }

    pub fn run(&self) -> RunResult {
        let mut stdout = Vec::new();
        push_line(&mut stdout, banner::banner_line().as_bytes());

        match self {
            Invocation::Bare => {}
            Invocation::Help => {
                for line in banner::help_lines() {
                    push_line(&mut stdout, line.as_bytes());
                }
            }
            Invocation::Command(arg) => {
                stdout.extend_from_slice(b"Running command: ");
                push_line(&mut stdout, raw_bytes(arg));
            }
        }

        RunResult::success(stdout)
    }

    /// Render and write to `out`, flushing before returning.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<RunResult> {
        let result = self.run();
        out.write_all(&result.stdout)?;
        out.flush()?;
        Ok(result)
    }
}

fn push_line(buf: &mut Vec<u8>, line: &[u8]) {
    buf.extend_from_slice(line);
    buf.push(b'\n');
}

// On Unix these are the exact argv bytes.
fn raw_bytes(arg: &OsStr) -> &[u8] {
    arg.as_encoded_bytes()
}

/// Classify `args` and render the output.
pub fn run<I, S>(args: I) -> RunResult
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    Invocation::from_args(args).run()
}
