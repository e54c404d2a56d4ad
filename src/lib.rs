//! busybox-sim - a stand-in `busybox` binary for build and packaging tests
//!
//! Prints a version banner and echoes its first argument. No applet is
//! actually implemented.

pub mod banner;
pub mod error;
pub mod invocation;
pub mod logging;

pub use banner::VERSION;
pub use error::{BusyboxError, Result};
pub use invocation::{run, Invocation, RunResult};
