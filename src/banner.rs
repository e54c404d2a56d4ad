// src/banner.rs
//! Fixed output text: the version banner and the `--help` listing.

/// Version baked into the binary. `BUSYBOX_VERSION` set at build time wins.
pub const VERSION: &str = match option_env!("BUSYBOX_VERSION") {
    Some(v) => v,
    None => "1.0",
};

pub const USAGE: &str = "Usage: busybox [command] [args...]";

pub const COMMANDS_HEADER: &str = "Available commands:";

/// Applet names shown by `--help`. None of them is implemented.
const APPLETS: &[&str] = &["sh", "ls", "cat", "echo", "grep"];

pub fn banner_line() -> String {
    format!("BusyBox v{} - The Swiss Army Knife of Embedded Linux", VERSION)
}

/// `  sh, ls, cat, echo, grep, ...`
pub fn applet_list() -> String {
    format!("  {}, ...", APPLETS.join(", "))
}

/// Lines printed after the banner for `--help`, without trailing newlines.
pub fn help_lines() -> [String; 3] {
    [USAGE.to_string(), COMMANDS_HEADER.to_string(), applet_list()]
}
