//! Styled output helpers.

use console::style;

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold().for_stderr(), message);
}
