//! Coverage command.

use std::path::{Path, PathBuf};

use crate::cli::{EXIT_ERROR, EXIT_SUCCESS};
use crate::terminal;

/// Handle the `coverage` command.
pub fn cmd_coverage(annotation_dir: &Path, files: &[PathBuf]) -> i32 {
    match rvdv_trace::collect_coverage(annotation_dir, files) {
        Ok(summary) => {
            println!("{summary}");
            EXIT_SUCCESS
        }
        Err(err) => {
            terminal::error(&format!("failed to read annotations: {err}"));
            EXIT_ERROR
        }
    }
}
