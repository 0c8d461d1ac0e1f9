//! Canonicalize command.

use std::path::Path;

use rvdv_isa::CompositeDecoder;
use rvdv_trace::SourceColumns;
use tracing::{info, warn};

use crate::cli::{EXIT_ERROR, EXIT_SUCCESS};
use crate::terminal;

/// Handle the `canonicalize` command.
pub fn cmd_canonicalize(log: &Path, csv: &Path, columns: &SourceColumns) -> i32 {
    let decoder = CompositeDecoder::standard();
    let summary = match rvdv_trace::canonicalize_file(log, csv, &decoder, columns) {
        Ok(summary) => summary,
        Err(err) => {
            terminal::error(&format!("failed to canonicalize {}: {err}", log.display()));
            return EXIT_ERROR;
        }
    };

    if summary.unknown > 0 {
        warn!(
            unknown = summary.unknown,
            rows = summary.rows,
            "some instructions could not be decoded"
        );
    }
    info!(rows = summary.rows, out = %csv.display(), "wrote trace");
    EXIT_SUCCESS
}
