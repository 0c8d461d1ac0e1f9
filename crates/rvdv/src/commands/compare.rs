//! Compare command.

use std::path::Path;

use rvdv_trace::{Comparator, CompareEnd, TolerancePolicy};
use tracing::{debug, warn};

use crate::cli::{EXIT_ERROR, EXIT_FAILURE, EXIT_SUCCESS};
use crate::terminal;

/// Handle the `compare` command.
///
/// Stdout stays empty unless the traces diverge.
pub fn cmd_compare(reference: &Path, candidate: &Path, policy: TolerancePolicy) -> i32 {
    let comparator = Comparator::new(policy);
    let result = match rvdv_trace::compare_files(reference, candidate, &comparator) {
        Ok(result) => result,
        Err(err) => {
            terminal::error(&format!("failed to compare traces: {err}"));
            return EXIT_ERROR;
        }
    };

    match &result.end {
        CompareEnd::Diverged(point) => {
            println!("{point}");
            return EXIT_FAILURE;
        }
        CompareEnd::TerminalInstruction { line } => {
            debug!(line, "reference reached terminal instruction");
        }
        CompareEnd::Exhausted {
            reference_remaining: true,
            ..
        } => {
            warn!(
                compared = result.compared,
                "candidate trace ended before the reference"
            );
        }
        CompareEnd::Exhausted {
            candidate_remaining: true,
            ..
        } => {
            warn!(
                compared = result.compared,
                "reference trace ended before the candidate"
            );
        }
        CompareEnd::Exhausted { .. } => {}
    }
    EXIT_SUCCESS
}
