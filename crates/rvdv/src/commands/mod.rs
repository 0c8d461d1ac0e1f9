//! Command implementations.
//!
//! Each submodule handles one CLI command.

mod canonicalize;
mod compare;
mod coverage;

use rvdv_trace::{SourceColumns, TolerancePolicy};

use crate::cli::{Cli, Commands};

/// Dispatch CLI command to the appropriate handler.
pub fn run_command(cli: &Cli) -> i32 {
    match &cli.command {
        Commands::Canonicalize { .. } => handle_canonicalize(cli),
        Commands::Compare { .. } => handle_compare(cli),
        Commands::Coverage {
            annotation_dir,
            files,
        } => coverage::cmd_coverage(annotation_dir, files),
    }
}

fn handle_canonicalize(cli: &Cli) -> i32 {
    let Commands::Canonicalize {
        log,
        csv,
        pc_column,
        gpr_column,
        csr_column,
        binary_column,
        mode_column,
    } = &cli.command
    else {
        unreachable!("canonicalize command variant mismatch");
    };

    let columns = SourceColumns {
        pc: pc_column.clone(),
        gpr: gpr_column.clone(),
        csr: csr_column.clone(),
        binary: binary_column.clone(),
        mode: mode_column.clone(),
    };
    canonicalize::cmd_canonicalize(log, csv, &columns)
}

fn handle_compare(cli: &Cli) -> i32 {
    let Commands::Compare {
        reference,
        candidate,
        strict,
        no_terminal_stop,
        terminal_instr,
    } = &cli.command
    else {
        unreachable!("compare command variant mismatch");
    };

    let policy = tolerance_policy(*strict, *no_terminal_stop, terminal_instr.as_deref());
    compare::cmd_compare(reference, candidate, policy)
}

/// Build the comparison policy from the compare flags.
///
/// `--terminal-instr` also enables the shortcut under `--strict`.
fn tolerance_policy(
    strict: bool,
    no_terminal_stop: bool,
    terminal_instr: Option<&str>,
) -> TolerancePolicy {
    let policy = if strict {
        TolerancePolicy::strict()
    } else {
        TolerancePolicy::riscv_dv()
    };
    match terminal_instr {
        _ if no_terminal_stop => policy.without_terminal_instr(),
        Some(mnemonic) => policy.with_terminal_instr(mnemonic),
        None => policy,
    }
}
