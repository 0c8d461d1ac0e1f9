//! CLI definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for a trace divergence.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for unreadable or malformed input.
pub const EXIT_ERROR: i32 = 2;

#[derive(Parser)]
#[command(name = "rvdv")]
#[command(about = "Canonicalize and compare RISC-V instruction traces for riscv-dv")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output (only show errors)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub silent: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a core's CSV log into the normalized trace format
    Canonicalize {
        /// Source log (CSV, optionally .zst)
        #[arg(long, value_name = "LOG")]
        log: PathBuf,

        /// Output trace (CSV, .zst to compress)
        #[arg(long, value_name = "OUT")]
        csv: PathBuf,

        /// Source column holding the program counter
        #[arg(long, default_value = "pc")]
        pc_column: String,

        /// Source column holding the GPR update (HEX_INDEX:VALUE)
        #[arg(long, default_value = "gpr")]
        gpr_column: String,

        /// Source column holding the CSR update (HEX_INDEX:VALUE)
        #[arg(long, default_value = "csr")]
        csr_column: String,

        /// Source column holding the instruction encoding
        #[arg(long, default_value = "binary")]
        binary_column: String,

        /// Source column holding the privilege mode
        #[arg(long, default_value = "mode")]
        mode_column: String,
    },

    /// Compare a candidate trace against a reference trace
    Compare {
        /// Reference (Spike) trace
        #[arg(long = "ref", value_name = "REF")]
        reference: PathBuf,

        /// Candidate trace
        #[arg(long, visible_alias = "muntjac", value_name = "CAND")]
        candidate: PathBuf,

        /// Report every mismatch (no tolerance rules, no terminal instruction)
        #[arg(long)]
        strict: bool,

        /// Keep comparing past the terminal instruction
        #[arg(long, conflicts_with = "terminal_instr")]
        no_terminal_stop: bool,

        /// Reference mnemonic that ends the comparison successfully [default: ecall]
        #[arg(long, value_name = "MNEMONIC")]
        terminal_instr: Option<String>,
    },

    /// Summarize functional coverage from annotated sources
    Coverage {
        /// Directory holding the annotation files
        #[arg(long, value_name = "DIR")]
        annotation_dir: PathBuf,

        /// Source files to include, relative to the annotation directory
        #[arg(long, num_args = 1.., required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },
}
