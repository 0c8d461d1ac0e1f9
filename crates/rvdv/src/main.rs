//! rvdv CLI - riscv-dv trace tooling

mod cli;
mod commands;
mod terminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over -v/-s.
    let default_level = if cli.verbose {
        "rvdv=debug"
    } else if cli.silent {
        "rvdv=error"
    } else {
        "rvdv=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = commands::run_command(&cli);
    std::process::exit(exit_code);
}
