//! Hunkstat CLI entry point.
//!
//! Parses arguments, sets up logging, dispatches to the command handler,
//! and maps errors to exit codes.

mod cli;
mod commands;

use cli::Cli;
use hunkstat::exit_codes;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.global.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Log to stderr; RUST_LOG wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
