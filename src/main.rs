//! fpreport: build LaTeX/PDF reports of features, policies and user stories.
//!
//! This is the main entry point for the `fpreport` CLI. It parses arguments,
//! runs the report pipeline, and handles errors with proper exit codes.

use fpreport::cli::Cli;
use fpreport::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
