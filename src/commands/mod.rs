//! Command implementations for fpreport.

mod build;

use crate::cli::Cli;
use crate::error::Result;

/// Run the command described by the parsed CLI.
pub fn dispatch(cli: Cli) -> Result<()> {
    build::cmd_build(cli.build)
}
