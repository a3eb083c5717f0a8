//! CLI mode
//!
//! Delegates client-side commands to the CLI implementation.

use crate::cli::Commands;
use crate::interfaces::cli::CliError;

pub async fn run_cli(command: Commands) -> Result<(), CliError> {
    crate::interfaces::cli::run_cli_command(command).await
}
