//! CLI interface module
//!
//! Client-side commands: dashboard, shorten and config generation. None of
//! them touch the database; the dashboard talks to the running services.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::get_config;
use commands::{generate_config, run_dashboard, shorten_url};

#[derive(Debug)]
pub enum CliError {
    ConfigError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ConfigError(msg) => format!("Config error: {}", msg),
            CliError::CommandError(msg) => msg.clone(),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ConfigError(msg) => {
                format!("{} {}", "Config error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => format!("{} {}", "Error:".red().bold(), msg.white()),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::LinktrackError> for CliError {
    fn from(err: crate::errors::LinktrackError) -> Self {
        CliError::CommandError(err.to_string())
    }
}

/// Run a client-side command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Dashboard { watch } => run_dashboard(&get_config().dashboard, watch).await,
        Commands::Shorten { url } => shorten_url(&get_config().dashboard, url).await,
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => generate_config(output_path, force).await,
        Commands::Analytics | Commands::Links => Err(CliError::CommandError(
            "Server modes are not CLI commands".to_string(),
        )),
    }
}
