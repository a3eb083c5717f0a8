//! Mode routing
//!
//! - Analytics server (default)
//! - Link server
//! - Client commands (dashboard, shorten, config)

pub mod analytics;
pub mod cli;
pub mod links;

pub use analytics::run_analytics_server;
pub use cli::run_cli;
pub use links::run_links_server;

use crate::cli::Commands;
use crate::system::ConsoleTarget;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    Analytics,
    Links,
    Cli,
}

impl Mode {
    pub fn from_command(command: &Commands) -> Self {
        match command {
            Commands::Analytics => Mode::Analytics,
            Commands::Links => Mode::Links,
            _ => Mode::Cli,
        }
    }

    /// 服务日志写 stdout；客户端命令的 stdout 留给输出
    pub fn console_target(&self) -> ConsoleTarget {
        match self {
            Mode::Analytics | Mode::Links => ConsoleTarget::Stdout,
            Mode::Cli => ConsoleTarget::Stderr,
        }
    }
}

pub(crate) fn bind_address(host: &str, port: u16) -> String {
    format!("{}:{}", host, port)
}

/// 工作线程数，0 表示按 CPU 数
pub(crate) fn server_workers(configured: usize) -> usize {
    if configured == 0 {
        num_cpus::get().min(32)
    } else {
        configured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_command() {
        assert_eq!(Mode::from_command(&Commands::Analytics), Mode::Analytics);
        assert_eq!(Mode::from_command(&Commands::Links), Mode::Links);
        assert_eq!(
            Mode::from_command(&Commands::Dashboard { watch: None }),
            Mode::Cli
        );
    }

    #[test]
    fn test_client_commands_log_to_stderr() {
        assert_eq!(Mode::Analytics.console_target(), ConsoleTarget::Stdout);
        assert_eq!(Mode::Links.console_target(), ConsoleTarget::Stdout);
        for command in [
            Commands::Dashboard { watch: Some(2) },
            Commands::Shorten {
                url: "https://example.com".to_string(),
            },
        ] {
            assert_eq!(
                Mode::from_command(&command).console_target(),
                ConsoleTarget::Stderr
            );
        }
    }

    #[test]
    fn test_server_workers_zero_means_cpus() {
        assert!(server_workers(0) >= 1);
        assert_eq!(server_workers(3), 3);
    }
}
