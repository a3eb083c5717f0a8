use clap::Parser;
use colored::Colorize;

use linktrack::cli::Cli;
use linktrack::config::init_config;
use linktrack::runtime::modes::{self, Mode};
use linktrack::system::init_logging;

#[actix_web::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match init_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    let command = cli.command_or_default().clone();
    let mode = Mode::from_command(&command);

    // guard 必须活到进程结束，否则缓冲的日志会丢失
    let _guard = match init_logging(&config.logging, mode.console_target()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    let result = match mode {
        Mode::Analytics => modes::run_analytics_server(&config).await,
        Mode::Links => modes::run_links_server(&config).await,
        Mode::Cli => {
            if let Err(e) = modes::run_cli(command).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "[ERROR]".red().bold(), e);
        std::process::exit(1);
    }
}
