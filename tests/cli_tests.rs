//! CLI 参数解析测试

use clap::Parser;

use linktrack::cli::{Cli, Commands, ConfigCommands};

#[test]
fn test_no_subcommand_runs_analytics() {
    let cli = Cli::try_parse_from(["linktrack"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.command_or_default(), &Commands::Analytics);
    assert_eq!(cli.config, "config.toml");
}

#[test]
fn test_parse_server_modes() {
    let cli = Cli::try_parse_from(["linktrack", "links"]).unwrap();
    assert_eq!(cli.command, Some(Commands::Links));

    let cli = Cli::try_parse_from(["linktrack", "analytics", "-c", "custom.toml"]).unwrap();
    assert_eq!(cli.command, Some(Commands::Analytics));
    assert_eq!(cli.config, "custom.toml");
}

#[test]
fn test_parse_dashboard_watch() {
    let cli = Cli::try_parse_from(["linktrack", "dashboard"]).unwrap();
    assert_eq!(cli.command, Some(Commands::Dashboard { watch: None }));

    let cli = Cli::try_parse_from(["linktrack", "dashboard", "--watch", "5"]).unwrap();
    assert_eq!(cli.command, Some(Commands::Dashboard { watch: Some(5) }));

    assert!(Cli::try_parse_from(["linktrack", "dashboard", "--watch", "0"]).is_err());
}

#[test]
fn test_parse_shorten_requires_url() {
    let cli = Cli::try_parse_from(["linktrack", "shorten", "https://example.com"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Shorten {
            url: "https://example.com".to_string()
        })
    );
    assert!(Cli::try_parse_from(["linktrack", "shorten"]).is_err());
}

#[test]
fn test_parse_config_generate() {
    let cli = Cli::try_parse_from(["linktrack", "config", "generate", "out.toml", "--force"])
        .unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Config {
            action: ConfigCommands::Generate {
                output_path: Some("out.toml".to_string()),
                force: true,
            }
        })
    );
}
