//! Shorten command

use colored::Colorize;

use super::dashboard::{clients, print_dashboard};
use crate::client::ClientError;
use crate::config::DashboardConfig;
use crate::interfaces::cli::CliError;

pub const SHORTEN_FAILED: &str = "Failed to shorten URL";
pub const CONNECT_FAILED: &str = "Failed to connect to server";

/// 把客户端错误转成给用户看的提示
pub fn describe_shorten_error(err: &ClientError) -> String {
    match err {
        ClientError::Server {
            message: Some(message),
            ..
        } => message.clone(),
        ClientError::Server { message: None, .. } | ClientError::Decode(_) => {
            SHORTEN_FAILED.to_string()
        }
        ClientError::Transport(_) => CONNECT_FAILED.to_string(),
    }
}

/// 提交 URL，成功后打印短链接并刷新链接列表
pub async fn shorten_url(config: &DashboardConfig, url: String) -> Result<(), CliError> {
    let (links, analytics) = clients(config);

    let client = links.clone();
    let result = tokio::task::spawn_blocking(move || client.shorten(&url))
        .await
        .map_err(|e| CliError::CommandError(format!("{}: {}", SHORTEN_FAILED, e)))?;

    match result {
        Ok(link) => {
            println!(
                "{} {}",
                "Short URL:".bold().green(),
                links.full_short_url(&link).cyan().underline()
            );
            println!();
            print_dashboard(&links, &analytics).await;
            Ok(())
        }
        Err(e) => {
            tracing::debug!("Shorten request failed: {}", e);
            Err(CliError::CommandError(describe_shorten_error(&e)))
        }
    }
}
