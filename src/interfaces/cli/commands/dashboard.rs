//! Dashboard command
//!
//! Fetches the link list and the click aggregate concurrently and renders
//! one row per link. A failed fetch is logged and treated as empty.

use std::collections::HashMap;
use std::time::Duration;

use colored::Colorize;
use tokio::task::JoinError;
use tracing::warn;

use crate::client::{AnalyticsClient, ClickCount, ClientError, LinkListing, LinkServiceClient};
use crate::config::DashboardConfig;
use crate::interfaces::cli::CliError;

/// 超过此长度的 URL 在表格中截断
const MAX_URL_WIDTH: usize = 60;

/// 一次刷新拿到的数据
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub links: Vec<LinkListing>,
    pub clicks: Vec<ClickCount>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardRow {
    pub short_code: String,
    pub original_url: String,
    pub clicks: u64,
    pub created_at: String,
}

/// 并发拉取链接列表与点击统计
pub async fn fetch_snapshot(
    links: &LinkServiceClient,
    analytics: &AnalyticsClient,
) -> DashboardSnapshot {
    let links_client = links.clone();
    let analytics_client = analytics.clone();

    let (links, clicks) = tokio::join!(
        tokio::task::spawn_blocking(move || links_client.list_links()),
        tokio::task::spawn_blocking(move || analytics_client.all_clicks()),
    );

    DashboardSnapshot {
        links: or_empty(links, "links"),
        clicks: or_empty(clicks, "analytics"),
    }
}

fn or_empty<T>(result: Result<Result<Vec<T>, ClientError>, JoinError>, what: &str) -> Vec<T> {
    match result {
        Ok(Ok(items)) => items,
        Ok(Err(e)) => {
            warn!("Failed to fetch {}: {}", what, e);
            Vec::new()
        }
        Err(e) => {
            warn!("Fetch task for {} did not complete: {}", what, e);
            Vec::new()
        }
    }
}

/// 按 short_code 匹配点击数，缺失时为 0
pub fn build_rows(snapshot: &DashboardSnapshot) -> Vec<DashboardRow> {
    let clicks: HashMap<&str, u64> = snapshot
        .clicks
        .iter()
        .map(|c| (c.short_code.as_str(), c.clicks))
        .collect();

    snapshot
        .links
        .iter()
        .map(|link| DashboardRow {
            short_code: link.short_code.clone(),
            original_url: link.original_url.clone(),
            clicks: clicks.get(link.short_code.as_str()).copied().unwrap_or(0),
            created_at: link.created_at.clone(),
        })
        .collect()
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    format!("{}{}", s, " ".repeat(width.saturating_sub(len)))
}

/// 渲染为终端表格
pub fn render_table(rows: &[DashboardRow]) -> String {
    if rows.is_empty() {
        return format!("{} No links yet", "ℹ".bold().blue());
    }

    let headers = ["Short Code", "Original URL", "Clicks", "Created At"];
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.short_code.clone(),
                truncate(&row.original_url, MAX_URL_WIDTH),
                row.clicks.to_string(),
                row.created_at.clone(),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, widths[i]).bold().to_string())
        .collect();
    out.push_str(&header_line.join("  "));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  ").dimmed().to_string());
    out.push('\n');

    for row in &cells {
        let line = [
            pad(&row[0], widths[0]).cyan().to_string(),
            pad(&row[1], widths[1]).blue().to_string(),
            pad(&row[2], widths[2]).green().to_string(),
            pad(&row[3], widths[3]).dimmed().to_string(),
        ];
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }

    let total: u64 = rows.iter().map(|r| r.clicks).sum();
    out.push_str(&format!(
        "\n{} {} links, {} clicks",
        "ℹ".bold().blue(),
        rows.len().to_string().green(),
        total.to_string().green()
    ));
    out
}

pub(crate) fn clients(config: &DashboardConfig) -> (LinkServiceClient, AnalyticsClient) {
    (
        LinkServiceClient::new(config.link_service_url.clone(), config.timeout_secs),
        AnalyticsClient::new(config.analytics_service_url.clone(), config.timeout_secs),
    )
}

/// 拉取并打印一次
pub(crate) async fn print_dashboard(links: &LinkServiceClient, analytics: &AnalyticsClient) {
    let snapshot = fetch_snapshot(links, analytics).await;
    println!("{}", render_table(&build_rows(&snapshot)));
}

pub async fn run_dashboard(config: &DashboardConfig, watch: Option<u64>) -> Result<(), CliError> {
    let (links, analytics) = clients(config);

    let Some(interval) = watch else {
        print_dashboard(&links, &analytics).await;
        return Ok(());
    };

    loop {
        // 清屏并回到左上角
        print!("\x1B[2J\x1B[H");
        println!(
            "{} {}",
            "linktrack dashboard".bold().green(),
            format!("(refresh every {}s, Ctrl+C to exit)", interval).dimmed()
        );
        println!();
        print_dashboard(&links, &analytics).await;

        tokio::select! {
            _ = tokio::time::sleep(Duration::from_secs(interval)) => {}
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    Ok(())
}
