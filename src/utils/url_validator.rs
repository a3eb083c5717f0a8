//! 目标 URL 校验
//!
//! 只接受 http/https，解析失败或其他协议一律拒绝。

use url::Url;

use crate::errors::{LinktrackError, Result};

/// 校验并返回去掉首尾空白后的 URL
pub fn validate_target_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LinktrackError::validation("URL is required"));
    }

    let parsed = Url::parse(trimmed)
        .map_err(|e| LinktrackError::validation(format!("Invalid URL format: {}", e)))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(LinktrackError::validation(format!(
                "Invalid protocol: {}:. Only http:// and https:// are allowed",
                other
            )));
        }
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(LinktrackError::validation("Invalid URL format: missing host"));
    }

    Ok(trimmed.to_string())
}
