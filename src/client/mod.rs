//! HTTP client layer for the terminal dashboard
//!
//! Blocking `ureq` clients for the link and analytics services. Callers run
//! them on `tokio::task::spawn_blocking`.
//!
//! ```text
//! dashboard → LinkServiceClient ──→ GET /api/links, POST /api/shorten
//!           └→ AnalyticsClient  ──→ GET /api/analytics
//! ```

mod analytics_client;
mod link_client;
mod models;

pub use analytics_client::AnalyticsClient;
pub use link_client::LinkServiceClient;
pub use models::{ClickCount, LinkListing, ShortenedLink};

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use ureq::Agent;
use ureq::http::Response;

use crate::errors::LinktrackError;

// ============ ClientError ============

/// Errors from the client layer
#[derive(Debug)]
pub enum ClientError {
    /// Connection refused, DNS failure, timeout
    Transport(String),
    /// Server answered with a non-success status
    Server { status: u16, message: Option<String> },
    /// Response body was not the expected JSON
    Decode(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(e) => write!(f, "Transport error: {}", e),
            ClientError::Server {
                status,
                message: Some(message),
            } => write!(f, "HTTP {}: {}", status, message),
            ClientError::Server {
                status,
                message: None,
            } => write!(f, "HTTP {}", status),
            ClientError::Decode(e) => write!(f, "Invalid response: {}", e),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<ClientError> for LinktrackError {
    fn from(err: ClientError) -> Self {
        LinktrackError::network(err.to_string())
    }
}

/// 构建共享的 HTTP Agent
///
/// 非 2xx 不当作传输错误，由调用方读取 `{"error": ...}`。
pub(crate) fn build_agent(timeout_secs: u64) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(timeout_secs)))
        .http_status_as_error(false)
        .build()
        .into()
}

#[derive(Deserialize)]
struct ServerErrorBody {
    error: Option<String>,
}

/// 检查状态码并解析 JSON 响应体
pub(crate) fn read_json_response<T: for<'de> Deserialize<'de>>(
    resp: Response<ureq::Body>,
) -> Result<T, ClientError> {
    let status = resp.status();
    let mut body = resp.into_body();

    if !status.is_success() {
        let message = body
            .read_json::<ServerErrorBody>()
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty());
        return Err(ClientError::Server {
            status: status.as_u16(),
            message,
        });
    }

    body.read_json::<T>()
        .map_err(|e| ClientError::Decode(e.to_string()))
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
