//! Analytics service client

use tracing::debug;
use ureq::Agent;

use super::models::ClickCount;
use super::{ClientError, build_agent, join_url, read_json_response};

#[derive(Clone)]
pub struct AnalyticsClient {
    base_url: String,
    agent: Agent,
}

impl AnalyticsClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.into(),
            agent: build_agent(timeout_secs),
        }
    }

    /// Click counts for every code with at least one click
    pub fn all_clicks(&self) -> Result<Vec<ClickCount>, ClientError> {
        let url = join_url(&self.base_url, "/api/analytics");
        debug!("GET {}", url);
        let resp = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        read_json_response(resp)
    }
}
