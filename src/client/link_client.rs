//! Link service client

use tracing::debug;
use ureq::Agent;

use super::models::{LinkListing, ShortenedLink};
use super::{ClientError, build_agent, join_url, read_json_response};

#[derive(Clone)]
pub struct LinkServiceClient {
    base_url: String,
    agent: Agent,
}

impl LinkServiceClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.into(),
            agent: build_agent(timeout_secs),
        }
    }

    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// List all links, newest first
    pub fn list_links(&self) -> Result<Vec<LinkListing>, ClientError> {
        let url = join_url(&self.base_url, "/api/links");
        debug!("GET {}", url);
        let resp = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        read_json_response(resp)
    }

    /// Submit a URL for shortening
    pub fn shorten(&self, target: &str) -> Result<ShortenedLink, ClientError> {
        let url = join_url(&self.base_url, "/api/shorten");
        debug!("POST {}", url);
        let resp = self
            .agent
            .post(&url)
            .send_json(serde_json::json!({ "url": target }))
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        read_json_response(resp)
    }

    /// 完整的短链接地址
    pub fn full_short_url(&self, link: &ShortenedLink) -> String {
        format!("{}{}", self.base_url(), link.short_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_short_url() {
        let client = LinkServiceClient::new("http://localhost:3000/", 1);
        let link = ShortenedLink {
            short_code: "abc123".to_string(),
            short_url: "/abc123".to_string(),
        };
        assert_eq!(client.full_short_url(&link), "http://localhost:3000/abc123");
    }
}
