//! 点击上报
//!
//! 链接服务在重定向时通知统计服务。上报在阻塞线程池里异步执行，
//! 失败只记日志，不影响重定向。

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace};
use ureq::Agent;

/// 上报请求超时时间
const NOTIFY_TIMEOUT_SECS: u64 = 2;

pub trait ClickNotifier: Send + Sync {
    /// 通知一次点击，立即返回
    fn notify(&self, short_code: &str);
}

/// 不上报（未配置统计服务地址时使用）
pub struct NoopNotifier;

impl ClickNotifier for NoopNotifier {
    fn notify(&self, short_code: &str) {
        trace!("Click tracking disabled, skipping {}", short_code);
    }
}

/// 通过 HTTP 向统计服务 `POST /api/track`
pub struct HttpClickNotifier {
    endpoint: String,
    agent: Agent,
}

impl HttpClickNotifier {
    pub fn new(analytics_url: &str) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(NOTIFY_TIMEOUT_SECS)))
            .build()
            .into();

        Self {
            endpoint: format!("{}/api/track", analytics_url.trim_end_matches('/')),
            agent,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ClickNotifier for HttpClickNotifier {
    fn notify(&self, short_code: &str) {
        let agent = self.agent.clone();
        let endpoint = self.endpoint.clone();
        let body = serde_json::json!({ "short_code": short_code });

        tokio::task::spawn_blocking(move || {
            if let Err(e) = agent.post(&endpoint).send_json(&body) {
                debug!("Click notification to {} failed: {}", endpoint, e);
            }
        });
    }
}

/// 根据配置选择上报实现，地址为空时关闭上报
pub fn notifier_from_url(analytics_url: &str) -> Arc<dyn ClickNotifier> {
    if analytics_url.trim().is_empty() {
        Arc::new(NoopNotifier)
    } else {
        Arc::new(HttpClickNotifier::new(analytics_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let notifier = HttpClickNotifier::new("http://analytics:4000/");
        assert_eq!(notifier.endpoint(), "http://analytics:4000/api/track");
    }
}
