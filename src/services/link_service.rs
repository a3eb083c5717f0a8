//! Link management service
//!
//! Shortening, lookup and listing for the link service, plus the click
//! notification fired on every successful redirect.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::click_notifier::ClickNotifier;
use crate::errors::{LinktrackError, Result};
use crate::storage::{Link, SeaOrmStorage};
use crate::utils::{generate_short_code, validate_target_url};

/// 哈希冲突时最多重试的次数
const MAX_CODE_ATTEMPTS: u64 = 16;

pub struct LinkService {
    storage: Arc<SeaOrmStorage>,
    notifier: Arc<dyn ClickNotifier>,
}

impl LinkService {
    pub fn new(storage: Arc<SeaOrmStorage>, notifier: Arc<dyn ClickNotifier>) -> Self {
        Self { storage, notifier }
    }

    /// 缩短 URL
    ///
    /// 同一个 URL 总是返回同一个短码。
    pub async fn shorten(&self, url: Option<&str>) -> Result<Link> {
        let url = validate_target_url(url.unwrap_or_default())?;

        if let Some(existing) = self.storage.find_link_by_url(&url).await? {
            debug!("URL already shortened as {}", existing.short_code);
            return Ok(existing);
        }

        let code = self.allocate_code(&url).await?;
        match self.storage.insert_link(&code, &url).await {
            Ok(link) => {
                info!("Short link created: {} -> {}", link.short_code, link.original_url);
                Ok(link)
            }
            Err(e) => {
                // 并发缩短同一 URL 时唯一约束会拒绝后到者，此时返回先写入的那条
                if let Some(existing) = self.storage.find_link_by_url(&url).await? {
                    return Ok(existing);
                }
                Err(e)
            }
        }
    }

    /// 找到一个未被其他 URL 占用的短码
    async fn allocate_code(&self, url: &str) -> Result<String> {
        for seed in 0..MAX_CODE_ATTEMPTS {
            let code = generate_short_code(url, seed);
            match self.storage.find_link(&code).await? {
                None => return Ok(code),
                Some(taken) => {
                    warn!(
                        "Short code {} collides with {}, reseeding",
                        code, taken.original_url
                    );
                }
            }
        }
        Err(LinktrackError::database_operation(format!(
            "No free short code after {} attempts",
            MAX_CODE_ATTEMPTS
        )))
    }

    pub async fn resolve(&self, short_code: &str) -> Result<Link> {
        self.storage
            .find_link(short_code)
            .await?
            .ok_or_else(|| LinktrackError::not_found("URL not found"))
    }

    /// 解析短码并上报一次点击
    pub async fn visit(&self, short_code: &str) -> Result<Link> {
        let link = self.resolve(short_code).await?;
        self.notifier.notify(&link.short_code);
        Ok(link)
    }

    pub async fn list(&self) -> Result<Vec<Link>> {
        self.storage.list_links().await
    }
}
