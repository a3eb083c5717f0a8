//! Analytics service layer
//!
//! Click tracking and read-side aggregation. Shared by the HTTP handlers and
//! the tests; every call goes straight to storage, nothing is cached.

use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::{LinktrackError, Result};
use crate::storage::{ClickSummary, SeaOrmStorage};
use crate::utils::MAX_SHORT_CODE_LENGTH;

/// 缺少 short_code 时返回给调用方的消息
pub const SHORT_CODE_REQUIRED: &str = "short_code is required";

/// short_code 超过列宽时返回给调用方的消息
pub const SHORT_CODE_TOO_LONG: &str = "short_code must be at most 10 characters";

/// Analytics 服务
pub struct AnalyticsService {
    storage: Arc<SeaOrmStorage>,
}

impl AnalyticsService {
    /// 创建 AnalyticsService 实例
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// 校验 short_code：缺失或空字符串都视为缺失
    ///
    /// 超过列宽的短码在任何后端上都直接拒绝，不交给数据库截断或报错。
    pub fn validate_short_code(short_code: Option<&str>) -> Result<&str> {
        match short_code {
            Some(code) if code.chars().count() > MAX_SHORT_CODE_LENGTH => {
                Err(LinktrackError::validation(SHORT_CODE_TOO_LONG))
            }
            Some(code) if !code.is_empty() => Ok(code),
            _ => Err(LinktrackError::validation(SHORT_CODE_REQUIRED)),
        }
    }

    /// 记录一次点击，校验失败时不写库
    pub async fn track_click(&self, short_code: Option<&str>) -> Result<()> {
        let code = Self::validate_short_code(short_code)?;
        self.storage.insert_click(code).await?;
        info!("Click tracked for {}", code);
        Ok(())
    }

    /// 单个短码的点击数（不检查短码是否存在于链接服务）
    pub async fn get_link_clicks(&self, short_code: &str) -> Result<ClickSummary> {
        let clicks = self.storage.count_clicks(short_code).await?;
        debug!("{} has {} clicks", short_code, clicks);
        Ok(ClickSummary {
            short_code: short_code.to_string(),
            clicks,
        })
    }

    /// 所有至少有一次点击的短码，按点击数倒序
    pub async fn get_all_clicks(&self) -> Result<Vec<ClickSummary>> {
        let summaries = self.storage.click_summaries().await?;
        debug!("Aggregated clicks for {} codes", summaries.len());
        Ok(summaries)
    }
}
