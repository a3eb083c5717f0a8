use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::errors::Result;

pub mod backend;
pub mod models;

pub use backend::SeaOrmStorage;
pub use models::{ClickSummary, Link, StorageConfig};

pub struct StorageFactory;

impl StorageFactory {
    /// 建立连接池并完成建表，失败即返回错误（调用方据此终止启动）
    pub async fn create(config: &DatabaseConfig) -> Result<Arc<SeaOrmStorage>> {
        let database_url = config.effective_url()?;

        // 从 URL 自动推断数据库类型
        let backend_type = backend::infer_backend_from_url(&database_url)?;

        let storage = SeaOrmStorage::new(&database_url, &backend_type, config).await?;
        Ok(Arc::new(storage))
    }
}
