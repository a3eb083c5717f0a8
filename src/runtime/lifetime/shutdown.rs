use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, error};

use crate::storage::SeaOrmStorage;

/// 关闭超时时间（秒）
pub const SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// 关闭连接池的超时时间（秒）
const CLOSE_TIMEOUT_SECS: u64 = 10;

/// 服务器停止后释放数据库连接池
pub async fn close_storage(storage: &SeaOrmStorage) {
    match timeout(Duration::from_secs(CLOSE_TIMEOUT_SECS), storage.close()).await {
        Ok(Ok(())) => debug!("Storage shutdown complete"),
        Ok(Err(e)) => error!("{}", e),
        Err(_) => error!(
            "Closing database pool timed out after {} seconds",
            CLOSE_TIMEOUT_SECS
        ),
    }
}
