//! Startup phase one: everything that has to succeed before binding

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::StaticConfig;
use crate::services::{AnalyticsService, LinkService, notifier_from_url};
use crate::storage::{SeaOrmStorage, StorageFactory};

pub struct AnalyticsStartup {
    pub storage: Arc<SeaOrmStorage>,
    pub analytics_service: Arc<AnalyticsService>,
}

pub struct LinksStartup {
    pub storage: Arc<SeaOrmStorage>,
    pub link_service: Arc<LinkService>,
}

/// 安装 rustls 加密后端（进程内只需一次）
fn install_crypto_provider() {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }
}

async fn open_storage(config: &StaticConfig) -> Result<Arc<SeaOrmStorage>> {
    install_crypto_provider();

    let storage = StorageFactory::create(&config.database)
        .await
        .context("Failed to create storage backend")?;
    info!(
        "Using storage backend: {}",
        storage.get_backend_config().storage_type
    );
    Ok(storage)
}

/// 准备统计服务：连接数据库并建表
pub async fn prepare_analytics_startup(config: &StaticConfig) -> Result<AnalyticsStartup> {
    let start_time = std::time::Instant::now();
    let storage = open_storage(config).await?;
    let analytics_service = Arc::new(AnalyticsService::new(storage.clone()));

    debug!(
        "Analytics pre-startup completed in {} ms",
        start_time.elapsed().as_millis()
    );
    Ok(AnalyticsStartup {
        storage,
        analytics_service,
    })
}

/// 准备链接服务：连接数据库、建表、创建点击上报器
pub async fn prepare_links_startup(config: &StaticConfig) -> Result<LinksStartup> {
    let start_time = std::time::Instant::now();
    let storage = open_storage(config).await?;

    let analytics_url = config.links.analytics_url.trim();
    if analytics_url.is_empty() {
        info!("Click tracking disabled (links.analytics_url is empty)");
    } else {
        info!("Reporting clicks to {}", analytics_url);
    }
    let notifier = notifier_from_url(analytics_url);
    let link_service = Arc::new(LinkService::new(storage.clone(), notifier));

    debug!(
        "Links pre-startup completed in {} ms",
        start_time.elapsed().as_millis()
    );
    Ok(LinksStartup {
        storage,
        link_service,
    })
}
