//! Analytics server mode

use actix_web::{App, HttpServer, middleware::Compress, web};
use anyhow::{Context, Result};
use tracing::{error, warn};

use super::{bind_address, server_workers};
use crate::api::configure_analytics;
use crate::api::middleware::{
    RequestIdMiddleware, TimingMiddleware, build_cors_middleware, validate_cors_config,
};
use crate::config::StaticConfig;
use crate::runtime::lifetime::{self, shutdown::SHUTDOWN_TIMEOUT_SECS};

/// Run the analytics HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_analytics_server(config: &StaticConfig) -> Result<()> {
    let startup = lifetime::startup::prepare_analytics_startup(config)
        .await
        .inspect_err(|e| error!("Analytics startup failed: {:#}", e))?;

    let storage = startup.storage.clone();
    let analytics_service = startup.analytics_service.clone();
    let cors_config = config.cors.clone();
    validate_cors_config(&cors_config);

    let workers = server_workers(config.analytics.workers);
    let address = bind_address(&config.analytics.host, config.analytics.port);
    warn!("Using {} workers for the analytics service", workers);

    let server = HttpServer::new(move || {
        App::new()
            // 后注册的先执行：RequestId 在外，Timing 日志带上 request_id
            .wrap(TimingMiddleware)
            .wrap(RequestIdMiddleware)
            .wrap(build_cors_middleware(&cors_config))
            .wrap(Compress::default())
            .app_data(web::Data::new(analytics_service.clone()))
            .configure(configure_analytics)
    })
    .workers(workers)
    .shutdown_timeout(SHUTDOWN_TIMEOUT_SECS)
    .bind(&address)
    .with_context(|| format!("Failed to bind analytics service to {}", address))
    .inspect_err(|e| error!("{:#}", e))?;

    warn!("Analytics service listening on http://{}", address);
    server.run().await?;

    lifetime::shutdown::close_storage(&storage).await;
    warn!("Analytics service stopped");
    Ok(())
}
