//! Link server mode

use actix_web::{App, HttpServer, middleware::Compress, web};
use anyhow::{Context, Result};
use tracing::{error, warn};

use super::{bind_address, server_workers};
use crate::api::configure_links;
use crate::api::middleware::{
    RequestIdMiddleware, TimingMiddleware, build_cors_middleware, validate_cors_config,
};
use crate::config::StaticConfig;
use crate::runtime::lifetime::{self, shutdown::SHUTDOWN_TIMEOUT_SECS};

/// Run the link HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_links_server(config: &StaticConfig) -> Result<()> {
    let startup = lifetime::startup::prepare_links_startup(config)
        .await
        .inspect_err(|e| error!("Link service startup failed: {:#}", e))?;

    let storage = startup.storage.clone();
    let link_service = startup.link_service.clone();
    let cors_config = config.cors.clone();
    validate_cors_config(&cors_config);

    let workers = server_workers(config.links.workers);
    let address = bind_address(&config.links.host, config.links.port);
    warn!("Using {} workers for the link service", workers);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TimingMiddleware)
            .wrap(RequestIdMiddleware)
            .wrap(build_cors_middleware(&cors_config))
            .wrap(Compress::default())
            .app_data(web::Data::new(link_service.clone()))
            .configure(configure_links)
    })
    .workers(workers)
    .shutdown_timeout(SHUTDOWN_TIMEOUT_SECS)
    .bind(&address)
    .with_context(|| format!("Failed to bind link service to {}", address))
    .inspect_err(|e| error!("{:#}", e))?;

    warn!("Link service listening on http://{}", address);
    server.run().await?;

    lifetime::shutdown::close_storage(&storage).await;
    warn!("Link service stopped");
    Ok(())
}
