//! HTTP surface of both services
//!
//! Route tables are exposed as `configure_*` functions so the runtime and the
//! integration tests build identical apps.

pub mod middleware;
pub mod services;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};

use services::{
    LinkApi, analytics_health_routes, analytics_routes, error_response, link_api_routes,
    links_health_routes,
};

async fn not_found() -> HttpResponse {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

/// 统计服务路由，需要 `web::Data<Arc<AnalyticsService>>`
pub fn configure_analytics(cfg: &mut web::ServiceConfig) {
    cfg.service(analytics_health_routes())
        .service(analytics_routes())
        .default_service(web::to(not_found));
}

/// 链接服务路由，需要 `web::Data<Arc<LinkService>>`
///
/// 重定向匹配任意单段路径，必须最后注册。
pub fn configure_links(cfg: &mut web::ServiceConfig) {
    cfg.service(links_health_routes())
        .service(link_api_routes())
        .route("/{short_code}", web::get().to(LinkApi::redirect))
        .default_service(web::to(not_found));
}
