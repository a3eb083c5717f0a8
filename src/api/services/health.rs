use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::helpers::json_response;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Health Service
///
/// 存活探针，不访问数据库。
pub struct HealthService;

impl HealthService {
    /// 统计服务的健康检查
    pub async fn analytics_health() -> impl Responder {
        trace!("Received analytics health check");
        Self::respond("healthy")
    }

    /// 链接服务的健康检查
    pub async fn links_health() -> impl Responder {
        trace!("Received links health check");
        Self::respond("ok")
    }

    fn respond(status: &str) -> HttpResponse {
        json_response(
            StatusCode::OK,
            &HealthResponse {
                status: status.to_string(),
            },
        )
    }
}

pub fn analytics_health_routes() -> actix_web::Scope {
    web::scope("/health")
        .route("", web::get().to(HealthService::analytics_health))
        .route("", web::head().to(HealthService::analytics_health))
}

pub fn links_health_routes() -> actix_web::Scope {
    web::scope("/health")
        .route("", web::get().to(HealthService::links_health))
        .route("", web::head().to(HealthService::links_health))
}
