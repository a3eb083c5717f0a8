//! Analytics API
//!
//! `POST /api/track` 记录点击，`GET /api/analytics[/{short_code}]` 查询聚合结果。

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{Responder, web};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::helpers::{json_response, service_error_response};
use crate::services::AnalyticsService;

const TRACK_FAILED: &str = "Failed to track click";
const FETCH_FAILED: &str = "Failed to fetch analytics";

/// 点击上报请求体
#[derive(Debug, Default, Deserialize)]
pub struct TrackRequest {
    #[serde(default)]
    pub short_code: Option<String>,
}

impl TrackRequest {
    /// 宽松解析：空 body、非法 JSON、字段类型不对都当作缺少 short_code
    pub fn from_bytes(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackResponse {
    pub message: String,
}

pub struct AnalyticsApi;

impl AnalyticsApi {
    pub async fn track(
        body: web::Bytes,
        service: web::Data<Arc<AnalyticsService>>,
    ) -> impl Responder {
        let request = TrackRequest::from_bytes(&body);
        trace!("Track request: {:?}", request.short_code);

        match service.track_click(request.short_code.as_deref()).await {
            Ok(()) => json_response(
                StatusCode::CREATED,
                &TrackResponse {
                    message: "Click tracked".to_string(),
                },
            ),
            Err(e) => service_error_response(&e, TRACK_FAILED),
        }
    }

    pub async fn link_clicks(
        path: web::Path<String>,
        service: web::Data<Arc<AnalyticsService>>,
    ) -> impl Responder {
        let short_code = path.into_inner();
        match service.get_link_clicks(&short_code).await {
            Ok(summary) => json_response(StatusCode::OK, &summary),
            Err(e) => service_error_response(&e, FETCH_FAILED),
        }
    }

    pub async fn all_clicks(service: web::Data<Arc<AnalyticsService>>) -> impl Responder {
        match service.get_all_clicks().await {
            Ok(summaries) => json_response(StatusCode::OK, &summaries),
            Err(e) => service_error_response(&e, FETCH_FAILED),
        }
    }
}

pub fn analytics_routes() -> actix_web::Scope {
    web::scope("/api")
        .route("/track", web::post().to(AnalyticsApi::track))
        .route("/analytics", web::get().to(AnalyticsApi::all_clicks))
        .route("/analytics/{short_code}", web::get().to(AnalyticsApi::link_clicks))
}
