//! Link service API: shorten, list and redirect

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::helpers::{error_response, json_response, service_error_response};
use crate::services::LinkService;
use crate::utils::is_valid_short_code;

const SHORTEN_FAILED: &str = "Failed to shorten URL";
const LIST_FAILED: &str = "Failed to fetch links";
const REDIRECT_FAILED: &str = "Failed to resolve URL";
const NOT_FOUND: &str = "URL not found";

#[derive(Debug, Default, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkResponse {
    pub short_code: String,
    pub original_url: String,
    pub created_at: String,
}

pub struct LinkApi;

impl LinkApi {
    pub async fn shorten(body: web::Bytes, service: web::Data<Arc<LinkService>>) -> impl Responder {
        let request: ShortenRequest = serde_json::from_slice(&body).unwrap_or_default();

        match service.shorten(request.url.as_deref()).await {
            Ok(link) => json_response(
                StatusCode::OK,
                &ShortenResponse {
                    short_url: format!("/{}", link.short_code),
                    short_code: link.short_code,
                },
            ),
            Err(e) => service_error_response(&e, SHORTEN_FAILED),
        }
    }

    pub async fn list(service: web::Data<Arc<LinkService>>) -> impl Responder {
        match service.list().await {
            Ok(links) => {
                let body: Vec<LinkResponse> = links
                    .into_iter()
                    .map(|link| LinkResponse {
                        short_code: link.short_code,
                        original_url: link.original_url,
                        created_at: link.created_at.to_rfc3339(),
                    })
                    .collect();
                json_response(StatusCode::OK, &body)
            }
            Err(e) => service_error_response(&e, LIST_FAILED),
        }
    }

    pub async fn redirect(
        path: web::Path<String>,
        service: web::Data<Arc<LinkService>>,
    ) -> impl Responder {
        let short_code = path.into_inner();

        // 非法短码不查库
        if !is_valid_short_code(&short_code) {
            trace!("Invalid short code rejected: {}", short_code);
            return error_response(StatusCode::NOT_FOUND, NOT_FOUND);
        }

        match service.visit(&short_code).await {
            Ok(link) => {
                debug!("Redirecting {} -> {}", short_code, link.original_url);
                HttpResponse::build(StatusCode::TEMPORARY_REDIRECT)
                    .insert_header(("Location", link.original_url))
                    .finish()
            }
            Err(e) => service_error_response(&e, REDIRECT_FAILED),
        }
    }
}

pub fn link_api_routes() -> actix_web::Scope {
    web::scope("/api")
        .route("/shorten", web::post().to(LinkApi::shorten))
        .route("/links", web::get().to(LinkApi::list))
}
