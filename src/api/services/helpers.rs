//! Response helpers shared by both services

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::LinktrackError;

/// 统一的错误响应体 `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(body)
}

/// 构建错误响应
pub fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    json_response(
        status,
        &ErrorBody {
            error: message.to_string(),
        },
    )
}

/// 从 LinktrackError 构建错误响应
///
/// 4xx 原样返回错误信息；5xx 记录日志后只返回 `internal_message`，
/// 不向调用方暴露数据库细节。
pub fn service_error_response(err: &LinktrackError, internal_message: &str) -> HttpResponse {
    let status = err.http_status();
    if status.is_server_error() {
        error!("{}: {}", internal_message, err);
        error_response(status, internal_message)
    } else {
        error_response(status, err.message())
    }
}
