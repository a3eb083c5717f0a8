//! Analytics API 集成测试
//!
//! 覆盖 health、track、单码查询和全局聚合端点。

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use serde_json::Value;
use tempfile::TempDir;

use linktrack::api::configure_analytics;
use linktrack::api::middleware::RequestIdMiddleware;
use linktrack::config::DatabaseConfig;
use linktrack::services::AnalyticsService;
use linktrack::storage::SeaOrmStorage;

// =============================================================================
// 测试环境初始化
// =============================================================================

async fn setup() -> (TempDir, Arc<SeaOrmStorage>, Arc<AnalyticsService>) {
    let temp_dir = TempDir::new().expect("创建临时目录失败");
    let db_path = temp_dir.path().join("analytics_api.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let storage = Arc::new(
        SeaOrmStorage::new(&db_url, "sqlite", &DatabaseConfig::from_url(&db_url))
            .await
            .expect("创建存储失败"),
    );
    let service = Arc::new(AnalyticsService::new(storage.clone()));
    (temp_dir, storage, service)
}

macro_rules! analytics_app {
    ($service:expr) => {
        test::init_service(
            App::new()
                .wrap(RequestIdMiddleware)
                .app_data(web::Data::new($service.clone()))
                .configure(configure_analytics),
        )
        .await
    };
}

fn track_request(body: &'static str) -> TestRequest {
    TestRequest::post()
        .uri("/api/track")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(body)
}

// =============================================================================
// Health
// =============================================================================

#[actix_web::test]
async fn test_health_reports_healthy() {
    let (_dir, storage, service) = setup().await;
    // 先关闭连接池，证明健康检查不访问数据库
    storage.close().await.unwrap();

    let app = analytics_app!(service);
    let resp = test::call_service(&app, TestRequest::get().uri("/health").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "status": "healthy" }));
}

// =============================================================================
// Track
// =============================================================================

#[actix_web::test]
async fn test_track_twice_counts_two() {
    let (_dir, _storage, service) = setup().await;
    let app = analytics_app!(service);

    for _ in 0..2 {
        let resp = test::call_service(&app, track_request(r#"{"short_code":"abc123"}"#).to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Click tracked");
    }

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/analytics/abc123").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["short_code"], "abc123");
    assert_eq!(body["clicks"], 2);
}

#[actix_web::test]
async fn test_track_empty_body_rejected_without_insert() {
    let (_dir, storage, service) = setup().await;
    let app = analytics_app!(service);

    let resp = test::call_service(&app, TestRequest::post().uri("/api/track").to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "short_code is required");

    assert_eq!(storage.total_clicks().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_track_rejects_missing_or_invalid_short_code() {
    let (_dir, storage, service) = setup().await;
    let app = analytics_app!(service);

    for body in [
        r#"{}"#,
        r#"{"short_code":""}"#,
        r#"{"short_code":null}"#,
        r#"{"short_code":123}"#,
        "not json",
    ] {
        let resp = test::call_service(&app, track_request(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {}", body);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["error"], "short_code is required");
    }

    assert_eq!(storage.total_clicks().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_track_rejects_overlong_short_code() {
    let (_dir, storage, service) = setup().await;
    let app = analytics_app!(service);

    let resp = test::call_service(
        &app,
        track_request(r#"{"short_code":"abcdefghijk"}"#).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["error"], "short_code must be at most 10 characters");
    assert_eq!(storage.total_clicks().await.unwrap(), 0);

    let resp = test::call_service(
        &app,
        track_request(r#"{"short_code":"abcdefghij"}"#).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn test_track_storage_failure_returns_500() {
    let (_dir, storage, service) = setup().await;
    storage.close().await.unwrap();
    let app = analytics_app!(service);

    let resp = test::call_service(&app, track_request(r#"{"short_code":"abc123"}"#).to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Failed to track click");
}

// =============================================================================
// Query
// =============================================================================

#[actix_web::test]
async fn test_unknown_code_has_zero_clicks() {
    let (_dir, _storage, service) = setup().await;
    let app = analytics_app!(service);

    let resp = test::call_service(
        &app,
        TestRequest::get()
            .uri("/api/analytics/unknown-code")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["short_code"], "unknown-code");
    assert_eq!(body["clicks"], 0);
}

#[actix_web::test]
async fn test_all_analytics_sorted_by_clicks_desc() {
    let (_dir, storage, service) = setup().await;
    for (code, n) in [("low", 1), ("high", 3), ("mid", 2)] {
        for _ in 0..n {
            storage.insert_click(code).await.unwrap();
        }
    }
    let app = analytics_app!(service);

    let resp =
        test::call_service(&app, TestRequest::get().uri("/api/analytics").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let items = body.as_array().expect("array response");

    let pairs: Vec<(String, u64)> = items
        .iter()
        .map(|item| {
            (
                item["short_code"].as_str().unwrap().to_string(),
                item["clicks"].as_u64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("high".to_string(), 3),
            ("mid".to_string(), 2),
            ("low".to_string(), 1)
        ]
    );
}

#[actix_web::test]
async fn test_all_analytics_empty_is_empty_array() {
    let (_dir, _storage, service) = setup().await;
    let app = analytics_app!(service);

    let resp =
        test::call_service(&app, TestRequest::get().uri("/api/analytics").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!([]));
}

#[actix_web::test]
async fn test_query_storage_failure_returns_500() {
    let (_dir, storage, service) = setup().await;
    storage.close().await.unwrap();
    let app = analytics_app!(service);

    for uri in ["/api/analytics", "/api/analytics/abc123"] {
        let resp = test::call_service(&app, TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Failed to fetch analytics");
    }
}

#[actix_web::test]
async fn test_unknown_route_is_json_404() {
    let (_dir, _storage, service) = setup().await;
    let app = analytics_app!(service);

    let resp = test::call_service(&app, TestRequest::get().uri("/nope").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}
