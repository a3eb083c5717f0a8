//! Link service API 集成测试
//!
//! 覆盖 shorten、list、redirect 以及重定向时的点击上报。

use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use serde_json::Value;
use tempfile::TempDir;

use linktrack::api::configure_links;
use linktrack::config::DatabaseConfig;
use linktrack::services::{ClickNotifier, LinkService};
use linktrack::storage::SeaOrmStorage;

/// 记录所有上报的短码
#[derive(Default)]
struct RecordingNotifier {
    calls: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ClickNotifier for RecordingNotifier {
    fn notify(&self, short_code: &str) {
        self.calls.lock().unwrap().push(short_code.to_string());
    }
}

async fn setup() -> (
    TempDir,
    Arc<SeaOrmStorage>,
    Arc<LinkService>,
    Arc<RecordingNotifier>,
) {
    let temp_dir = TempDir::new().expect("创建临时目录失败");
    let db_path = temp_dir.path().join("link_api.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let storage = Arc::new(
        SeaOrmStorage::new(&db_url, "sqlite", &DatabaseConfig::from_url(&db_url))
            .await
            .expect("创建存储失败"),
    );
    let notifier = Arc::new(RecordingNotifier::default());
    let service = Arc::new(LinkService::new(storage.clone(), notifier.clone()));
    (temp_dir, storage, service, notifier)
}

macro_rules! links_app {
    ($service:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($service.clone()))
                .configure(configure_links),
        )
        .await
    };
}

fn shorten_request(body: &str) -> TestRequest {
    TestRequest::post()
        .uri("/api/shorten")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(body.to_string())
}

#[actix_web::test]
async fn test_health_reports_ok() {
    let (_dir, _storage, service, _notifier) = setup().await;
    let app = links_app!(service);

    let resp = test::call_service(&app, TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[actix_web::test]
async fn test_shorten_same_url_returns_same_code() {
    let (_dir, _storage, service, _notifier) = setup().await;
    let app = links_app!(service);

    let body = r#"{"url":"https://example.com/some/long/path"}"#;
    let first: Value = test::read_body_json(
        test::call_service(&app, shorten_request(body).to_request()).await,
    )
    .await;
    let second: Value = test::read_body_json(
        test::call_service(&app, shorten_request(body).to_request()).await,
    )
    .await;

    let code = first["short_code"].as_str().expect("short_code");
    assert_eq!(code.len(), 6);
    assert_eq!(first["short_url"], format!("/{}", code));
    assert_eq!(first, second);
}

#[actix_web::test]
async fn test_shorten_rejects_missing_and_invalid_urls() {
    let (_dir, storage, service, _notifier) = setup().await;
    let app = links_app!(service);

    for body in ["", "{}", r#"{"url":""}"#, r#"{"url":"   "}"#] {
        let resp = test::call_service(&app, shorten_request(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {:?}", body);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["error"], "URL is required");
    }

    for body in [r#"{"url":"not a url"}"#, r#"{"url":"ftp://example.com"}"#] {
        let resp = test::call_service(&app, shorten_request(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {:?}", body);
        let json: Value = test::read_body_json(resp).await;
        assert!(json["error"].is_string());
    }

    assert!(storage.list_links().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_list_returns_newest_first() {
    let (_dir, _storage, service, _notifier) = setup().await;
    let app = links_app!(service);

    for url in ["https://a.example.com", "https://b.example.com"] {
        let resp = test::call_service(
            &app,
            shorten_request(&format!(r#"{{"url":"{}"}}"#, url)).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = test::call_service(&app, TestRequest::get().uri("/api/links").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let links = body.as_array().expect("array response");
    assert_eq!(links.len(), 2);
    assert!(
        links[0]["original_url"]
            .as_str()
            .unwrap()
            .starts_with("https://b.example.com")
    );
    assert!(
        links[1]["original_url"]
            .as_str()
            .unwrap()
            .starts_with("https://a.example.com")
    );
    let created_at = links[0]["created_at"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[actix_web::test]
async fn test_redirect_unknown_code_is_404() {
    let (_dir, _storage, service, notifier) = setup().await;
    let app = links_app!(service);

    let resp = test::call_service(&app, TestRequest::get().uri("/zzzzzz").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "URL not found");
    assert!(notifier.calls().is_empty());
}

#[actix_web::test]
async fn test_redirect_known_code_notifies_once() {
    let (_dir, _storage, service, notifier) = setup().await;
    let app = links_app!(service);

    let created: Value = test::read_body_json(
        test::call_service(
            &app,
            shorten_request(r#"{"url":"https://example.com/target"}"#).to_request(),
        )
        .await,
    )
    .await;
    let code = created["short_code"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        TestRequest::get().uri(&format!("/{}", code)).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = resp.headers().get("Location").unwrap().to_str().unwrap();
    assert!(location.starts_with("https://example.com/target"));
    assert_eq!(notifier.calls(), vec![code]);
}
