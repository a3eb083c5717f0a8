//! LinkService 测试

use std::sync::Arc;

use tempfile::TempDir;

use linktrack::config::DatabaseConfig;
use linktrack::errors::LinktrackError;
use linktrack::services::{LinkService, NoopNotifier};
use linktrack::storage::SeaOrmStorage;
use linktrack::utils::generate_short_code;

async fn setup() -> (TempDir, Arc<SeaOrmStorage>, LinkService) {
    let temp_dir = TempDir::new().expect("创建临时目录失败");
    let db_url = format!(
        "sqlite://{}?mode=rwc",
        temp_dir.path().join("link_service.db").display()
    );
    let storage = Arc::new(
        SeaOrmStorage::new(&db_url, "sqlite", &DatabaseConfig::from_url(&db_url))
            .await
            .expect("创建存储失败"),
    );
    let service = LinkService::new(storage.clone(), Arc::new(NoopNotifier));
    (temp_dir, storage, service)
}

#[tokio::test]
async fn test_shorten_uses_url_hash() {
    let (_dir, _storage, service) = setup().await;
    let url = "https://example.com/hash";

    let link = service.shorten(Some(url)).await.unwrap();
    assert_eq!(link.short_code, generate_short_code(url, 0));
    assert_eq!(link.original_url, url);
}

#[tokio::test]
async fn test_shorten_trims_and_dedups() {
    let (_dir, storage, service) = setup().await;

    let first = service.shorten(Some("https://example.com")).await.unwrap();
    let second = service
        .shorten(Some("  https://example.com  "))
        .await
        .unwrap();
    assert_eq!(first.short_code, second.short_code);
    assert_eq!(storage.list_links().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_collision_reseeds() {
    let (_dir, storage, service) = setup().await;
    let url = "https://example.com/wanted";

    // 先让另一个 URL 占用 seed 0 的短码
    let taken = generate_short_code(url, 0);
    storage
        .insert_link(&taken, "https://squatter.example.com")
        .await
        .unwrap();

    let link = service.shorten(Some(url)).await.unwrap();
    assert_ne!(link.short_code, taken);
    assert_eq!(link.short_code, generate_short_code(url, 1));
}

#[tokio::test]
async fn test_shorten_validation_errors() {
    let (_dir, _storage, service) = setup().await;

    let err = service.shorten(None).await.unwrap_err();
    assert!(matches!(err, LinktrackError::Validation(_)));
    assert_eq!(err.message(), "URL is required");

    let err = service
        .shorten(Some("javascript:alert(1)"))
        .await
        .unwrap_err();
    assert!(matches!(err, LinktrackError::Validation(_)));
}

#[tokio::test]
async fn test_resolve_unknown_is_not_found() {
    let (_dir, _storage, service) = setup().await;
    let err = service.resolve("nope00").await.unwrap_err();
    assert!(matches!(err, LinktrackError::NotFound(_)));
    assert_eq!(err.message(), "URL not found");
}
