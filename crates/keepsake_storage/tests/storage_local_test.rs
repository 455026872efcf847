//! Tests for buffer uploads and removal on the local storage provider.

use chrono::{TimeZone, Utc};
use keepsake_storage::{
    FileUpload, FixedClock, KeepsakeErrorKind, LocalStorage, StorageConfig, StorageErrorKind,
    UploadProvider,
};
use std::sync::Arc;
use tempfile::TempDir;

const BASE_URL: &str = "https://app.example.com";

fn storage_in(temp_dir: &TempDir) -> LocalStorage {
    LocalStorage::new(StorageConfig::new(temp_dir.path(), BASE_URL)).unwrap()
}

fn storage_on_may_third(temp_dir: &TempDir) -> LocalStorage {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 5, 3, 8, 30, 0).unwrap());
    LocalStorage::with_clock(StorageConfig::new(temp_dir.path(), BASE_URL), Arc::new(clock))
        .unwrap()
}

#[tokio::test]
async fn test_upload_file_descriptor() {
    let temp_dir = TempDir::new().unwrap();
    let storage = storage_in(&temp_dir);

    let file = FileUpload::new(b"jpeg bytes".to_vec(), "photo.JPG", "image/jpeg");
    let stored = storage.upload_file(&file).await.unwrap();

    assert!(stored.filename.ends_with(".JPG"));
    assert_eq!(stored.filename.len(), 32 + ".JPG".len());
    assert_eq!(stored.mimetype, "image/jpeg");
    assert_eq!(stored.original_name, "photo.JPG");
    assert!(stored.path.starts_with(&format!("{}/uploads/", BASE_URL)));
    assert!(stored.path.ends_with(&stored.filename));

    let on_disk = tokio::fs::read(&stored.file_path).await.unwrap();
    assert_eq!(on_disk, b"jpeg bytes");
}

#[tokio::test]
async fn test_upload_file_partitioned_by_date() {
    let temp_dir = TempDir::new().unwrap();
    let storage = storage_on_may_third(&temp_dir);

    let file = FileUpload::new(b"png".to_vec(), "diagram.png", "image/png");
    let stored = storage.upload_file(&file).await.unwrap();

    let expected_dir = temp_dir.path().join("2024").join("05").join("03");
    assert_eq!(stored.file_path, expected_dir.join(&stored.filename));

    let pattern = regex::Regex::new(&format!(
        r"^{}/uploads/2024/05/03/[0-9a-f]{{32}}\.png$",
        regex::escape(BASE_URL)
    ))
    .unwrap();
    assert!(pattern.is_match(&stored.path), "unexpected path {}", stored.path);
}

#[tokio::test]
async fn test_upload_without_extension() {
    let temp_dir = TempDir::new().unwrap();
    let storage = storage_in(&temp_dir);

    let file = FileUpload::new(b"plain".to_vec(), "README", "text/plain");
    let stored = storage.upload_file(&file).await.unwrap();

    assert_eq!(stored.filename.len(), 32);
    assert!(!stored.filename.contains('.'));
}

#[tokio::test]
async fn test_same_day_uploads_reuse_partition() {
    let temp_dir = TempDir::new().unwrap();
    let storage = storage_on_may_third(&temp_dir);

    let file = FileUpload::new(b"a".to_vec(), "a.gif", "image/gif");
    let first = storage.upload_file(&file).await.unwrap();
    let second = storage.upload_file(&file).await.unwrap();

    assert_ne!(first.filename, second.filename);
    assert_eq!(first.file_path.parent(), second.file_path.parent());
    assert!(first.file_path.exists());
    assert!(second.file_path.exists());
}

#[tokio::test]
async fn test_upload_file_reports_disk_failure() {
    let temp_dir = TempDir::new().unwrap();
    // A regular file where the root directory should be.
    let blocked_root = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocked_root, b"occupied").unwrap();

    let storage = LocalStorage::new(StorageConfig::new(&blocked_root, BASE_URL)).unwrap();
    let file = FileUpload::new(b"x".to_vec(), "x.png", "image/png");

    let err = storage.upload_file(&file).await.unwrap_err();
    match err.kind() {
        KeepsakeErrorKind::Storage(storage_err) => {
            assert!(matches!(storage_err.kind, StorageErrorKind::DirectoryCreation(_)));
        }
        other => panic!("expected storage error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_remove_file() {
    let temp_dir = TempDir::new().unwrap();
    let storage = storage_in(&temp_dir);

    let file = FileUpload::new(b"delete me".to_vec(), "gone.webp", "image/webp");
    let stored = storage.upload_file(&file).await.unwrap();
    assert!(stored.file_path.exists());

    storage
        .remove_file(&stored.file_path.to_string_lossy())
        .await
        .unwrap();
    assert!(!stored.file_path.exists());

    // The day partition stays behind.
    assert!(stored.file_path.parent().unwrap().exists());
}

#[tokio::test]
async fn test_remove_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let storage = storage_in(&temp_dir);

    let missing = temp_dir.path().join("2024/05/03/nothing.png");
    let err = storage
        .remove_file(&missing.to_string_lossy())
        .await
        .unwrap_err();

    match err.kind() {
        KeepsakeErrorKind::Storage(storage_err) => {
            assert!(matches!(storage_err.kind, StorageErrorKind::NotFound(_)));
        }
        other => panic!("expected storage error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_uploaded_file_serialization() {
    let temp_dir = TempDir::new().unwrap();
    let storage = storage_in(&temp_dir);

    let file = FileUpload::new(b"{}".to_vec(), "data.json", "application/json");
    let stored = storage.upload_file(&file).await.unwrap();

    let json = serde_json::to_value(&stored).unwrap();
    assert_eq!(json["filename"], stored.filename.as_str());
    assert_eq!(json["mimetype"], "application/json");
    assert_eq!(json["originalname"], "data.json");
    assert_eq!(json["path"], stored.path.as_str());
}
