//! Upload Step Integration Tests
//!
//! The upload step must never fail past its boundary.

mod common;

use std::path::Path;

use cloudgallery::{upload_file, ResourceType, UploadError, UploadOutcome, UploadedAsset};
use common::{touch, MockUploader};
use tempfile::TempDir;

#[tokio::test]
async fn test_missing_file_makes_no_remote_call() {
    let uploader = MockUploader::succeeding(vec![UploadedAsset::new("abc", "https://x/abc.png")]);

    let outcome = upload_file(&uploader, Path::new("/no/such/dir/image.png")).await;

    assert!(matches!(outcome, UploadOutcome::Failure { .. }));
    assert_eq!(uploader.calls(), 0);
}

#[tokio::test]
async fn test_success_returns_exact_pair() {
    let temp = TempDir::new().unwrap();
    let image = touch(temp.path(), "image.png");
    let uploader = MockUploader::succeeding(vec![UploadedAsset::new("abc", "https://x/abc.png")]);

    let outcome = upload_file(&uploader, &image).await;

    let asset = outcome.into_asset().expect("upload should succeed");
    assert_eq!(asset.public_id, "abc");
    assert_eq!(asset.secure_url, "https://x/abc.png");
    assert_eq!(uploader.calls(), 1);
}

#[tokio::test]
async fn test_resource_type_hint_follows_extension() {
    let temp = TempDir::new().unwrap();
    let song = touch(temp.path(), "song.MP3");
    let doc = touch(temp.path(), "notes.pdf");
    let uploader = MockUploader::succeeding(vec![
        UploadedAsset::new("song", "https://x/song.mp3"),
        UploadedAsset::new("notes", "https://x/notes.pdf"),
    ]);

    upload_file(&uploader, &song).await;
    upload_file(&uploader, &doc).await;

    let seen = uploader.seen();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], (song, ResourceType::Video));
    assert_eq!(seen[1], (doc, ResourceType::Auto));
}

#[tokio::test]
async fn test_remote_failure_becomes_failure_outcome() {
    let temp = TempDir::new().unwrap();
    let image = touch(temp.path(), "image.png");
    let uploader = MockUploader::new(vec![Err(UploadError::Api {
        status: 420,
        message: "Rate limit exceeded".to_string(),
    })]);

    let outcome = upload_file(&uploader, &image).await;

    match outcome {
        UploadOutcome::Failure { reason } => {
            assert!(reason.contains("Rate limit exceeded"));
            assert!(reason.contains("420"));
        }
        UploadOutcome::Success(asset) => panic!("Expected failure, got {:?}", asset),
    }
    assert_eq!(uploader.calls(), 1);
}

#[test]
fn test_malformed_response_becomes_failure_outcome() {
    let temp = TempDir::new().unwrap();
    let image = touch(temp.path(), "image.png");
    let uploader = MockUploader::new(vec![Err(UploadError::MalformedResponse(
        "missing secure_url".to_string(),
    ))]);

    let outcome = tokio_test::block_on(upload_file(&uploader, &image));

    assert!(!outcome.is_success());
}
