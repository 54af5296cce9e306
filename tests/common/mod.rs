//! Shared test doubles.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use cloudgallery::{MediaUploader, ResourceType, UploadError, UploadedAsset};

/// Uploader that replays scripted responses and records every call
pub struct MockUploader {
    responses: Mutex<VecDeque<Result<UploadedAsset, UploadError>>>,
    calls: AtomicUsize,
    seen: Mutex<Vec<(PathBuf, ResourceType)>>,
}

impl MockUploader {
    pub fn new(responses: Vec<Result<UploadedAsset, UploadError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding(assets: Vec<UploadedAsset>) -> Self {
        Self::new(assets.into_iter().map(Ok).collect())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<(PathBuf, ResourceType)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaUploader for MockUploader {
    fn name(&self) -> &str {
        "mock"
    }

    async fn upload(
        &self,
        path: &Path,
        resource_type: ResourceType,
    ) -> Result<UploadedAsset, UploadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((path.to_path_buf(), resource_type));

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(UploadError::MalformedResponse(
                    "no scripted response".to_string(),
                ))
            })
    }
}

/// Create an empty file with the given name inside `dir`
pub fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"\x00media").unwrap();
    path
}
