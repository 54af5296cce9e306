//! Adapter interfaces for the remote media API.
//!
//! The gallery pipeline only talks to [`MediaUploader`]; the Cloudinary
//! client is one implementation and tests substitute their own.

pub mod cloudinary;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::media::ResourceType;

pub use cloudinary::CloudinaryUploader;

/// Descriptor of an uploaded asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedAsset {
    /// Stable handle of the asset
    pub public_id: String,

    /// HTTPS delivery URL
    pub secure_url: String,

    /// Resource type the API settled on (may differ from an `auto` hint)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Stored size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
}

impl UploadedAsset {
    /// Create an asset descriptor with just the required fields
    pub fn new(public_id: impl Into<String>, secure_url: impl Into<String>) -> Self {
        Self {
            public_id: public_id.into(),
            secure_url: secure_url.into(),
            resource_type: None,
            format: None,
            bytes: None,
        }
    }
}

/// Failure of a single upload
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Trait for remote media stores
#[async_trait]
pub trait MediaUploader: Send + Sync {
    /// Human-readable adapter name
    fn name(&self) -> &str;

    /// Upload a local file with a resource type hint
    async fn upload(
        &self,
        path: &Path,
        resource_type: ResourceType,
    ) -> Result<UploadedAsset, UploadError>;
}
