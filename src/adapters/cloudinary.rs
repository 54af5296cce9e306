//! Cloudinary upload API adapter.
//!
//! Signed multipart uploads to `/v1_1/<cloud>/<resource_type>/upload`.
//! Requests are signed with SHA-256 over the sorted parameters followed by
//! the API secret.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use super::{MediaUploader, UploadError, UploadedAsset};
use crate::config::{CloudinaryCredentials, UploadSettings};
use crate::media::{MediaFile, ResourceType};

/// Cloudinary API client
pub struct CloudinaryUploader {
    credentials: CloudinaryCredentials,
    /// API origin, without trailing slash
    api_base: String,
    /// Remote folder for uploaded assets
    folder: Option<String>,
    client: reqwest::Client,
}

/// Error body returned by the API
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl CloudinaryUploader {
    /// Create a new uploader
    pub fn new(credentials: CloudinaryCredentials, settings: &UploadSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            credentials,
            api_base: settings.api_base.trim_end_matches('/').to_string(),
            folder: settings.folder.clone(),
            client,
        })
    }

    /// Build upload URL
    fn upload_url(&self, resource_type: ResourceType) -> String {
        format!(
            "{}/v1_1/{}/{}/upload",
            self.api_base, self.credentials.cloud_name, resource_type
        )
    }

    /// Parameters covered by the signature
    fn signed_params(&self, timestamp: i64) -> BTreeMap<&'static str, String> {
        let mut params = BTreeMap::new();
        params.insert("timestamp", timestamp.to_string());
        if let Some(ref folder) = self.folder {
            params.insert("folder", folder.clone());
        }
        params
    }
}

/// Sign parameters: sha256 hex of `k1=v1&k2=v2...` (keys sorted) + secret
pub(crate) fn sign(params: &BTreeMap<&str, String>, api_secret: &str) -> String {
    let to_sign = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Turn an HTTP status and body into an asset or an error
pub(crate) fn parse_response(status: u16, body: &str) -> Result<UploadedAsset, UploadError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| format!("unexpected HTTP status {}", status));
        return Err(UploadError::Api { status, message });
    }

    let asset: UploadedAsset = serde_json::from_str(body)
        .map_err(|e| UploadError::MalformedResponse(e.to_string()))?;

    if asset.public_id.is_empty() || asset.secure_url.is_empty() {
        return Err(UploadError::MalformedResponse(
            "response is missing public_id or secure_url".to_string(),
        ));
    }

    Ok(asset)
}

#[async_trait]
impl MediaUploader for CloudinaryUploader {
    fn name(&self) -> &str {
        "cloudinary"
    }

    async fn upload(
        &self,
        path: &Path,
        resource_type: ResourceType,
    ) -> Result<UploadedAsset, UploadError> {
        let file_bytes = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                UploadError::FileNotFound(path.to_path_buf())
            } else {
                UploadError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let file_name = MediaFile::new(path).file_name();

        let timestamp = chrono::Utc::now().timestamp();
        let params = self.signed_params(timestamp);
        let signature = sign(&params, &self.credentials.api_secret);

        // Build multipart form
        let mut form = Form::new()
            .part("file", Part::bytes(file_bytes).file_name(file_name))
            .text("api_key", self.credentials.api_key.clone())
            .text("signature_algorithm", "sha256")
            .text("signature", signature);
        for (key, value) in params {
            form = form.text(key, value);
        }

        let url = self.upload_url(resource_type);
        tracing::debug!(%url, resource_type = %resource_type, "Sending upload request");

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        parse_response(status, &body)
    }
}
