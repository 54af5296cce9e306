//! Single-file upload step.
//!
//! Wraps a [`MediaUploader`] so that nothing fails past this point: a
//! missing file or any remote error becomes [`UploadOutcome::Failure`].

use std::path::Path;

use tracing::{error, info, instrument};

use crate::adapters::{MediaUploader, UploadedAsset};
use crate::media::MediaFile;

/// Result of one upload attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Success(UploadedAsset),
    Failure { reason: String },
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Success(_))
    }

    /// The uploaded asset, if any
    pub fn asset(&self) -> Option<&UploadedAsset> {
        match self {
            UploadOutcome::Success(asset) => Some(asset),
            UploadOutcome::Failure { .. } => None,
        }
    }

    pub fn into_asset(self) -> Option<UploadedAsset> {
        match self {
            UploadOutcome::Success(asset) => Some(asset),
            UploadOutcome::Failure { .. } => None,
        }
    }
}

/// Upload one local file, classifying it by extension
///
/// The existence check runs before the uploader is touched, so a missing
/// file never costs a remote call.
#[instrument(skip(uploader, path), fields(uploader = uploader.name(), path = %path.display()))]
pub async fn upload_file<U>(uploader: &U, path: &Path) -> UploadOutcome
where
    U: MediaUploader + ?Sized,
{
    if !path.exists() {
        error!("File not found");
        return UploadOutcome::Failure {
            reason: format!("file not found: {}", path.display()),
        };
    }

    let media = MediaFile::new(path);
    info!(
        category = %media.category(),
        resource_type = %media.resource_type(),
        "Uploading"
    );

    match uploader.upload(media.path(), media.resource_type()).await {
        Ok(asset) => {
            println!("Upload successful!");
            println!("  Public ID: {}", asset.public_id);
            println!("  URL:       {}", asset.secure_url);
            UploadOutcome::Success(asset)
        }
        Err(e) => {
            error!(error = %e, "Upload failed");
            UploadOutcome::Failure {
                reason: e.to_string(),
            }
        }
    }
}
