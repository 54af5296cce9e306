//! Gallery pipeline: upload an image and a video, then publish the page.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{info, warn};

use crate::adapters::{MediaUploader, UploadedAsset};
use crate::config::DEFAULT_TITLE;
use crate::page;

use super::upload::{upload_file, UploadOutcome};

/// How a gallery run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryOutcome {
    /// Both uploads succeeded and the page was written
    Written {
        path: PathBuf,
        image: UploadedAsset,
        video: UploadedAsset,
    },
    /// At least one upload failed; the output path was not touched
    Skipped {
        image: UploadOutcome,
        video: UploadOutcome,
    },
}

impl GalleryOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, GalleryOutcome::Written { .. })
    }
}

/// Runs the upload-then-render sequence against one uploader
pub struct Gallery<'a, U: MediaUploader + ?Sized> {
    uploader: &'a U,
    output: PathBuf,
    title: String,
}

impl<'a, U: MediaUploader + ?Sized> Gallery<'a, U> {
    /// Create a gallery writing to `output`
    pub fn new(uploader: &'a U, output: impl Into<PathBuf>) -> Self {
        Self {
            uploader,
            output: output.into(),
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Set the page title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Upload both files one after the other and write the page if both succeeded
    ///
    /// Upload failures are reported through [`GalleryOutcome::Skipped`]; the
    /// error arm is reserved for failing to write the page.
    pub async fn run(&self, image_path: &Path, video_path: &Path) -> Result<GalleryOutcome> {
        eprintln!("[IMAGE] Uploading {}...", image_path.display());
        let image = upload_file(self.uploader, image_path).await;

        eprintln!("\n[VIDEO] Uploading {}...", video_path.display());
        let video = upload_file(self.uploader, video_path).await;

        match (image, video) {
            (UploadOutcome::Success(image), UploadOutcome::Success(video)) => {
                let path = page::write_page(
                    &self.output,
                    &self.title,
                    &image.secure_url,
                    &video.secure_url,
                )?;
                info!(path = %path.display(), "Gallery published");
                Ok(GalleryOutcome::Written { path, image, video })
            }
            (image, video) => {
                warn!("Could not generate HTML - one or more uploads failed");
                Ok(GalleryOutcome::Skipped { image, video })
            }
        }
    }
}
