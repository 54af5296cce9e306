//! cloudgallery - Upload media to Cloudinary and publish a gallery page
//!
//! Uploads an image and a video to the Cloudinary upload API and writes a
//! static HTML page embedding the returned secure URLs.
//!
//! # Flow
//!
//! - Each file is classified by extension into a resource type hint
//! - Files are uploaded one after the other
//! - The page is written only if both uploads succeeded
//!
//! # Modules
//!
//! - `adapters`: Remote media API integrations (Cloudinary)
//! - `core`: Upload step and gallery pipeline
//! - `media`: Extension-based classification
//! - `page`: HTML rendering and output
//! - `config`: Credentials and settings
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Upload both files and write index.html
//! cloudgallery gallery photo.png clip.mp4
//!
//! # Check how files would be uploaded
//! cloudgallery classify song.m4a notes.pdf
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod media;
pub mod page;

// Re-export main types at crate root for convenience
pub use adapters::{CloudinaryUploader, MediaUploader, UploadError, UploadedAsset};
pub use config::{CloudinaryCredentials, ResolvedConfig};
pub use crate::core::{upload_file, Gallery, GalleryOutcome, UploadOutcome};
pub use media::{classify, resource_type_for, MediaCategory, MediaFile, ResourceType};
