//! Core upload and publishing logic.
//!
//! This module contains:
//! - Upload: single-file upload that never fails past its boundary
//! - Gallery: the two-upload, one-page pipeline

pub mod gallery;
pub mod upload;

// Re-export commonly used types
pub use gallery::{Gallery, GalleryOutcome};
pub use upload::{upload_file, UploadOutcome};
