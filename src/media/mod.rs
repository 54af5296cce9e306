//! Media classification by file extension.
//!
//! The category picks the resource type hint sent with an upload. Cloudinary
//! has no audio resource type, so audio files travel as `video`.

use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "aac", "flac", "m4a"];

/// Coarse media category derived from a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCategory {
    Image,
    Video,
    Audio,
    Unknown,
}

impl MediaCategory {
    /// Resource type hint for the upload API
    pub fn resource_type(self) -> ResourceType {
        match self {
            MediaCategory::Image => ResourceType::Image,
            // Audio is uploaded as video: the API has no audio resource type
            MediaCategory::Video | MediaCategory::Audio => ResourceType::Video,
            MediaCategory::Unknown => ResourceType::Auto,
        }
    }
}

impl std::fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaCategory::Image => write!(f, "image"),
            MediaCategory::Video => write!(f, "video"),
            MediaCategory::Audio => write!(f, "audio"),
            MediaCategory::Unknown => write!(f, "unknown"),
        }
    }
}

/// Resource type understood by the upload API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Image,
    Video,
    /// Let the remote API detect the type
    Auto,
}

impl ResourceType {
    /// Path segment used in the upload endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Image => "image",
            ResourceType::Video => "video",
            ResourceType::Auto => "auto",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extension of the file name, lowercased
///
/// Everything after the last `.` of the final path component.
fn extension(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Classify a path by its extension. Never fails.
pub fn classify(path: impl AsRef<Path>) -> MediaCategory {
    let Some(ext) = extension(path.as_ref()) else {
        return MediaCategory::Unknown;
    };
    let ext = ext.as_str();

    if IMAGE_EXTENSIONS.contains(&ext) {
        MediaCategory::Image
    } else if VIDEO_EXTENSIONS.contains(&ext) {
        MediaCategory::Video
    } else if AUDIO_EXTENSIONS.contains(&ext) {
        MediaCategory::Audio
    } else {
        MediaCategory::Unknown
    }
}

/// Resource type hint for a path
pub fn resource_type_for(path: impl AsRef<Path>) -> ResourceType {
    classify(path).resource_type()
}

/// A local file together with its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    path: PathBuf,
    category: MediaCategory,
}

impl MediaFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let category = classify(&path);
        Self { path, category }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn category(&self) -> MediaCategory {
        self.category
    }

    pub fn resource_type(&self) -> ResourceType {
        self.category.resource_type()
    }

    /// File name sent with the upload, `upload` when the path has none
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_uses_last_dot() {
        assert_eq!(extension(Path::new("clip.final.MP4")), Some("mp4".to_string()));
        assert_eq!(extension(Path::new("dir.with.dots/photo")), None);
        assert_eq!(extension(Path::new(".png")), Some("png".to_string()));
        assert_eq!(extension(Path::new("trailing.")), None);
    }

    #[test]
    fn test_audio_travels_as_video() {
        assert_eq!(classify("song.flac"), MediaCategory::Audio);
        assert_eq!(resource_type_for("song.flac"), ResourceType::Video);
    }

    #[test]
    fn test_media_file_category_fixed_at_creation() {
        let file = MediaFile::new("/tmp/photos/cat.WebP");
        assert_eq!(file.category(), MediaCategory::Image);
        assert_eq!(file.resource_type(), ResourceType::Image);
        assert_eq!(file.file_name(), "cat.WebP");
    }

    #[test]
    fn test_file_name_fallback() {
        assert_eq!(MediaFile::new("/").file_name(), "upload");
        assert_eq!(MediaFile::new("clips/intro.mkv").file_name(), "intro.mkv");
    }

    #[test]
    fn test_resource_type_display() {
        assert_eq!(ResourceType::Auto.to_string(), "auto");
        assert_eq!(MediaCategory::Unknown.to_string(), "unknown");
    }
}
