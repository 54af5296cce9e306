//! Classification Integration Tests
//!
//! Extension lookup and resource type mapping.

use cloudgallery::{classify, resource_type_for, MediaCategory, ResourceType};

#[test]
fn test_image_extensions() {
    for ext in ["jpg", "jpeg", "png", "gif", "webp"] {
        let name = format!("photo.{}", ext);
        assert_eq!(classify(&name), MediaCategory::Image, "{}", name);
        assert_eq!(resource_type_for(&name), ResourceType::Image, "{}", name);
    }
}

#[test]
fn test_video_extensions() {
    for ext in ["mp4", "mov", "avi", "mkv"] {
        let name = format!("clip.{}", ext);
        assert_eq!(classify(&name), MediaCategory::Video, "{}", name);
        assert_eq!(resource_type_for(&name), ResourceType::Video, "{}", name);
    }
}

#[test]
fn test_audio_uploads_as_video() {
    for ext in ["mp3", "wav", "aac", "flac", "m4a"] {
        let name = format!("track.{}", ext);
        assert_eq!(classify(&name), MediaCategory::Audio, "{}", name);
        assert_eq!(resource_type_for(&name), ResourceType::Video, "{}", name);
    }
}

#[test]
fn test_unknown_and_missing_extensions_are_auto() {
    for name in ["notes.pdf", "archive.tar.gz", "README", "trailing.", "photo.png.bak"] {
        assert_eq!(resource_type_for(name), ResourceType::Auto, "{}", name);
    }
}

#[test]
fn test_case_insensitive() {
    assert_eq!(classify("PHOTO.PNG"), classify("photo.png"));
    assert_eq!(classify("Clip.MoV"), MediaCategory::Video);
    assert_eq!(resource_type_for("SONG.M4A"), ResourceType::Video);
}

#[test]
fn test_directory_dots_do_not_count() {
    assert_eq!(classify("/srv/media.png/raw"), MediaCategory::Unknown);
    assert_eq!(classify("/srv/v1.2/clip.mkv"), MediaCategory::Video);
}
