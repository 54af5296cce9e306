//! Static gallery page.
//!
//! A fixed HTML/CSS layout with one image and one video. URLs are
//! interpolated as-is; they come from the upload API response. The title
//! comes from configuration and is escaped.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::config::DEFAULT_TITLE;

const STYLE: &str = r#"        body {
            font-family: Arial, sans-serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            background-color: #f5f5f5;
            text-align: center;
        }
        h1 {
            color: #3448c5;
        }
        h2 {
            color: #555;
            margin-top: 30px;
        }
        img {
            border-radius: 10px;
            box-shadow: 0 4px 8px rgba(0,0,0,0.2);
        }
        video {
            border-radius: 10px;
            box-shadow: 0 4px 8px rgba(0,0,0,0.2);
            margin-top: 10px;
        }"#;

/// Render the page with the default title
pub fn render_page(image_url: &str, video_url: &str) -> String {
    render_page_titled(DEFAULT_TITLE, image_url, video_url)
}

/// Escape text for use in HTML content
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Render the page with a custom title and heading
pub fn render_page_titled(title: &str, image_url: &str, video_url: &str) -> String {
    let title = html_escape(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{STYLE}
    </style>
</head>
<body>
    <h1>{title}</h1>

    <h2>Uploaded Image</h2>
    <img width="400" src="{image_url}" alt="Uploaded Image">

    <h2>Uploaded Video</h2>
    <video width="500" controls autoplay muted>
        <source src="{video_url}" type="video/mp4">
        Your browser does not support the video tag.
    </video>
</body>
</html>
"#
    )
}

/// Render and write the page, replacing any existing file
///
/// The content is written to a temporary file next to `output` and then
/// renamed over it.
pub fn write_page(
    output: &Path,
    title: &str,
    image_url: &str,
    video_url: &str,
) -> Result<PathBuf> {
    let html = render_page_titled(title, image_url, video_url);

    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let mut temp = NamedTempFile::new_in(&dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    temp.write_all(html.as_bytes())
        .context("Failed to write page contents")?;
    temp.persist(output)
        .with_context(|| format!("Failed to write page: {}", output.display()))?;

    tracing::info!(path = %output.display(), "Gallery page written");
    Ok(output.to_path_buf())
}
