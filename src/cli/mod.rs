//! Command-line interface for cloudgallery.
//!
//! Provides commands for publishing a gallery page, uploading single files,
//! classifying files, rendering a page from known URLs, and showing the
//! resolved configuration.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::adapters::CloudinaryUploader;
use crate::config::{self, CloudinaryCredentials, ResolvedConfig};
use crate::core::{upload_file, Gallery, GalleryOutcome};
use crate::media::MediaFile;
use crate::page;

/// cloudgallery - Upload media to Cloudinary and publish a gallery page
#[derive(Parser, Debug)]
#[command(name = "cloudgallery")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload an image and a video, then write the gallery page
    Gallery {
        /// Image file to upload
        image: PathBuf,

        /// Video file to upload
        video: PathBuf,

        /// Output HTML file (default: index.html or the configured path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Upload a single file
    Upload {
        /// File to upload
        path: PathBuf,
    },

    /// Show the category and resource type for files (no upload)
    Classify {
        /// Files to classify
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Write the gallery page from existing URLs (no upload)
    Render {
        /// Image URL
        image_url: String,

        /// Video URL
        video_url: String,

        /// Output HTML file (default: index.html or the configured path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Gallery {
                image,
                video,
                output,
            } => {
                run_gallery(&image, &video, output).await
            }
            Commands::Upload { path } => {
                upload_single(&path).await
            }
            Commands::Classify { paths } => {
                classify_paths(&paths);
                Ok(())
            }
            Commands::Render {
                image_url,
                video_url,
                output,
            } => {
                render_only(&image_url, &video_url, output)
            }
            Commands::Config => {
                show_config()
            }
        }
    }
}

/// Build the uploader from the environment and resolved config
fn build_uploader(cfg: &ResolvedConfig) -> Result<CloudinaryUploader> {
    let credentials = CloudinaryCredentials::from_env()?;
    CloudinaryUploader::new(credentials, &cfg.upload)
}

/// Upload both files and publish the page
async fn run_gallery(image: &Path, video: &Path, output: Option<PathBuf>) -> Result<()> {
    let cfg = config::load_config()?;
    let uploader = build_uploader(&cfg)?;
    let output = output.unwrap_or_else(|| cfg.output.clone());

    let gallery = Gallery::new(&uploader, output).with_title(cfg.title.clone());

    let outcome = gallery.run(image, video).await?;
    if let Some(line) = completion_line(&outcome) {
        eprintln!("\n{}", line);
    }

    Ok(())
}

/// Final console line for a gallery run
///
/// A skipped page has already been reported by the pipeline's `warn!` and
/// each failed upload by its `error!`, so it gets no extra line.
fn completion_line(outcome: &GalleryOutcome) -> Option<String> {
    match outcome {
        GalleryOutcome::Written { path, .. } => Some(format!(
            "[DONE] {} generated! Open it in your browser to view.",
            path.display()
        )),
        GalleryOutcome::Skipped { .. } => None,
    }
}

/// Upload one file and report its descriptor
async fn upload_single(path: &Path) -> Result<()> {
    let cfg = config::load_config()?;
    let uploader = build_uploader(&cfg)?;

    // Failures are logged by upload_file itself
    eprintln!("Uploading {}...", path.display());
    upload_file(&uploader, path).await;

    Ok(())
}

fn classify_paths(paths: &[PathBuf]) {
    println!("{:<10} {:<10} {}", "CATEGORY", "UPLOAD AS", "PATH");
    println!("{}", "-".repeat(60));

    for path in paths {
        let media = MediaFile::new(path);
        println!(
            "{:<10} {:<10} {}",
            media.category().to_string(),
            media.resource_type().to_string(),
            path.display()
        );
    }
}

fn render_only(image_url: &str, video_url: &str, output: Option<PathBuf>) -> Result<()> {
    let cfg = config::load_config()?;
    let output = output.unwrap_or_else(|| cfg.output.clone());

    let path = page::write_page(&output, &cfg.title, image_url, video_url)?;
    eprintln!("[DONE] {} generated!", path.display());

    Ok(())
}

fn show_config() -> Result<()> {
    let cfg = config::load_config()?;

    println!("cloudgallery configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Upload:");
    println!("  API base: {}", cfg.upload.api_base);
    println!("  Folder:   {}", cfg.upload.folder.as_deref().unwrap_or("(root)"));
    println!("  Timeout:  {}s", cfg.upload.timeout.as_secs());
    println!();
    println!("Page:");
    println!("  Output: {}", cfg.output.display());
    println!("  Title:  {}", cfg.title);
    println!();
    println!("Credentials:");
    match CloudinaryCredentials::from_env() {
        Ok(creds) => {
            println!("  Cloud name: {}", creds.cloud_name);
            println!("  API key:    {}", creds.api_key);
            println!("  API secret: <redacted>");
        }
        Err(e) => println!("  {}", e),
    }

    Ok(())
}
