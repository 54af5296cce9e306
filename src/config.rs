//! Configuration for cloudgallery.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (CLOUDINARY_*, CLOUDGALLERY_API_BASE, CLOUDGALLERY_OUTPUT)
//! 2. `.env` file (loaded by the binary before anything reads the environment)
//! 3. Config file (.cloudgallery/config.yaml)
//! 4. Defaults
//!
//! Config file discovery:
//! - Searches current directory and parents for .cloudgallery/config.yaml
//! - Falls back to the user config dir (~/.config/cloudgallery/config.yaml)
//! - Paths in config file are relative to the project root (parent of .cloudgallery/)
//!
//! Credentials are never read from the config file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com";
pub const DEFAULT_OUTPUT: &str = "index.html";
pub const DEFAULT_TITLE: &str = "Cloudinary Media Gallery";
const DEFAULT_TIMEOUT_SECONDS: u64 = 120;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub upload: UploadSection,
    #[serde(default)]
    pub page: PageSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadSection {
    /// API origin, without the /v1_1 prefix
    pub api_base: Option<String>,
    /// Remote folder assets are placed in
    pub folder: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageSection {
    /// Output HTML path (relative to the project root)
    pub output: Option<String>,
    pub title: Option<String>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub upload: UploadSettings,
    /// Where the gallery page is written
    pub output: PathBuf,
    /// Page title and heading
    pub title: String,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub api_base: String,
    pub folder: Option<String>,
    pub timeout: Duration,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            folder: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            upload: UploadSettings::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: DEFAULT_TITLE.to_string(),
            config_file: None,
        }
    }
}

/// Cloudinary account credentials
///
/// Built once at startup and handed to the uploader.
#[derive(Clone, PartialEq, Eq)]
pub struct CloudinaryCredentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl std::fmt::Debug for CloudinaryCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryCredentials")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

impl CloudinaryCredentials {
    /// Read credentials from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through a variable lookup
    ///
    /// The three CLOUDINARY_* variables take precedence; CLOUDINARY_URL is
    /// used only when none of them is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let cloud_name = get("CLOUDINARY_CLOUD_NAME");
        let api_key = get("CLOUDINARY_API_KEY");
        let api_secret = get("CLOUDINARY_API_SECRET");

        if cloud_name.is_none() && api_key.is_none() && api_secret.is_none() {
            if let Some(url) = get("CLOUDINARY_URL") {
                return Self::from_url(&url);
            }
        }

        let missing: Vec<&str> = [
            ("CLOUDINARY_CLOUD_NAME", &cloud_name),
            ("CLOUDINARY_API_KEY", &api_key),
            ("CLOUDINARY_API_SECRET", &api_secret),
        ]
        .iter()
        .filter(|(_, v)| v.is_none())
        .map(|(k, _)| *k)
        .collect();

        if !missing.is_empty() {
            anyhow::bail!(
                "Missing Cloudinary credentials: {} (set them in the environment or a .env file)",
                missing.join(", ")
            );
        }

        Ok(Self {
            cloud_name: cloud_name.unwrap_or_default(),
            api_key: api_key.unwrap_or_default(),
            api_secret: api_secret.unwrap_or_default(),
        })
    }

    /// Parse `cloudinary://<api_key>:<api_secret>@<cloud_name>`
    pub fn from_url(url: &str) -> Result<Self> {
        let rest = url
            .trim()
            .strip_prefix("cloudinary://")
            .context("CLOUDINARY_URL must start with cloudinary://")?;
        let (userinfo, cloud_name) = rest
            .rsplit_once('@')
            .context("CLOUDINARY_URL is missing the cloud name")?;
        let (api_key, api_secret) = userinfo
            .split_once(':')
            .context("CLOUDINARY_URL is missing the API secret")?;
        // Ignore any query string such as ?secure=true
        let cloud_name = cloud_name.split(['?', '/']).next().unwrap_or_default();

        if api_key.is_empty() || api_secret.is_empty() || cloud_name.is_empty() {
            anyhow::bail!("CLOUDINARY_URL has an empty component");
        }

        Ok(Self {
            cloud_name: cloud_name.to_string(),
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
        })
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".cloudgallery").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    let user_config = dirs::config_dir()?.join("cloudgallery").join("config.yaml");
    user_config.exists().then_some(user_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Merge a parsed config file and environment overrides into resolved settings
fn resolve<F>(file: Option<(&Path, ConfigFile)>, lookup: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut resolved = ResolvedConfig::default();

    if let Some((config_path, config)) = file {
        // Base directory is the parent of .cloudgallery/
        let base_dir = config_path
            .parent()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."));

        if let Some(api_base) = config.upload.api_base {
            resolved.upload.api_base = api_base;
        }
        resolved.upload.folder = config.upload.folder.filter(|f| !f.is_empty());
        match config.upload.timeout_seconds {
            Some(0) => tracing::warn!(
                "upload.timeout_seconds is 0; using the default of {}s",
                DEFAULT_TIMEOUT_SECONDS
            ),
            Some(secs) => resolved.upload.timeout = Duration::from_secs(secs),
            None => {}
        }
        if let Some(ref output) = config.page.output {
            resolved.output = resolve_path(base_dir, output);
        }
        if let Some(title) = config.page.title {
            resolved.title = title;
        }
        resolved.config_file = Some(config_path.to_path_buf());
    }

    if let Some(api_base) = lookup("CLOUDGALLERY_API_BASE") {
        resolved.upload.api_base = api_base;
    }
    if let Some(output) = lookup("CLOUDGALLERY_OUTPUT") {
        resolved.output = PathBuf::from(output);
    }

    resolved.upload.api_base = resolved.upload.api_base.trim_end_matches('/').to_string();
    resolved
}

/// Load configuration from all sources
pub fn load_config() -> Result<ResolvedConfig> {
    let config_file = find_config_file();

    let parsed = match config_file {
        Some(ref path) => Some((path.as_path(), load_config_file(path)?)),
        None => None,
    };

    Ok(resolve(parsed, |key| std::env::var(key).ok()))
}
