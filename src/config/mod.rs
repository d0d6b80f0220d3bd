mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_PER_PAGE: u8 = 100;
pub const DEFAULT_MAX_PAGES: u32 = 1;
pub const MAX_PER_PAGE: u8 = 100;

/// Get the config directory path (~/.config/review-lag/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("review-lag"))
}

/// Get the default config file path (~/.config/review-lag/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, the default path is
///   tried and a missing default file yields an empty config.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
/// - `per_page` is outside 1-100
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            read_config(&path)?
        }
        None => match get_config_path() {
            Some(default) if default.exists() => read_config(&default)?,
            _ => Config::default(),
        },
    };

    validate_per_page(config.per_page)?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))
}

fn validate_per_page(per_page: Option<u8>) -> Result<()> {
    match per_page {
        Some(n) if n == 0 || n > MAX_PER_PAGE => {
            anyhow::bail!("per_page must be between 1 and {}, got {}", MAX_PER_PAGE, n)
        }
        _ => Ok(()),
    }
}

/// Connection settings for the GitHub client
#[derive(Clone)]
pub struct ApiConfig {
    pub api_url: String,
    pub token: Option<String>,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
