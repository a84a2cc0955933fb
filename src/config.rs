use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Parser)]
#[command(name = "newsdesk", about = "Article scraping & AI enhancement dashboard")]
pub struct Cli {
    /// Base URL of the article service API
    #[arg(long)]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Path to a TOML config file (default: platform config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Optional on-disk settings. Everything has a built-in default.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    api_url: Option<String>,
    timeout_secs: Option<u64>,
}

/// Resolved transport configuration: defaults, overridden by the config
/// file, overridden by CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            // An explicitly named file must exist.
            Some(path) => read_file(path)?,
            None => match default_path() {
                Some(path) if path.exists() => read_file(&path)?,
                _ => FileConfig::default(),
            },
        };

        let api_url = cli
            .api_url
            .clone()
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout_secs = cli
            .timeout_secs
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Config {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// ~/.config/newsdesk/config.toml (or the platform equivalent).
fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("newsdesk").join("config.toml"))
}
