//! Client configuration: the backend API base URL, from environment and file.
//!
//! Lookup order is `SAHAJA_API_BASE_URL`, then `~/.config/sahaja/config.toml`,
//! then unconfigured (uploads resolve to the hosted backend). Configuration is
//! loaded once at startup and passed explicitly, so call sites stay
//! deterministic under test.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::uploads;

/// Environment variable holding the configured API base URL.
pub const API_BASE_URL_ENV: &str = "SAHAJA_API_BASE_URL";

/// Written on first run so the file documents itself.
const DEFAULT_CONFIG_TEMPLATE: &str = "\
# Sahaja Krushi client configuration.
#
# Root URL of the backend API. When unset, uploaded files are looked up on
# the hosted backend.
# api_base_url = \"https://sahaja-krushi-backend-h0t1.onrender.com/api/V1\"
";

/// Failure to locate or bootstrap the on-disk configuration.
///
/// Unreadable or malformed file *content* is not an error: it degrades to
/// the defaults with a warning, so URL resolution always has something to
/// work with.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// XDG base directories could not be determined.
    #[error("config directory unavailable: {0}")]
    BaseDirs(#[from] xdg::BaseDirectoriesError),
    /// Creating or writing the default config file failed.
    #[error("config bootstrap: {0}")]
    Bootstrap(#[from] std::io::Error),
}

/// Client configuration, passed explicitly to call sites.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root URL of the backend API, normally ending in `/api/V1`.
    /// `None` means unconfigured: uploads resolve to the hosted fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
}

impl ClientConfig {
    /// Reads configuration from the environment only.
    ///
    /// Never fails: a missing variable means unconfigured, and a value that
    /// is not valid Unicode is logged and treated the same way.
    pub fn from_env() -> Self {
        Self {
            api_base_url: env_api_base_url(),
        }
    }

    /// Base URL under which uploaded files are served.
    pub fn uploads_base_url(&self) -> String {
        uploads::resolve_base_url(self.api_base_url.as_deref())
    }

    /// Download link for the uploaded file at `path`, relative to the
    /// uploads base.
    pub fn upload_file_url(&self, path: &str) -> String {
        uploads::file_url(&self.uploads_base_url(), path)
    }
}

/// Guarded environment read: absent means `None`; a non-Unicode value is the
/// one configuration-read failure we recover from (warn, then `None`).
fn env_api_base_url() -> Option<String> {
    match env::var(API_BASE_URL_ENV) {
        Ok(value) => Some(value),
        Err(env::VarError::NotPresent) => None,
        Err(env::VarError::NotUnicode(raw)) => {
            tracing::warn!(
                "ignoring {}: value {:?} is not valid unicode",
                API_BASE_URL_ENV,
                raw
            );
            None
        }
    }
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sahaja")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Loads configuration from disk, creating a default file if none exists,
/// then applies the environment override.
///
/// A file that cannot be read or parsed is logged and replaced by the
/// defaults for this load; only bootstrap failures (no config dir, default
/// file unwritable) are returned as errors.
pub fn load_or_init() -> Result<ClientConfig, ConfigError> {
    let path = config_path()?;
    let mut cfg = if path.exists() {
        read_config_file(&path)
    } else {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        tracing::info!("created default config at {}", path.display());
        ClientConfig::default()
    };

    // The environment wins over the file, even when set to the empty string:
    // an empty override forces the hosted fallback.
    if let Some(from_env) = env_api_base_url() {
        cfg.api_base_url = Some(from_env);
    }

    Ok(cfg)
}

fn read_config_file(path: &Path) -> ClientConfig {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            tracing::warn!("cannot read config {}: {}", path.display(), err);
            return ClientConfig::default();
        }
    };
    match toml::from_str(&data) {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!("cannot parse config {}: {}", path.display(), err);
            ClientConfig::default()
        }
    }
}
