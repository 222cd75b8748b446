use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::AppError;

/// Connection settings for the hosted backend.
///
/// The client never talks to a database directly; everything goes through the
/// backend's HTTP interface, authenticated with the project's anon key.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: String,
    pub anon_key: String,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let backend_url = env::var("UNIADMIN_BACKEND_URL")
            .map_err(|_| AppError::ConfigMissing("UNIADMIN_BACKEND_URL"))?;
        let anon_key = env::var("UNIADMIN_ANON_KEY")
            .map_err(|_| AppError::ConfigMissing("UNIADMIN_ANON_KEY"))?;

        let request_timeout_secs = env::var("UNIADMIN_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            backend_url,
            anon_key,
            request_timeout_secs,
        })
    }
}

/// Resolve the per-user configuration directory, creating it if needed.
/// `UNIADMIN_CONFIG_DIR` overrides the default `~/.config/uniadmin`.
pub fn get_config_dir() -> Result<PathBuf, AppError> {
    let config_dir = if let Ok(custom_dir) = env::var("UNIADMIN_CONFIG_DIR") {
        PathBuf::from(custom_dir)
    } else {
        let home = env::var("HOME").map_err(|_| AppError::ConfigMissing("HOME"))?;
        PathBuf::from(home).join(".config").join("uniadmin")
    };

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir).map_err(|e| AppError::Config(e.to_string()))?;
    }

    Ok(config_dir)
}
