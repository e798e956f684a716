pub mod schema;

use std::path::{Path, PathBuf};

use crate::error::StatusError;

pub use schema::{ColorOverrides, StatuslineConfig};

/// Return the platform-specific default config file
/// (~/.config/cc-statusline/config.toml on Linux).
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cc-statusline").join("config.toml"))
}

/// Parse a config file.
pub fn read(path: &Path) -> Result<StatuslineConfig, StatusError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Load the statusline config from `explicit` (flag or env) or the default
/// location. Never fails: a missing default file is silent, anything else
/// that goes wrong is logged and replaced by defaults.
pub fn load(explicit: Option<&Path>) -> StatuslineConfig {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_path() {
            Some(p) if p.exists() => p,
            _ => return StatuslineConfig::default(),
        },
    };

    match read(&path) {
        Ok(config) => {
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("ignoring config {}: {}", path.display(), e);
            StatuslineConfig::default()
        }
    }
}
