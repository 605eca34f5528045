use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuditError;

use super::types::Config;

const CONFIG_DIR: &str = "liveaudit";
const CONFIG_FILE: &str = "config.toml";

/// Default config file location (`~/.config/liveaudit/config.toml` on Linux)
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration
///
/// An explicit path must exist and parse; a missing file at the default
/// location just means defaults.
pub fn load(explicit_path: Option<&Path>) -> Result<Config, AuditError> {
    match explicit_path {
        Some(path) => read_config(path),
        None => match config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => Ok(Config::default()),
        },
    }
}

fn read_config(path: &Path) -> Result<Config, AuditError> {
    let contents = fs::read_to_string(path).map_err(|source| AuditError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config = toml::from_str(&contents).map_err(|e| AuditError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}
