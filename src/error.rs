use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for liveaudit
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Could not read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("No browser opener found in PATH (tried: {0})")]
    OpenerNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
