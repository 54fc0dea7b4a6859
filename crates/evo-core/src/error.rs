//! Error types for configuration loading

use std::path::PathBuf;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid TOML or unknown keys
    #[error("invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Output format name not recognised
    #[error("unknown output format: '{0}' (expected html or text)")]
    UnknownFormat(String),
}
