//! Viewer configuration
//!
//! Loaded from an optional TOML file; command-line flags are layered on top with
//! the `with_*` setters.

use crate::error::ConfigError;
use evo_catalog::{load_store, sample_store, CatalogError, ScenarioStore};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How rendered documents are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Standalone HTML page
    Html,
    /// Plain text for terminals
    #[default]
    Text,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "text" | "txt" => Ok(Self::Text),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

/// Viewer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Catalog file; `None` uses the built-in sample
    pub catalog: Option<PathBuf>,
    /// Page title for HTML output
    pub title: String,
    /// Output format
    pub format: OutputFormat,
    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            title: "Schema Evolution Impact Explorer".to_string(),
            format: OutputFormat::Text,
            log_filter: "warn".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] on invalid TOML or unknown keys
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content, path)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// With catalog path
    #[inline]
    #[must_use]
    pub fn with_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog = Some(path.into());
        self
    }

    /// With output format
    #[inline]
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// With page title
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// With log filter
    #[inline]
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Open the configured catalog, or the built-in sample
    ///
    /// # Errors
    /// Any catalog load error
    pub fn open_store(&self) -> Result<ScenarioStore, CatalogError> {
        match &self.catalog {
            Some(path) => load_store(path),
            None => sample_store(),
        }
    }
}
