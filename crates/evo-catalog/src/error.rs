//! Error types for catalog loading and lookup

use std::path::{Path, PathBuf};

/// Errors raised while loading a catalog or querying the store
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document could not be deserialized
    ///
    /// `message` carries the offending location inside the document, e.g.
    /// `scenarios[0].nodes: invalid type ...`
    #[error("failed to parse {format} catalog{}: {message}", located(.path.as_deref()))]
    Parse {
        path: Option<PathBuf>,
        format: CatalogFormat,
        message: String,
    },

    /// File extension maps to no known format
    #[error("unsupported catalog format: '{0}'")]
    UnsupportedFormat(String),

    /// A catalog must contain at least one scenario
    #[error("catalog contains no scenarios")]
    EmptyCatalog,

    /// No scenario with this id
    #[error("scenario not found: {0}")]
    ScenarioNotFound(String),
}

impl CatalogError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create parse error
    pub fn parse_error(format: CatalogFormat, message: impl Into<String>) -> Self {
        Self::Parse {
            path: None,
            format,
            message: message.into(),
        }
    }

    /// Attach the source file to a parse error; other variants pass through
    #[must_use]
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            Self::Parse { format, message, .. } => Self::Parse {
                path: Some(file.into()),
                format,
                message,
            },
            other => other,
        }
    }

    /// Is this a lookup miss rather than a load failure?
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ScenarioNotFound(_))
    }
}

fn located(path: Option<&Path>) -> String {
    path.map(|p| format!(" {}", p.display())).unwrap_or_default()
}

/// Supported catalog document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogFormat {
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

impl CatalogFormat {
    /// Pick a format from a file extension
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl std::fmt::Display for CatalogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

/// Result alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
