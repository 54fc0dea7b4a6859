//! Catalog document loading
//!
//! Accepts JSON or YAML, shaped either as a bare sequence of scenarios or as a
//! mapping with a `scenarios` key.

use crate::error::{CatalogError, CatalogFormat, Result};
use crate::model::ScenarioRecord;
use crate::store::ScenarioStore;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
struct WrappedCatalog {
    scenarios: Vec<ScenarioRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Bare,
    Wrapped,
}

/// Decide between the bare and wrapped layouts before decoding records, so that a
/// bad field reports its own location instead of a generic mismatch
fn shape_of(content: &str, format: CatalogFormat) -> Result<Shape> {
    let shape = match format {
        CatalogFormat::Json => match serde_json::from_str::<serde_json::Value>(content)
            .map_err(|e| CatalogError::parse_error(format, e.to_string()))?
        {
            serde_json::Value::Array(_) => Some(Shape::Bare),
            serde_json::Value::Object(_) => Some(Shape::Wrapped),
            _ => None,
        },
        CatalogFormat::Yaml => match serde_yaml::from_str::<serde_yaml::Value>(content)
            .map_err(|e| CatalogError::parse_error(format, e.to_string()))?
        {
            serde_yaml::Value::Sequence(_) => Some(Shape::Bare),
            serde_yaml::Value::Mapping(_) => Some(Shape::Wrapped),
            _ => None,
        },
    };
    shape.ok_or_else(|| {
        CatalogError::parse_error(
            format,
            "expected a sequence of scenarios or a mapping with a `scenarios` key",
        )
    })
}

fn decode<T: DeserializeOwned>(content: &str, format: CatalogFormat) -> Result<T> {
    let decoded: std::result::Result<T, String> = match format {
        CatalogFormat::Json => {
            let mut deserializer = serde_json::Deserializer::from_str(content);
            serde_path_to_error::deserialize(&mut deserializer).map_err(|e| e.to_string())
        }
        CatalogFormat::Yaml => {
            serde_path_to_error::deserialize(serde_yaml::Deserializer::from_str(content))
                .map_err(|e| e.to_string())
        }
    };
    decoded.map_err(|message| CatalogError::parse_error(format, message))
}

/// Parse scenario records from text
///
/// # Errors
/// Returns [`CatalogError::Parse`] if the text is not a valid catalog document. The
/// message names the offending field, e.g. `scenarios[0].nodes: invalid type ...`
pub fn load_str(content: &str, format: CatalogFormat) -> Result<Vec<ScenarioRecord>> {
    let records = match shape_of(content, format)? {
        Shape::Bare => decode::<Vec<ScenarioRecord>>(content, format)?,
        Shape::Wrapped => decode::<WrappedCatalog>(content, format)?.scenarios,
    };
    tracing::debug!("Parsed {} scenarios from {} document", records.len(), format);
    Ok(records)
}

/// Read scenario records from a file, picking the format by extension
///
/// # Errors
/// Returns an error if the extension is unsupported, the file cannot be read,
/// or its content does not parse
pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<ScenarioRecord>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let format = CatalogFormat::from_extension(ext)
        .ok_or_else(|| CatalogError::UnsupportedFormat(ext.to_string()))?;

    let content =
        std::fs::read_to_string(path).map_err(|e| CatalogError::io_error(path, e))?;
    let records = load_str(&content, format).map_err(|e| e.with_path(path))?;
    tracing::info!("Loaded {} scenarios from {}", records.len(), path.display());
    Ok(records)
}

/// Load a file straight into a [`ScenarioStore`]
///
/// # Errors
/// Any [`load_path`] error, or [`CatalogError::EmptyCatalog`]
pub fn load_store(path: impl AsRef<Path>) -> Result<ScenarioStore> {
    ScenarioStore::new(load_path(path)?)
}
