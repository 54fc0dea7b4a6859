//! Built-in sample catalog
//!
//! Three event schemas (OrderPlaced, UserProfileUpdated, InvoiceIssued) with their
//! downstream consumers. Used whenever no catalog file is configured.

use crate::error::{CatalogFormat, Result};
use crate::loader::load_str;
use crate::model::ScenarioRecord;
use crate::store::ScenarioStore;

const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.json");

/// Parse the embedded sample scenarios
///
/// # Errors
/// Only if the embedded document is malformed
pub fn sample_scenarios() -> Result<Vec<ScenarioRecord>> {
    load_str(SAMPLE_CATALOG, CatalogFormat::Json)
}

/// Store over the embedded sample scenarios
///
/// # Errors
/// Only if the embedded document is malformed
pub fn sample_store() -> Result<ScenarioStore> {
    ScenarioStore::new(sample_scenarios()?)
}
