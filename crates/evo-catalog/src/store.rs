//! Ordered, immutable scenario store

use crate::error::{CatalogError, Result};
use crate::model::ScenarioRecord;
use std::collections::HashSet;

/// Holds the loaded scenarios in catalog order
///
/// # Invariants
/// - Never empty: construction rejects an empty catalog, so [`ScenarioStore::default_scenario`]
///   always has an answer.
/// - Records are never mutated after load.
#[derive(Debug, Clone)]
pub struct ScenarioStore {
    scenarios: Vec<ScenarioRecord>,
}

impl ScenarioStore {
    /// Create a store from loaded records
    ///
    /// # Errors
    /// Returns [`CatalogError::EmptyCatalog`] if `scenarios` is empty
    pub fn new(scenarios: Vec<ScenarioRecord>) -> Result<Self> {
        if scenarios.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        for id in shadowed_ids(&scenarios) {
            tracing::warn!(scenario = %id, "Duplicate scenario id; only the first record is reachable");
        }
        for scenario in &scenarios {
            let dangling = scenario.dangling_path_ids();
            if !dangling.is_empty() {
                tracing::warn!(
                    scenario = %scenario.id,
                    nodes = ?dangling,
                    "Dependency paths reference unknown nodes"
                );
            }
        }
        tracing::info!("Scenario store ready with {} scenarios", scenarios.len());
        Ok(Self { scenarios })
    }

    /// All scenarios in catalog order
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[ScenarioRecord] {
        &self.scenarios
    }

    /// Look up a scenario by id (first match)
    ///
    /// # Errors
    /// Returns [`CatalogError::ScenarioNotFound`] for an unknown id
    pub fn by_id(&self, id: &str) -> Result<&ScenarioRecord> {
        self.scenarios
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| CatalogError::ScenarioNotFound(id.to_string()))
    }

    /// The first scenario
    #[inline]
    #[must_use]
    pub fn default_scenario(&self) -> &ScenarioRecord {
        // `new` guarantees at least one record
        &self.scenarios[0]
    }

    /// Number of scenarios
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Always false for a constructed store
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Scenario ids in catalog order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.scenarios.iter().map(|s| s.id.as_str())
    }
}

/// Ids appearing more than once; later records with these ids are unreachable
fn shadowed_ids(scenarios: &[ScenarioRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut shadowed = Vec::new();
    for scenario in scenarios {
        let id = scenario.id.as_str();
        if !seen.insert(id) && !shadowed.contains(&id) {
            shadowed.push(id);
        }
    }
    shadowed
}
