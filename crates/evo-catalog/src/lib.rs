//! Evo Catalog
//!
//! Schema-evolution scenarios: each one bundles a v1 → v2 [`Diff`] with the
//! [`ServiceNode`]s it touches and the [`DependencyPath`]s linking them.
//!
//! # Core Concepts
//!
//! - [`ScenarioRecord`]: one schema change and its downstream impact graph
//! - [`ScenarioStore`]: ordered, immutable, never-empty collection of scenarios
//! - [`load_path`] / [`load_str`]: JSON or YAML catalog documents
//! - [`sample_store`]: the built-in sample catalog
//!
//! # Example
//!
//! ```rust,ignore
//! use evo_catalog::{load_store, ScenarioStore};
//!
//! let store = load_store("catalog.yaml")?;
//! let first = store.default_scenario();
//! println!("{} nodes in {}", first.nodes.len(), first.label);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod loader;
mod model;
mod sample;
mod store;

pub use error::{CatalogError, CatalogFormat, Result};
pub use loader::{load_path, load_store, load_str};
pub use model::{
    DependencyPath, Diff, FieldChange, FieldImpact, ScenarioRecord, ServiceNode, Severity,
};
pub use sample::{sample_scenarios, sample_store};
pub use store::ScenarioStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
