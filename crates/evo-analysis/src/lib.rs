//! Evo Analysis
//!
//! Pure derivations over a [`evo_catalog::ScenarioRecord`]. Nothing here touches a
//! view surface, so every function is testable on plain data.
//!
//! - [`analyze`]: changed-field and high-impact-node counts
//! - [`present`]: two-column, breaking-tagged [`DiffView`]
//! - [`SummaryBadge`]: the headline line for the current scenario

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod analyzer;
mod badge;
mod diff;

pub use analyzer::{analyze, ScenarioMetrics};
pub use badge::SummaryBadge;
pub use diff::{present, ChangeTag, DiffEntry, DiffSummary, DiffView};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
