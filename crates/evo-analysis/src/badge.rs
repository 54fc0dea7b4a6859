//! Scenario summary badge

use crate::analyzer::ScenarioMetrics;
use evo_catalog::{ScenarioRecord, Severity};
use serde::Serialize;
use std::fmt;

/// Headline shown next to the scenario picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryBadge {
    pub risk: Severity,
    pub breaking_consumers: usize,
    pub field_changes: usize,
}

impl SummaryBadge {
    /// Build the badge for a scenario and its metrics
    #[must_use]
    pub fn new(scenario: &ScenarioRecord, metrics: ScenarioMetrics) -> Self {
        Self {
            risk: scenario.risk_level,
            breaking_consumers: metrics.breaking_count,
            field_changes: metrics.changed_fields_count,
        }
    }

    /// CSS class carrying the risk level
    #[must_use]
    pub fn risk_class(&self) -> String {
        format!("summary-badge-{}", self.risk)
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

impl fmt::Display for SummaryBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} breaking consumer{} · {} · {} field change{} across v1 → v2",
            self.breaking_consumers,
            plural(self.breaking_consumers),
            self.risk.impact_label(),
            self.field_changes,
            plural(self.field_changes),
        )
    }
}
