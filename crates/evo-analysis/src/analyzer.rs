//! Scenario impact metrics

use evo_catalog::ScenarioRecord;
use serde::Serialize;

/// Counts derived from one scenario
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ScenarioMetrics {
    /// `|added| + |removed| + |changed|`
    pub changed_fields_count: usize,
    /// Number of nodes whose impact level is high
    ///
    /// This counts high-impact *nodes*, not breaking field changes; the two
    /// classifications are independent.
    pub breaking_count: usize,
}

/// Derive [`ScenarioMetrics`] for a scenario
#[must_use]
pub fn analyze(scenario: &ScenarioRecord) -> ScenarioMetrics {
    ScenarioMetrics {
        changed_fields_count: scenario.diff.len(),
        breaking_count: scenario.nodes.iter().filter(|n| n.is_high_impact()).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evo_catalog::{Diff, FieldChange, ServiceNode, Severity};

    #[test]
    fn breaking_field_changes_do_not_count_as_breaking_consumers() {
        let scenario = ScenarioRecord {
            id: "s".into(),
            label: String::new(),
            description: String::new(),
            risk_level: Severity::High,
            diff: Diff {
                added: vec![],
                removed: vec![],
                changed: vec![FieldChange::new("amount", "int", "decimal", "breaking")],
            },
            nodes: vec![ServiceNode::new("a", "A", "Consumer").with_impact(Severity::Medium)],
            paths: vec![],
        };

        assert_eq!(
            analyze(&scenario),
            ScenarioMetrics {
                changed_fields_count: 1,
                breaking_count: 0,
            }
        );
    }
}
