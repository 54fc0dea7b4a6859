//! Testing utilities for the schema impact workspace
//!
//! Shared scenario builders and fixtures.

#![allow(missing_docs)]

use evo_catalog::{
    sample_store, DependencyPath, Diff, FieldChange, ScenarioRecord, ScenarioStore, ServiceNode,
    Severity,
};

/// Fluent builder for [`ScenarioRecord`] fixtures
#[derive(Debug, Clone)]
pub struct ScenarioBuilder {
    record: ScenarioRecord,
}

impl ScenarioBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            record: ScenarioRecord {
                id: id.to_string(),
                label: format!("{id} v1 → v2"),
                description: format!("{id} description"),
                risk_level: Severity::Low,
                diff: Diff::default(),
                nodes: Vec::new(),
                paths: Vec::new(),
            },
        }
    }

    pub fn risk(mut self, risk: Severity) -> Self {
        self.record.risk_level = risk;
        self
    }

    pub fn added(mut self, field: &str) -> Self {
        self.record.diff.added.push(field.to_string());
        self
    }

    pub fn removed(mut self, field: &str) -> Self {
        self.record.diff.removed.push(field.to_string());
        self
    }

    pub fn changed(mut self, field: &str, impact: &str) -> Self {
        self.record
            .diff
            .changed
            .push(FieldChange::new(field, "v1 shape", "v2 shape", impact));
        self
    }

    pub fn node(mut self, node: ServiceNode) -> Self {
        self.record.nodes.push(node);
        self
    }

    pub fn path(mut self, ids: &[&str]) -> Self {
        self.record.paths.push(DependencyPath::new(ids.iter().copied()));
        self
    }

    pub fn build(self) -> ScenarioRecord {
        self.record
    }
}

/// Node whose name is derived from its id
pub fn node(id: &str, level: Severity) -> ServiceNode {
    ServiceNode::new(id, format!("{id} service"), "Consumer · test").with_impact(level)
}

/// Node with summary, fields and issues filled in
pub fn detailed_node(id: &str, level: Severity) -> ServiceNode {
    let mut node = node(id, level).with_summary(format!("{id} is affected"));
    node.fields_impacted = vec!["total_amount".to_string(), "status".to_string()];
    node.issues = vec![format!("Coordinate {id} rollout")];
    node
}

/// OrderPlaced-shaped scenario: 2 added, 1 removed, 2 changed, 2 high-impact nodes
pub fn order_placed_like() -> ScenarioRecord {
    ScenarioBuilder::new("order_placed_v2")
        .risk(Severity::High)
        .added("order_channel")
        .added("discount_code")
        .removed("legacy_coupon_id")
        .changed("total_amount", "breaking")
        .changed("status", "medium")
        .node(node("order-service", Severity::Low))
        .node(node("event-bus", Severity::Low))
        .node(detailed_node("billing-service", Severity::High))
        .node(node("inventory-service", Severity::Medium))
        .node(node("analytics-warehouse", Severity::High))
        .path(&["order-service", "event-bus", "billing-service", "analytics-warehouse"])
        .path(&["order-service", "event-bus", "inventory-service"])
        .path(&["order-service", "analytics-warehouse"])
        .build()
}

/// Two scenarios that both contain a node with id `C`
pub fn scenarios_sharing_node_c() -> Vec<ScenarioRecord> {
    vec![
        ScenarioBuilder::new("first")
            .node(detailed_node("A", Severity::Low))
            .node(detailed_node("C", Severity::High))
            .path(&["A", "C"])
            .build(),
        ScenarioBuilder::new("second")
            .node(detailed_node("C", Severity::Medium))
            .node(detailed_node("D", Severity::Low))
            .path(&["C", "D"])
            .build(),
    ]
}

pub fn store_of(scenarios: Vec<ScenarioRecord>) -> ScenarioStore {
    ScenarioStore::new(scenarios).unwrap()
}

pub fn sample() -> ScenarioStore {
    sample_store().unwrap()
}
