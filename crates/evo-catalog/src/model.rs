//! Scenario records
//!
//! The wire shape follows the catalog documents: camelCase keys, every collection
//! optional. Missing values degrade to empty collections or [`Severity::Low`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Qualitative severity, used both for a scenario's risk and a node's impact.
///
/// Only the exact lowercase labels `low`, `medium` and `high` are recognised;
/// anything else (including a missing value) reads as [`Severity::Low`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Severity {
    /// Low severity (also the fallback)
    #[default]
    Low,
    /// Medium severity
    Medium,
    /// High severity
    High,
}

impl Severity {
    /// Parse a wire label, falling back to `Low`
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Low,
        }
    }

    /// Wire label, also used as a CSS class suffix
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Human-readable impact label
    #[inline]
    #[must_use]
    pub const fn impact_label(self) -> &'static str {
        match self {
            Self::Low => "Low impact",
            Self::Medium => "Medium impact",
            Self::High => "High impact",
        }
    }
}

impl From<Option<String>> for Severity {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map_or(Self::Low, Self::from_label)
    }
}

impl From<Severity> for String {
    fn from(value: Severity) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Breaking classification of a single field change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldImpact {
    /// Consumers must change
    Breaking,
    /// Everything that is not explicitly breaking
    NonBreaking,
}

impl FieldImpact {
    /// Classify a raw impact label; only the exact string `breaking` is breaking
    #[inline]
    #[must_use]
    pub fn classify(label: &str) -> Self {
        if label == "breaking" {
            Self::Breaking
        } else {
            Self::NonBreaking
        }
    }

    /// Is this breaking?
    #[inline]
    #[must_use]
    pub const fn is_breaking(self) -> bool {
        matches!(self, Self::Breaking)
    }
}

/// One field whose shape or semantics changed between versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    /// Field name
    pub field: String,
    /// Description in v1
    #[serde(default)]
    pub from: String,
    /// Description in v2
    #[serde(default)]
    pub to: String,
    /// Raw impact label as supplied by the catalog (`breaking`, `medium`, ...)
    #[serde(default)]
    pub impact: String,
}

impl FieldChange {
    /// Create a field change
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        impact: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            from: from.into(),
            to: to.into(),
            impact: impact.into(),
        }
    }

    /// Breaking classification of the raw impact label
    #[inline]
    #[must_use]
    pub fn classification(&self) -> FieldImpact {
        FieldImpact::classify(&self.impact)
    }
}

/// Structural v1 → v2 diff, supplied by the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diff {
    /// Added field descriptions
    #[serde(default)]
    pub added: Vec<String>,
    /// Removed field descriptions
    #[serde(default)]
    pub removed: Vec<String>,
    /// Changed fields
    #[serde(default)]
    pub changed: Vec<FieldChange>,
}

impl Diff {
    /// Total number of entries across all three lists
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }

    /// No additions, removals or changes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A producer, pipeline or consumer touched by the schema change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceNode {
    /// Identifier, unique within its scenario
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Role description, e.g. "Consumer · invoices orders"
    #[serde(default)]
    pub role: String,
    /// Impact level assigned by the catalog
    #[serde(default)]
    pub impact_level: Severity,
    /// Human-readable impact summary; may be empty
    #[serde(default)]
    pub impact_summary: String,
    /// Names of the fields this node depends on
    #[serde(default)]
    pub fields_impacted: Vec<String>,
    /// Coordination issues to resolve before rollout
    #[serde(default)]
    pub issues: Vec<String>,
}

impl ServiceNode {
    /// Create a node with the given id, name and role
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            impact_level: Severity::Low,
            impact_summary: String::new(),
            fields_impacted: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// With impact level
    #[inline]
    #[must_use]
    pub fn with_impact(mut self, level: Severity) -> Self {
        self.impact_level = level;
        self
    }

    /// With impact summary
    #[inline]
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.impact_summary = summary.into();
        self
    }

    /// Is this a high-impact node?
    #[inline]
    #[must_use]
    pub fn is_high_impact(&self) -> bool {
        self.impact_level == Severity::High
    }
}

/// One producer → consumer chain of node identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyPath(pub Vec<String>);

impl DependencyPath {
    /// Build a path from ids
    #[must_use]
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(ids.into_iter().map(Into::into).collect())
    }

    /// Node ids in order
    #[inline]
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.0
    }

    /// Number of positions in the path
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Empty path
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A schema-evolution scenario: the diff plus its downstream impact graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRecord {
    /// Unique identifier
    pub id: String,
    /// Picker label
    #[serde(default)]
    pub label: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Overall risk
    #[serde(default)]
    pub risk_level: Severity,
    /// v1 → v2 diff
    #[serde(default)]
    pub diff: Diff,
    /// Nodes affected by the change
    #[serde(default)]
    pub nodes: Vec<ServiceNode>,
    /// Producer → consumer chains over `nodes`
    #[serde(default)]
    pub paths: Vec<DependencyPath>,
}

impl ScenarioRecord {
    /// First node with the given id
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&ServiceNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Does this scenario contain a node with the given id?
    #[inline]
    #[must_use]
    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Node lookup table; on duplicate ids the first node wins
    #[must_use]
    pub fn nodes_by_id(&self) -> HashMap<&str, &ServiceNode> {
        let mut map = HashMap::with_capacity(self.nodes.len());
        for node in &self.nodes {
            map.entry(node.id.as_str()).or_insert(node);
        }
        map
    }

    /// Distinct path ids with no matching node, in first-appearance order
    #[must_use]
    pub fn dangling_path_ids(&self) -> Vec<&str> {
        let mut dangling: Vec<&str> = Vec::new();
        for id in self.paths.iter().flat_map(DependencyPath::ids) {
            if !self.contains_node(id) && !dangling.contains(&id.as_str()) {
                dangling.push(id);
            }
        }
        dangling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_anything_but_literal_breaking_is_non_breaking(label in "\\PC{0,12}") {
            prop_assume!(label != "breaking");
            prop_assert_eq!(FieldImpact::classify(&label), FieldImpact::NonBreaking);
        }
    }

    #[test]
    fn severity_falls_back_to_low() {
        assert_eq!(Severity::from_label("high"), Severity::High);
        assert_eq!(Severity::from_label("HIGH"), Severity::Low);
        assert_eq!(Severity::from(None::<String>), Severity::Low);
        assert_eq!(Severity::Medium.impact_label(), "Medium impact");
    }

    #[test]
    fn only_literal_breaking_is_breaking() {
        assert!(FieldImpact::classify("breaking").is_breaking());
        assert!(!FieldImpact::classify("Breaking").is_breaking());
        assert!(!FieldImpact::classify("medium").is_breaking());
        assert!(!FieldImpact::classify("").is_breaking());
    }

    #[test]
    fn node_defaults_from_sparse_json() {
        let node: ServiceNode = serde_json::from_str(r#"{"id": "svc"}"#).unwrap();
        assert_eq!(node.impact_level, Severity::Low);
        assert!(node.impact_summary.is_empty());
        assert!(node.fields_impacted.is_empty());
        assert!(node.issues.is_empty());
    }

    #[test]
    fn null_and_unknown_levels_read_as_low() {
        let node: ServiceNode =
            serde_json::from_str(r#"{"id": "a", "impactLevel": null}"#).unwrap();
        assert_eq!(node.impact_level, Severity::Low);

        let node: ServiceNode =
            serde_json::from_str(r#"{"id": "a", "impactLevel": "critical"}"#).unwrap();
        assert_eq!(node.impact_level, Severity::Low);
    }

    #[test]
    fn first_duplicate_node_wins() {
        let scenario = ScenarioRecord {
            id: "s".into(),
            label: String::new(),
            description: String::new(),
            risk_level: Severity::Low,
            diff: Diff::default(),
            nodes: vec![
                ServiceNode::new("a", "First", "r"),
                ServiceNode::new("a", "Second", "r"),
            ],
            paths: vec![],
        };
        assert_eq!(scenario.node("a").unwrap().name, "First");
        assert_eq!(scenario.nodes_by_id()["a"].name, "First");
    }

    #[test]
    fn dangling_path_ids_are_distinct_and_ordered() {
        let scenario = ScenarioRecord {
            id: "s".into(),
            label: String::new(),
            description: String::new(),
            risk_level: Severity::Low,
            diff: Diff::default(),
            nodes: vec![ServiceNode::new("a", "A", "r")],
            paths: vec![
                DependencyPath::new(["a", "x", "y"]),
                DependencyPath::new(["y", "a", "x"]),
            ],
        };
        assert_eq!(scenario.dangling_path_ids(), vec!["x", "y"]);
    }
}
