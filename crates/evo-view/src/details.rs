//! Details panel
//!
//! Two mutually exclusive modes: the default explanation for the whole scenario, or
//! the impact detail of a single node. Missing node data degrades to fixed fallback
//! text; neither mode can fail.

use crate::element::Element;
use crate::surface::{Region, ViewSurface};
use evo_analysis::ScenarioMetrics;
use evo_catalog::{ScenarioRecord, ServiceNode};

pub const NO_SUMMARY: &str = "No specific impact noted.";
pub const NO_FIELDS: &str = "None identified in sample.";
pub const NO_ISSUES: &str = "No specific coordination requirements captured.";

const EXPLANATION: &str = "Use the schema change summary to understand what changed between v1 \
and v2, then click nodes in the dependency map to see which fields break each consumer and where \
coordination is required.";

/// What the panel currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailsMode {
    /// Nothing rendered yet
    #[default]
    Empty,
    /// Scenario-level explanation
    Default,
    /// Detail for the node with this id
    Node(String),
}

fn section(title: &str) -> Element {
    Element::block("details-section").with_child(Element::heading(4, title))
}

fn list_or(items: &[String], fallback: &str) -> Element {
    if items.is_empty() {
        Element::list([Element::item(fallback)])
    } else {
        Element::list(items.iter().map(|item| Element::item(item.as_str())))
    }
}

/// Default view element
#[must_use]
pub fn default_view(scenario: &ScenarioRecord) -> Element {
    Element::block("details-card")
        .with_child(Element::heading(3, "Impact Details"))
        .with_child(
            Element::paragraph(format!(
                "{} downstream services and pipelines observed.",
                scenario.nodes.len()
            ))
            .with_class("details-meta"),
        )
        .with_child(section("How to interpret this map").with_child(Element::paragraph(EXPLANATION)))
}

/// Node view element
#[must_use]
pub fn node_view(node: &ServiceNode) -> Element {
    let summary = if node.impact_summary.is_empty() {
        NO_SUMMARY
    } else {
        node.impact_summary.as_str()
    };

    Element::block("details-card")
        .with_child(Element::heading(3, node.name.as_str()))
        .with_child(
            Element::paragraph(format!(
                "{} · {}",
                node.role,
                node.impact_level.impact_label()
            ))
            .with_class("details-meta"),
        )
        .with_child(section("Impact Summary").with_child(Element::paragraph(summary)))
        .with_child(section("Fields affected by v2").with_child(list_or(&node.fields_impacted, NO_FIELDS)))
        .with_child(
            section("Upgrade & Coordination Notes").with_child(list_or(&node.issues, NO_ISSUES)),
        )
}

/// Renders the details card and remembers which mode it is in
#[derive(Debug, Clone, Default)]
pub struct DetailsPanel {
    mode: DetailsMode,
}

impl DetailsPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_default<S: ViewSurface + ?Sized>(
        &mut self,
        scenario: &ScenarioRecord,
        metrics: &ScenarioMetrics,
        surface: &mut S,
    ) {
        tracing::debug!(
            scenario = %scenario.id,
            high_impact = metrics.breaking_count,
            "Rendering default details"
        );
        surface.set_region(Region::DetailsCard, default_view(scenario));
        self.mode = DetailsMode::Default;
    }

    pub fn render_node<S: ViewSurface + ?Sized>(
        &mut self,
        node: &ServiceNode,
        scenario: &ScenarioRecord,
        surface: &mut S,
    ) {
        tracing::debug!(scenario = %scenario.id, node = %node.id, "Rendering node details");
        surface.set_region(Region::DetailsCard, node_view(node));
        self.mode = DetailsMode::Node(node.id.clone());
    }

    #[must_use]
    pub fn mode(&self) -> &DetailsMode {
        &self.mode
    }
}
