//! Dependency-path rendering
//!
//! Each [`DependencyPath`](evo_catalog::DependencyPath) becomes one row of node
//! elements joined by connectors. Ids missing from the scenario's node list leave a
//! gap: nothing is drawn for that position, but the connectors around it still are,
//! so a row always has `len - 1` connectors.

use crate::element::Element;
use crate::event::ViewEvent;
use crate::surface::{Region, ViewSurface};
use evo_catalog::{ScenarioRecord, ServiceNode, Severity};
use indexmap::IndexSet;
use serde::Serialize;

/// Glyph drawn between consecutive path positions
pub const CONNECTOR: &str = "→";

/// Display data for one rendered node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeView {
    pub id: String,
    pub name: String,
    pub role: String,
    pub level: Severity,
}

impl NodeView {
    fn from_node(node: &ServiceNode) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            role: node.role.clone(),
            level: node.impact_level,
        }
    }

    /// `service-node-{level}`
    #[must_use]
    pub fn level_class(&self) -> String {
        format!("service-node-{}", self.level)
    }

    #[must_use]
    pub fn impact_label(&self) -> &'static str {
        self.level.impact_label()
    }

    /// Event reported when this node is clicked
    #[must_use]
    pub fn click(&self) -> ViewEvent {
        ViewEvent::NodeClicked(self.id.clone())
    }

    /// Node element: name, role and impact pill
    #[must_use]
    pub fn to_element(&self) -> Element {
        Element::node(self.id.as_str())
            .with_class("service-node")
            .with_class(self.level_class())
            .with_child(Element::block("service-node-name").with_text(self.name.as_str()))
            .with_child(Element::block("service-node-role").with_text(self.role.as_str()))
            .with_child(
                Element::inline("service-node-impact-pill", self.impact_label())
                    .with_class(format!("service-node-impact-{}", self.level)),
            )
    }
}

/// One position in a path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "slot", rename_all = "snake_case")]
pub enum PathSlot {
    /// Resolved node
    Node(NodeView),
    /// Id not present in the scenario; renders nothing
    Gap { node_id: String },
}

impl PathSlot {
    #[must_use]
    pub fn node(&self) -> Option<&NodeView> {
        match self {
            Self::Node(view) => Some(view),
            Self::Gap { .. } => None,
        }
    }

    #[must_use]
    pub fn is_gap(&self) -> bool {
        matches!(self, Self::Gap { .. })
    }
}

/// One laid-out path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathView {
    pub slots: Vec<PathSlot>,
}

impl PathView {
    /// Connectors follow path length, not rendered-node count
    #[inline]
    #[must_use]
    pub fn connector_count(&self) -> usize {
        self.slots.len().saturating_sub(1)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeView> {
        self.slots.iter().filter_map(PathSlot::node)
    }

    fn to_element(&self) -> Element {
        let last = self.slots.len().saturating_sub(1);
        let mut row = Element::block("dependency-path");
        for (index, slot) in self.slots.iter().enumerate() {
            if let PathSlot::Node(view) = slot {
                row.children.push(view.to_element());
            }
            if index < last {
                row.children.push(Element::inline("connector-arrow", CONNECTOR));
            }
        }
        row
    }
}

/// Resolve every path of a scenario against its node list
#[must_use]
pub fn layout(scenario: &ScenarioRecord) -> Vec<PathView> {
    let nodes = scenario.nodes_by_id();
    scenario
        .paths
        .iter()
        .map(|path| PathView {
            slots: path
                .ids()
                .iter()
                .map(|id| match nodes.get(id.as_str()) {
                    Some(node) => PathSlot::Node(NodeView::from_node(node)),
                    None => {
                        tracing::debug!(scenario = %scenario.id, node = %id, "Path references unknown node");
                        PathSlot::Gap { node_id: id.clone() }
                    }
                })
                .collect(),
        })
        .collect()
}

/// Renders the dependency map and tracks which node is highlighted
#[derive(Debug, Clone, Default)]
pub struct DependencyGraphRenderer {
    rendered: IndexSet<String>,
    selected: Option<String>,
}

impl DependencyGraphRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out and render `scenario`, replacing the previous map
    ///
    /// The fresh map has no highlighted node.
    pub fn render<S: ViewSurface + ?Sized>(
        &mut self,
        scenario: &ScenarioRecord,
        surface: &mut S,
    ) -> Vec<PathView> {
        let paths = layout(scenario);

        self.rendered = paths
            .iter()
            .flat_map(PathView::nodes)
            .map(|view| view.id.clone())
            .collect();
        self.selected = None;

        let header = Element::block("dependency-map-header")
            .with_child(Element::paragraph("Downstream Dependency Paths").with_class("dependency-map-title"))
            .with_child(
                Element::paragraph(
                    "Each row is a path from producer to consumers. Click a node to see its impact.",
                )
                .with_class("dependency-map-note"),
            );
        let rows = Element::block("dependency-paths").with_children(paths.iter().map(PathView::to_element));

        surface.set_region(
            Region::DependencyMap,
            Element::block("dependency-map").with_child(header).with_child(rows),
        );
        paths
    }

    /// Mark every rendered node with `selected_id` selected and all others not
    ///
    /// An id that matches no rendered node leaves everything unselected.
    pub fn highlight<S: ViewSurface + ?Sized>(&mut self, selected_id: &str, surface: &mut S) {
        for id in &self.rendered {
            surface.set_node_selected(id, id == selected_id);
        }
        self.selected = self
            .rendered
            .contains(selected_id)
            .then(|| selected_id.to_string());
    }

    /// Currently highlighted node, if it was rendered
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn is_rendered(&self, node_id: &str) -> bool {
        self.rendered.contains(node_id)
    }

    /// Distinct rendered node ids in first-appearance order
    pub fn rendered_ids(&self) -> impl Iterator<Item = &str> {
        self.rendered.iter().map(String::as_str)
    }
}
