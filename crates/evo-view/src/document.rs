//! In-memory view surface

use crate::element::{Element, ElementKind};
use crate::surface::{PickerOption, Region, ViewSurface, SELECTED_CLASS};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// Retained page state: the last content of every region plus the picker
///
/// Adapters ([`crate::html`], [`crate::text`]) serialize a `Document`; tests
/// inspect it directly.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    regions: IndexMap<Region, Element>,
    picker: Vec<PickerOption>,
    picker_selected: Option<String>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content of a region
    #[must_use]
    pub fn region(&self, region: Region) -> Option<&Element> {
        self.regions.get(&region)
    }

    /// Region text, or empty if never rendered
    #[must_use]
    pub fn region_text(&self, region: Region) -> String {
        self.region(region)
            .map(Element::text_content)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn picker(&self) -> &[PickerOption] {
        &self.picker
    }

    #[must_use]
    pub fn picker_selected(&self) -> Option<&str> {
        self.picker_selected.as_deref()
    }

    /// Every node element in the dependency map, in render order
    #[must_use]
    pub fn node_elements(&self) -> Vec<&Element> {
        self.region(Region::DependencyMap)
            .map(|map| {
                map.descendants()
                    .into_iter()
                    .filter(|el| el.kind == ElementKind::Node)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Distinct ids of node elements currently marked selected
    #[must_use]
    pub fn selected_node_ids(&self) -> Vec<&str> {
        self.node_elements()
            .into_iter()
            .filter(|el| el.has_class(SELECTED_CLASS))
            .filter_map(|el| el.node_id.as_deref())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }
}

impl ViewSurface for Document {
    fn set_region(&mut self, region: Region, content: Element) {
        self.regions.insert(region, content);
    }

    fn set_picker(&mut self, options: Vec<PickerOption>, selected: &str) {
        self.picker = options;
        self.picker_selected = Some(selected.to_string());
    }

    fn set_node_selected(&mut self, node_id: &str, selected: bool) {
        if let Some(map) = self.regions.get_mut(&Region::DependencyMap) {
            map.visit_mut(&mut |el| {
                if el.kind == ElementKind::Node && el.node_id.as_deref() == Some(node_id) {
                    el.toggle_class(SELECTED_CLASS, selected);
                }
            });
        }
    }
}
