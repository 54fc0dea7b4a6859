//! View surface contract
//!
//! The renderers only ever talk to a [`ViewSurface`]: they replace the content of
//! named regions, populate the scenario picker, and toggle the selected state of
//! node elements they created earlier. How pixels (or bytes) come out is the
//! surface's business.

use crate::element::Element;
use crate::event::ViewEvent;
use evo_catalog::ScenarioStore;
use serde::Serialize;

/// Class carried by a selected node element
pub const SELECTED_CLASS: &str = "service-node-selected";

/// Named, independently replaceable page regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Region {
    Description,
    SummaryBadge,
    DiffCard,
    DependencyMap,
    DetailsCard,
}

impl Region {
    /// Layout order
    pub const ALL: [Self; 5] = [
        Self::Description,
        Self::SummaryBadge,
        Self::DiffCard,
        Self::DependencyMap,
        Self::DetailsCard,
    ];

    /// DOM id of the region's container
    #[must_use]
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::Description => "scenario-description",
            Self::SummaryBadge => "summary-badge",
            Self::DiffCard => "diff-card",
            Self::DependencyMap => "dependency-map",
            Self::DetailsCard => "details-card",
        }
    }
}

/// One `(value, label)` pair in the scenario picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerOption {
    pub value: String,
    pub label: String,
}

impl PickerOption {
    /// Event the surface reports when this option is chosen
    #[must_use]
    pub fn select_event(&self) -> ViewEvent {
        ViewEvent::ScenarioSelected(self.value.clone())
    }
}

/// Picker options for every scenario, in catalog order
#[must_use]
pub fn picker_options(store: &ScenarioStore) -> Vec<PickerOption> {
    store
        .all()
        .iter()
        .map(|s| PickerOption {
            value: s.id.clone(),
            label: s.label.clone(),
        })
        .collect()
}

/// Rendering collaborator
pub trait ViewSurface {
    /// Replace the content of a region
    fn set_region(&mut self, region: Region, content: Element);

    /// Populate the scenario picker and mark `selected` as chosen
    fn set_picker(&mut self, options: Vec<PickerOption>, selected: &str);

    /// Toggle the selected state of every node element with this id
    fn set_node_selected(&mut self, node_id: &str, selected: bool);
}
