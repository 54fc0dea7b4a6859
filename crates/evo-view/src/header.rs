//! Scenario header: description, summary badge and picker

use crate::element::Element;
use crate::surface::{picker_options, Region, ViewSurface};
use evo_analysis::SummaryBadge;
use evo_catalog::{ScenarioRecord, ScenarioStore};

/// Badge element with its risk class
#[must_use]
pub fn badge_element(badge: &SummaryBadge) -> Element {
    Element::block("summary-badge")
        .with_class(badge.risk_class())
        .with_text(badge.to_string())
}

/// Render the description and badge regions
pub fn render_header<S: ViewSurface + ?Sized>(
    scenario: &ScenarioRecord,
    badge: &SummaryBadge,
    surface: &mut S,
) {
    surface.set_region(
        Region::Description,
        Element::paragraph(scenario.description.as_str()),
    );
    surface.set_region(Region::SummaryBadge, badge_element(badge));
}

/// Populate the picker with the catalog, `selected` chosen
pub fn render_picker<S: ViewSurface + ?Sized>(store: &ScenarioStore, selected: &str, surface: &mut S) {
    surface.set_picker(picker_options(store), selected);
}
