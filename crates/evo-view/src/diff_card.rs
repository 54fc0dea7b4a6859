//! Diff card rendering

use crate::element::Element;
use crate::surface::{Region, ViewSurface};
use evo_analysis::{present, DiffEntry, DiffView};
use evo_catalog::Diff;

/// Shown in place of an empty field list
pub const PLACEHOLDER: &str = "—";

fn field_list(entries: &[DiffEntry]) -> Element {
    let list = if entries.is_empty() {
        Element::list([Element::item(PLACEHOLDER).with_class("diff-field")])
    } else {
        Element::list(entries.iter().map(|entry| {
            Element::item(entry.text.as_str())
                .with_class("diff-field")
                .with_class(entry.tag.css_class())
        }))
    };
    list.with_class("diff-field-list")
}

fn field_group(label: &str, entries: &[DiffEntry]) -> Element {
    Element::block("diff-field-group")
        .with_child(Element::block("diff-field-group-label").with_text(label))
        .with_child(field_list(entries))
}

/// Build the diff card for a presented diff
#[must_use]
pub fn diff_card(view: &DiffView) -> Element {
    let header = Element::block("diff-header")
        .with_child(Element::paragraph("Schema Change Summary: v1 → v2").with_class("diff-title"))
        .with_child(Element::paragraph(view.summary.to_string()).with_class("diff-meta"));

    let v1 = Element::block("diff-column")
        .with_child(Element::paragraph("Version 1 (Current)").with_class("diff-column-title"))
        .with_child(field_group("Removed in v2", &view.removed));

    let v2 = Element::block("diff-column")
        .with_child(Element::paragraph("Version 2 (Proposed)").with_class("diff-column-title"))
        .with_child(field_group("Added fields", &view.added))
        .with_child(field_group("Changed fields", &view.changed));

    Element::block("diff-card")
        .with_child(header)
        .with_child(Element::block("diff-versions").with_child(v1).with_child(v2))
}

/// Present `diff` and render it into the diff card region
pub fn render_diff<S: ViewSurface + ?Sized>(diff: &Diff, surface: &mut S) -> DiffView {
    let view = present(diff);
    surface.set_region(Region::DiffCard, diff_card(&view));
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use evo_catalog::FieldChange;

    fn placeholders(card: &Element) -> usize {
        card.descendants()
            .into_iter()
            .filter(|el| el.text.as_deref() == Some(PLACEHOLDER))
            .count()
    }

    #[test]
    fn empty_removed_list_gets_one_placeholder() {
        let diff = Diff {
            added: vec!["due_date".into()],
            removed: vec![],
            changed: vec![FieldChange::new("status", "a", "b", "medium")],
        };
        let card = diff_card(&present(&diff));
        assert_eq!(placeholders(&card), 1);
        assert_eq!(card.find_by_class("diff-field-breaking").len(), 0);
        assert_eq!(card.find_by_class("diff-field-nonbreaking").len(), 2);
    }

    #[test]
    fn fully_empty_diff_gets_three_placeholders() {
        let card = diff_card(&present(&Diff::default()));
        assert_eq!(placeholders(&card), 3);
        assert!(card.text_content().contains("0 added · 0 removed · 0 changed"));
    }
}
