//! Plain-text rendering of a [`Document`] for terminals

use crate::document::Document;
use crate::element::{Element, ElementKind};
use crate::graph::CONNECTOR;
use crate::surface::{Region, SELECTED_CLASS};

fn node_label(el: &Element) -> String {
    let name = el
        .children
        .iter()
        .find(|c| c.has_class("service-node-name"))
        .and_then(|c| c.text.clone())
        .unwrap_or_default();
    let level = el
        .children
        .iter()
        .find(|c| c.has_class("service-node-impact-pill"))
        .and_then(|c| c.text.clone())
        .unwrap_or_default();
    let id = el.node_id.as_deref().unwrap_or_default();
    if el.has_class(SELECTED_CLASS) {
        format!("[*{name}* ({id}, {level})]")
    } else {
        format!("[{name} ({id}, {level})]")
    }
}

fn path_row(row: &Element) -> String {
    row.children
        .iter()
        .map(|el| {
            if el.kind == ElementKind::Node {
                node_label(el)
            } else {
                CONNECTOR.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_element(lines: &mut Vec<String>, el: &Element) {
    if el.has_class("dependency-path") {
        lines.push(format!("  {}", path_row(el)));
        return;
    }
    match el.kind {
        ElementKind::Heading(level) => {
            let text = el.text.as_deref().unwrap_or_default();
            if level <= 3 {
                lines.push(format!("== {text} =="));
            } else {
                lines.push(format!("-- {text}"));
            }
        }
        ElementKind::Item => {
            let marker = if el.has_class("diff-field-breaking") {
                "!"
            } else {
                "-"
            };
            lines.push(format!("  {marker} {}", el.text.as_deref().unwrap_or_default()));
        }
        ElementKind::Node => {
            lines.push(node_label(el));
            return;
        }
        _ => {
            if let Some(text) = &el.text {
                lines.push(text.clone());
            }
        }
    }
    for child in &el.children {
        write_element(lines, child);
    }
}

/// Render the picker and every region as plain text
#[must_use]
pub fn render(doc: &Document) -> String {
    let mut lines = Vec::new();

    let picker: Vec<String> = doc
        .picker()
        .iter()
        .map(|opt| {
            if doc.picker_selected() == Some(opt.value.as_str()) {
                format!("({})", opt.value)
            } else {
                opt.value.clone()
            }
        })
        .collect();
    lines.push(format!("Scenarios: {}", picker.join("  ")));

    for region in Region::ALL {
        if let Some(el) = doc.region(region) {
            lines.push(String::new());
            write_element(&mut lines, el);
        }
    }
    lines.push(String::new());
    lines.join("\n")
}
