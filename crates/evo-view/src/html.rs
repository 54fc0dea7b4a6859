//! Standalone HTML snapshot of a [`Document`]

use crate::document::Document;
use crate::element::{Element, ElementKind};
use crate::surface::Region;
use std::fmt::Write;

/// Escape text for HTML content and attribute values
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn tag(kind: ElementKind) -> String {
    match kind {
        ElementKind::Block | ElementKind::Node => "div".to_string(),
        ElementKind::Heading(level) => format!("h{}", level.clamp(1, 6)),
        ElementKind::Paragraph => "p".to_string(),
        ElementKind::List => "ul".to_string(),
        ElementKind::Item => "li".to_string(),
        ElementKind::Inline => "span".to_string(),
    }
}

fn write_element(out: &mut String, el: &Element) {
    let tag = tag(el.kind);
    out.push('<');
    out.push_str(&tag);
    if !el.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape(&el.classes.join(" ")));
    }
    if let Some(id) = &el.node_id {
        let _ = write!(out, " data-node-id=\"{}\"", escape(id));
    }
    out.push('>');
    if let Some(text) = &el.text {
        out.push_str(&escape(text));
    }
    for child in &el.children {
        write_element(out, child);
    }
    let _ = write!(out, "</{tag}>");
}

/// Render one element to an HTML fragment
#[must_use]
pub fn render_element(el: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, el);
    out
}

fn write_region(out: &mut String, doc: &Document, region: Region) {
    let _ = write!(out, "<div id=\"{}\">", region.dom_id());
    if let Some(el) = doc.region(region) {
        write_element(out, el);
    }
    out.push_str("</div>\n");
}

/// Render a full page
#[must_use]
pub fn render_page(doc: &Document, title: &str) -> String {
    let mut out = String::new();
    let title = escape(title);
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"en\">");
    let _ = writeln!(
        out,
        "<head><meta charset=\"utf-8\"><title>{title}</title></head>"
    );
    out.push_str("<body>\n<header>\n");
    let _ = writeln!(out, "<h1>{title}</h1>");

    out.push_str("<select id=\"scenario-select\">");
    for option in doc.picker() {
        let selected = if doc.picker_selected() == Some(option.value.as_str()) {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            out,
            "<option value=\"{}\"{selected}>{}</option>",
            escape(&option.value),
            escape(&option.label)
        );
    }
    out.push_str("</select>\n");
    write_region(&mut out, doc, Region::Description);
    write_region(&mut out, doc, Region::SummaryBadge);
    out.push_str("</header>\n<main>\n");
    write_region(&mut out, doc, Region::DiffCard);
    write_region(&mut out, doc, Region::DependencyMap);
    write_region(&mut out, doc, Region::DetailsCard);
    out.push_str("</main>\n</body>\n</html>\n");
    out
}
