//! Owned element tree handed to a view surface

use serde::Serialize;

/// Structural role of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Generic container
    Block,
    /// Section heading of the given level
    Heading(u8),
    /// Paragraph of text
    Paragraph,
    /// Unordered list
    List,
    /// List item
    Item,
    /// Inline text run
    Inline,
    /// Clickable service node; carries `node_id`
    Node,
}

/// A renderable element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub kind: ElementKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Click handle for [`ElementKind::Node`] elements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    /// Empty element of the given kind
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            classes: Vec::new(),
            text: None,
            node_id: None,
            children: Vec::new(),
        }
    }

    /// Container with a class
    #[must_use]
    pub fn block(class: &str) -> Self {
        Self::new(ElementKind::Block).with_class(class)
    }

    #[must_use]
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::new(ElementKind::Heading(level)).with_text(text)
    }

    #[must_use]
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(ElementKind::Paragraph).with_text(text)
    }

    #[must_use]
    pub fn inline(class: &str, text: impl Into<String>) -> Self {
        Self::new(ElementKind::Inline).with_class(class).with_text(text)
    }

    #[must_use]
    pub fn item(text: impl Into<String>) -> Self {
        Self::new(ElementKind::Item).with_text(text)
    }

    /// List of items
    #[must_use]
    pub fn list(items: impl IntoIterator<Item = Element>) -> Self {
        Self::new(ElementKind::List).with_children(items)
    }

    /// Clickable node element
    #[must_use]
    pub fn node(node_id: impl Into<String>) -> Self {
        let mut el = Self::new(ElementKind::Node);
        el.node_id = Some(node_id.into());
        el
    }

    #[inline]
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    #[inline]
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add or remove a class; idempotent
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            if !self.has_class(class) {
                self.classes.push(class.to_string());
            }
        } else {
            self.classes.retain(|c| c != class);
        }
    }

    /// Pre-order traversal
    #[must_use]
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(el) = stack.pop() {
            out.push(el);
            stack.extend(el.children.iter().rev());
        }
        out
    }

    /// Apply `f` to this element and every descendant
    pub fn visit_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        f(self);
        for child in &mut self.children {
            child.visit_mut(f);
        }
    }

    /// Descendants carrying the given class
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|el| el.has_class(class))
            .collect()
    }

    /// Own text followed by all descendant text, space separated
    #[must_use]
    pub fn text_content(&self) -> String {
        self.descendants()
            .into_iter()
            .filter_map(|el| el.text.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_class_is_idempotent() {
        let mut el = Element::block("service-node");
        el.toggle_class("selected", true);
        el.toggle_class("selected", true);
        assert_eq!(el.classes, vec!["service-node", "selected"]);

        el.toggle_class("selected", false);
        el.toggle_class("selected", false);
        assert_eq!(el.classes, vec!["service-node"]);
    }

    #[test]
    fn descendants_are_pre_order() {
        let tree = Element::block("root")
            .with_child(Element::paragraph("a").with_child(Element::item("b")))
            .with_child(Element::paragraph("c"));
        assert_eq!(tree.text_content(), "a b c");
    }
}
