//! Two-column diff presentation
//!
//! Turns a scenario [`Diff`] into a [`DiffView`]: removed fields on the v1 side,
//! added and changed fields on the v2 side, each entry tagged breaking or
//! non-breaking. Lists are never padded here; the empty-list placeholder is a
//! rendering concern.

use evo_catalog::{Diff, FieldChange};
use serde::Serialize;

/// Breaking tag attached to a diff entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeTag {
    /// Consumers must change
    Breaking,
    /// Safe for existing consumers
    NonBreaking,
}

impl ChangeTag {
    /// CSS class for the tag
    #[inline]
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Breaking => "diff-field-breaking",
            Self::NonBreaking => "diff-field-nonbreaking",
        }
    }
}

/// One line of the diff view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffEntry {
    /// Display text
    pub text: String,
    /// Breaking tag
    pub tag: ChangeTag,
}

impl DiffEntry {
    fn new(text: impl Into<String>, tag: ChangeTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }

    fn from_change(change: &FieldChange) -> Self {
        let tag = if change.classification().is_breaking() {
            ChangeTag::Breaking
        } else {
            ChangeTag::NonBreaking
        };
        Self::new(
            format!("{}: {} → {}", change.field, change.from, change.to),
            tag,
        )
    }
}

/// Entry counts per list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
}

impl std::fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} added · {} removed · {} changed",
            self.added, self.removed, self.changed
        )
    }
}

/// Display-ready diff
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffView {
    pub summary: DiffSummary,
    /// v1 column: always breaking
    pub removed: Vec<DiffEntry>,
    /// v2 column: always non-breaking
    pub added: Vec<DiffEntry>,
    /// v2 column: tagged from the change's impact label
    pub changed: Vec<DiffEntry>,
}

/// Present a diff as a [`DiffView`]
#[must_use]
pub fn present(diff: &Diff) -> DiffView {
    DiffView {
        summary: DiffSummary {
            added: diff.added.len(),
            removed: diff.removed.len(),
            changed: diff.changed.len(),
        },
        removed: diff
            .removed
            .iter()
            .map(|text| DiffEntry::new(text.as_str(), ChangeTag::Breaking))
            .collect(),
        added: diff
            .added
            .iter()
            .map(|text| DiffEntry::new(text.as_str(), ChangeTag::NonBreaking))
            .collect(),
        changed: diff.changed.iter().map(DiffEntry::from_change).collect(),
    }
}
