//! Evo View
//!
//! The rendering side of the impact explorer. Renderers turn scenarios and the
//! derived views from `evo-analysis` into [`Element`] trees and hand them to a
//! [`ViewSurface`]; they never own page state themselves.
//!
//! ```text
//! ScenarioRecord ──> present / analyze ──> DiffView, ScenarioMetrics
//!        │                                       │
//!        └──> DependencyGraphRenderer ──┐        │
//!             DetailsPanel ─────────────┼──> ViewSurface (Document, host UI)
//!             diff card / header ───────┘        │
//!                                                └──> html::render_page, text::render
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod details;
mod diff_card;
mod document;
mod element;
mod event;
mod graph;
mod header;
mod surface;

pub mod html;
pub mod text;

pub use details::{default_view, node_view, DetailsMode, DetailsPanel, NO_FIELDS, NO_ISSUES, NO_SUMMARY};
pub use diff_card::{diff_card, render_diff, PLACEHOLDER};
pub use document::Document;
pub use element::{Element, ElementKind};
pub use event::ViewEvent;
pub use graph::{layout, DependencyGraphRenderer, NodeView, PathSlot, PathView, CONNECTOR};
pub use header::{badge_element, render_header, render_picker};
pub use surface::{picker_options, PickerOption, Region, ViewSurface, SELECTED_CLASS};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
