//! Evo Core - interaction engine for the schema impact explorer
//!
//! Wires scenario selection and node clicks to the renderers:
//! - [`state_machine`]: pure `{scenario, selected node}` transitions
//! - [`InteractionController`]: applies transitions to a view surface
//! - [`ViewerConfig`]: TOML configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use evo_core::{InteractionController, ViewerConfig};
//! use evo_view::{Document, ViewEvent};
//!
//! let store = ViewerConfig::new().open_store()?;
//! let mut doc = Document::new();
//! let mut controller = InteractionController::start(&store, &mut doc);
//!
//! controller.dispatch(&ViewEvent::node("billing-service"), &mut doc);
//! println!("{}", evo_view::text::render(&doc));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod state_machine;

pub use config::{OutputFormat, ViewerConfig};
pub use controller::{Dispatch, InteractionController};
pub use error::ConfigError;
pub use state_machine::{startup, transition, Effect, IgnoreReason, SessionState, Transition};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
