//! User events reported by a view surface

use serde::{Deserialize, Serialize};

/// Event handed from the host surface to the interaction controller
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "event", content = "id", rename_all = "snake_case")]
pub enum ViewEvent {
    /// The scenario picker changed to this scenario id
    ScenarioSelected(String),
    /// A node element with this id was clicked
    NodeClicked(String),
}

impl ViewEvent {
    #[must_use]
    pub fn scenario(id: impl Into<String>) -> Self {
        Self::ScenarioSelected(id.into())
    }

    #[must_use]
    pub fn node(id: impl Into<String>) -> Self {
        Self::NodeClicked(id.into())
    }

    /// Id carried by the event
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::ScenarioSelected(id) | Self::NodeClicked(id) => id,
        }
    }
}
