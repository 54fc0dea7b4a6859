//! Session state machine
//!
//! The controller's state is `{scenario, selected node}`. [`startup`] and
//! [`transition`] are pure: they read the store, never touch a surface, and return
//! the next state together with the render [`Effect`]s it implies.

use evo_catalog::{ScenarioRecord, ScenarioStore, ServiceNode};
use evo_view::ViewEvent;
use serde::Serialize;

/// Session state
///
/// # Invariants
/// - `scenario_id` names a scenario in the store.
/// - `selected_node_id`, when set, names a node of that scenario.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SessionState {
    pub scenario_id: String,
    pub selected_node_id: Option<String>,
}

impl SessionState {
    /// Check both invariants against a store
    #[must_use]
    pub fn is_consistent_with(&self, store: &ScenarioStore) -> bool {
        let Ok(scenario) = store.by_id(&self.scenario_id) else {
            return false;
        };
        self.selected_node_id
            .as_deref()
            .map_or(true, |id| scenario.contains_node(id))
    }
}

/// Render work implied by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect<'s> {
    /// Description, badge, diff, graph without highlight, default details
    RenderScenario(&'s ScenarioRecord),
    /// Graph highlight plus node details
    SelectNode {
        scenario: &'s ScenarioRecord,
        node: &'s ServiceNode,
    },
}

/// Why an event changed nothing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
pub enum IgnoreReason {
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),
    #[error("node {node_id} is not part of scenario {scenario_id}")]
    UnknownNode {
        scenario_id: String,
        node_id: String,
    },
}

/// Result of feeding one event to the machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition<'s> {
    /// State moved; apply `effects` in order
    Applied {
        state: SessionState,
        effects: Vec<Effect<'s>>,
    },
    /// State unchanged, nothing to render
    Ignored(IgnoreReason),
}

impl Transition<'_> {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Initial state: the default scenario, nothing selected
#[must_use]
pub fn startup(store: &ScenarioStore) -> (SessionState, Vec<Effect<'_>>) {
    let scenario = store.default_scenario();
    (
        SessionState {
            scenario_id: scenario.id.clone(),
            selected_node_id: None,
        },
        vec![Effect::RenderScenario(scenario)],
    )
}

/// Apply one event to `state`
///
/// Unknown scenario ids and nodes outside the current scenario are ignored.
/// Switching scenario always clears the node selection, even when the new
/// scenario has a node with the same id.
#[must_use]
pub fn transition<'s>(
    store: &'s ScenarioStore,
    state: &SessionState,
    event: &ViewEvent,
) -> Transition<'s> {
    match event {
        ViewEvent::ScenarioSelected(id) => match store.by_id(id) {
            Ok(scenario) => Transition::Applied {
                state: SessionState {
                    scenario_id: scenario.id.clone(),
                    selected_node_id: None,
                },
                effects: vec![Effect::RenderScenario(scenario)],
            },
            Err(_) => Transition::Ignored(IgnoreReason::UnknownScenario(id.clone())),
        },
        ViewEvent::NodeClicked(node_id) => {
            let found = store
                .by_id(&state.scenario_id)
                .ok()
                .and_then(|scenario| scenario.node(node_id).map(|node| (scenario, node)));
            match found {
                Some((scenario, node)) => Transition::Applied {
                    state: SessionState {
                        scenario_id: state.scenario_id.clone(),
                        selected_node_id: Some(node.id.clone()),
                    },
                    effects: vec![Effect::SelectNode { scenario, node }],
                },
                None => Transition::Ignored(IgnoreReason::UnknownNode {
                    scenario_id: state.scenario_id.clone(),
                    node_id: node_id.clone(),
                }),
            }
        }
    }
}
