//! Interaction controller
//!
//! Owns the session state and the stateful renderers, feeds events through the
//! state machine, and applies the resulting effects to a view surface. Every
//! dispatch runs to completion before returning, so a render pass always sees one
//! consistent `{scenario, selected node}` pair.

use crate::state_machine::{startup, transition, Effect, IgnoreReason, SessionState, Transition};
use evo_analysis::{analyze, ScenarioMetrics, SummaryBadge};
use evo_catalog::{ScenarioRecord, ScenarioStore};
use evo_view::{
    render_diff, render_header, render_picker, DependencyGraphRenderer, DetailsMode, DetailsPanel,
    ViewEvent, ViewSurface,
};

/// Outcome of a dispatched event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// State changed and the surface was updated
    Applied,
    /// Nothing changed
    Ignored(IgnoreReason),
}

/// Drives one interactive session over a scenario store
#[derive(Debug)]
pub struct InteractionController<'s> {
    store: &'s ScenarioStore,
    scenario: &'s ScenarioRecord,
    state: SessionState,
    metrics: ScenarioMetrics,
    graph: DependencyGraphRenderer,
    details: DetailsPanel,
}

impl<'s> InteractionController<'s> {
    /// Start a session: default scenario, no selection, everything rendered
    pub fn start<S: ViewSurface + ?Sized>(store: &'s ScenarioStore, surface: &mut S) -> Self {
        let (state, effects) = startup(store);
        let scenario = store.default_scenario();
        let mut controller = Self {
            store,
            scenario,
            metrics: analyze(scenario),
            state,
            graph: DependencyGraphRenderer::new(),
            details: DetailsPanel::new(),
        };
        tracing::info!("Session started on scenario {}", scenario.id);
        for effect in effects {
            controller.apply(effect, surface);
        }
        controller
    }

    /// Feed one event through the state machine
    pub fn dispatch<S: ViewSurface + ?Sized>(&mut self, event: &ViewEvent, surface: &mut S) -> Dispatch {
        match transition(self.store, &self.state, event) {
            Transition::Applied { state, effects } => {
                self.state = state;
                for effect in effects {
                    self.apply(effect, surface);
                }
                Dispatch::Applied
            }
            Transition::Ignored(reason) => {
                tracing::debug!(id = event.id(), "Ignoring event: {}", reason);
                Dispatch::Ignored(reason)
            }
        }
    }

    /// Dispatch a sequence of events, returning how many applied
    pub fn replay<'e, S, I>(&mut self, events: I, surface: &mut S) -> usize
    where
        S: ViewSurface + ?Sized,
        I: IntoIterator<Item = &'e ViewEvent>,
    {
        events
            .into_iter()
            .filter(|event| self.dispatch(event, surface) == Dispatch::Applied)
            .count()
    }

    fn apply<S: ViewSurface + ?Sized>(&mut self, effect: Effect<'s>, surface: &mut S) {
        match effect {
            Effect::RenderScenario(scenario) => {
                if scenario.id != self.scenario.id {
                    tracing::info!("Switching scenario {} -> {}", self.scenario.id, scenario.id);
                }
                self.scenario = scenario;
                self.metrics = analyze(scenario);

                render_picker(self.store, &scenario.id, surface);
                render_header(scenario, &SummaryBadge::new(scenario, self.metrics), surface);
                render_diff(&scenario.diff, surface);
                self.graph.render(scenario, surface);
                self.details.render_default(scenario, &self.metrics, surface);
            }
            Effect::SelectNode { scenario, node } => {
                self.graph.highlight(&node.id, surface);
                self.details.render_node(node, scenario, surface);
            }
        }
    }

    /// Current state snapshot
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn scenario(&self) -> &'s ScenarioRecord {
        self.scenario
    }

    #[must_use]
    pub fn metrics(&self) -> ScenarioMetrics {
        self.metrics
    }

    #[must_use]
    pub fn details_mode(&self) -> &DetailsMode {
        self.details.mode()
    }

    #[must_use]
    pub fn graph(&self) -> &DependencyGraphRenderer {
        &self.graph
    }

    #[must_use]
    pub fn store(&self) -> &'s ScenarioStore {
        self.store
    }
}
