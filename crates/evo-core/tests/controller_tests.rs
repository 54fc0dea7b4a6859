use evo_analysis::ScenarioMetrics;
use evo_core::{Dispatch, IgnoreReason, InteractionController, SessionState};
use evo_test_utils::{order_placed_like, sample, scenarios_sharing_node_c, store_of};
use evo_view::{DetailsMode, Document, Region, ViewEvent, SELECTED_CLASS};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn startup_renders_default_scenario() {
    let store = sample();
    let mut doc = Document::new();
    let controller = InteractionController::start(&store, &mut doc);

    assert_eq!(
        controller.state(),
        &SessionState {
            scenario_id: "order_placed_v2".into(),
            selected_node_id: None,
        }
    );
    assert_eq!(doc.picker_selected(), Some("order_placed_v2"));
    assert_eq!(doc.picker().len(), 3);
    for region in Region::ALL {
        assert!(doc.region(region).is_some(), "{region:?} not rendered");
    }
    assert_eq!(controller.details_mode(), &DetailsMode::Default);
    assert!(doc.selected_node_ids().is_empty());
}

#[test]
fn order_placed_metrics_end_to_end() {
    let store = store_of(vec![order_placed_like()]);
    let mut doc = Document::new();
    let controller = InteractionController::start(&store, &mut doc);

    assert_eq!(
        controller.metrics(),
        ScenarioMetrics {
            changed_fields_count: 5,
            breaking_count: 2,
        }
    );
    assert_eq!(
        doc.region_text(Region::SummaryBadge),
        "2 breaking consumers · High impact · 5 field changes across v1 → v2"
    );
}

#[test]
fn node_click_highlights_and_shows_details() {
    let store = sample();
    let mut doc = Document::new();
    let mut controller = InteractionController::start(&store, &mut doc);

    let outcome = controller.dispatch(&ViewEvent::node("billing-service"), &mut doc);
    assert_eq!(outcome, Dispatch::Applied);
    assert_eq!(controller.state().selected_node_id.as_deref(), Some("billing-service"));
    assert_eq!(doc.selected_node_ids(), vec!["billing-service"]);
    assert_eq!(
        controller.details_mode(),
        &DetailsMode::Node("billing-service".into())
    );
    let details = doc.region_text(Region::DetailsCard);
    assert!(details.starts_with("Billing Service"));
    assert!(details.contains("Consumer · invoices orders · High impact"));
    assert!(details.contains("Update billing status mapping for AUTHORIZED vs CAPTURED."));

    controller.dispatch(&ViewEvent::node("inventory-service"), &mut doc);
    assert_eq!(doc.selected_node_ids(), vec!["inventory-service"]);
}

#[test]
fn switching_scenario_drops_selection_even_for_shared_id() {
    let store = store_of(scenarios_sharing_node_c());
    let mut doc = Document::new();
    let mut controller = InteractionController::start(&store, &mut doc);

    controller.dispatch(&ViewEvent::node("C"), &mut doc);
    assert_eq!(doc.selected_node_ids(), vec!["C"]);

    let outcome = controller.dispatch(&ViewEvent::scenario("second"), &mut doc);
    assert_eq!(outcome, Dispatch::Applied);
    assert_eq!(controller.state().selected_node_id, None);
    assert!(doc.selected_node_ids().is_empty());
    assert_eq!(controller.details_mode(), &DetailsMode::Default);
    assert!(doc
        .region_text(Region::DetailsCard)
        .starts_with("Impact Details"));
    assert_eq!(doc.picker_selected(), Some("second"));
}

#[test]
fn unknown_scenario_changes_nothing() {
    let store = sample();
    let mut doc = Document::new();
    let mut controller = InteractionController::start(&store, &mut doc);
    controller.dispatch(&ViewEvent::node("event-bus"), &mut doc);

    let before_state = controller.state().clone();
    let before_details = doc.region(Region::DetailsCard).cloned();

    let outcome = controller.dispatch(&ViewEvent::scenario("no_such_scenario"), &mut doc);
    assert_eq!(
        outcome,
        Dispatch::Ignored(IgnoreReason::UnknownScenario("no_such_scenario".into()))
    );
    assert_eq!(controller.state(), &before_state);
    assert_eq!(doc.region(Region::DetailsCard).cloned(), before_details);
    assert_eq!(doc.selected_node_ids(), vec!["event-bus"]);
}

#[test]
fn reselecting_current_scenario_still_clears_selection() {
    let store = sample();
    let mut doc = Document::new();
    let mut controller = InteractionController::start(&store, &mut doc);
    controller.dispatch(&ViewEvent::node("event-bus"), &mut doc);

    controller.dispatch(&ViewEvent::scenario("order_placed_v2"), &mut doc);
    assert_eq!(controller.state().selected_node_id, None);
    assert!(doc
        .node_elements()
        .iter()
        .all(|el| !el.has_class(SELECTED_CLASS)));
}

#[test]
fn picker_option_event_switches_scenario_and_map() {
    let store = sample();
    let mut doc = Document::new();
    let mut controller = InteractionController::start(&store, &mut doc);
    assert_eq!(controller.store().len(), doc.picker().len());

    let option = doc.picker()[2].clone();
    assert_eq!(option.select_event(), ViewEvent::scenario("invoice_issued_v2"));
    assert_eq!(controller.dispatch(&option.select_event(), &mut doc), Dispatch::Applied);

    assert_eq!(doc.picker_selected(), Some("invoice_issued_v2"));
    assert_eq!(
        controller.graph().rendered_ids().collect::<Vec<_>>(),
        vec![
            "billing-core",
            "notification-service",
            "collections-system",
            "finance-warehouse"
        ]
    );
    assert_eq!(controller.graph().selected(), None);
}

#[test]
fn replay_counts_applied_events() {
    let store = sample();
    let mut doc = Document::new();
    let mut controller = InteractionController::start(&store, &mut doc);

    let events = [
        ViewEvent::scenario("user_profile_v2"),
        ViewEvent::node("fraud-service"),
        ViewEvent::node("billing-service"),
        ViewEvent::scenario("missing"),
    ];
    assert_eq!(controller.replay(&events, &mut doc), 2);
    assert_eq!(controller.scenario().id, "user_profile_v2");
    assert_eq!(controller.state().selected_node_id.as_deref(), Some("fraud-service"));
}

fn event() -> impl Strategy<Value = ViewEvent> {
    let scenario_ids = prop_oneof![
        Just("order_placed_v2"),
        Just("user_profile_v2"),
        Just("invoice_issued_v2"),
        Just("unknown"),
    ];
    let node_ids = prop_oneof![
        Just("order-service"),
        Just("billing-service"),
        Just("cdc-pipeline"),
        Just("data-lake"),
        Just("billing-core"),
        Just("finance-warehouse"),
        Just("ghost"),
    ];
    prop_oneof![
        scenario_ids.prop_map(ViewEvent::scenario),
        node_ids.prop_map(ViewEvent::node),
    ]
}

proptest! {
    #[test]
    fn prop_state_and_surface_stay_consistent(events in proptest::collection::vec(event(), 0..40)) {
        let store = sample();
        let mut doc = Document::new();
        let mut controller = InteractionController::start(&store, &mut doc);

        for event in &events {
            let before = controller.state().clone();
            let outcome = controller.dispatch(event, &mut doc);
            let after = controller.state().clone();

            prop_assert!(after.is_consistent_with(&store));
            match (&outcome, event) {
                (Dispatch::Ignored(_), _) => prop_assert_eq!(&before, &after),
                (Dispatch::Applied, ViewEvent::ScenarioSelected(_)) => {
                    prop_assert_eq!(&after.selected_node_id, &None);
                }
                (Dispatch::Applied, ViewEvent::NodeClicked(id)) => {
                    prop_assert_eq!(after.selected_node_id.as_deref(), Some(id.as_str()));
                }
            }

            let shown: Vec<String> = doc.selected_node_ids().into_iter().map(String::from).collect();
            let expected: Vec<String> = after.selected_node_id.iter().cloned().collect();
            prop_assert_eq!(shown, expected);
            prop_assert_eq!(doc.picker_selected(), Some(after.scenario_id.as_str()));
        }
    }
}
