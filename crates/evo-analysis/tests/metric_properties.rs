use evo_analysis::{analyze, present, ChangeTag, ScenarioMetrics, SummaryBadge};
use evo_catalog::{Diff, FieldChange, ScenarioRecord, ServiceNode, Severity};
use evo_test_utils::{order_placed_like, sample};
use proptest::prelude::*;

fn severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Low),
        Just(Severity::Medium),
        Just(Severity::High),
    ]
}

fn impact_label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("breaking".to_string()),
        Just("medium".to_string()),
        Just("non-breaking".to_string()),
        Just(String::new()),
    ]
}

fn diff() -> impl Strategy<Value = Diff> {
    (
        proptest::collection::vec("[a-z_]{1,12}", 0..6),
        proptest::collection::vec("[a-z_]{1,12}", 0..6),
        proptest::collection::vec(("[a-z_]{1,12}", impact_label()), 0..6),
    )
        .prop_map(|(added, removed, changed)| Diff {
            added,
            removed,
            changed: changed
                .into_iter()
                .map(|(field, impact)| FieldChange::new(field, "old", "new", impact))
                .collect(),
        })
}

fn scenario() -> impl Strategy<Value = ScenarioRecord> {
    (diff(), proptest::collection::vec(severity(), 0..10)).prop_map(|(diff, levels)| {
        ScenarioRecord {
            id: "generated".into(),
            label: String::new(),
            description: String::new(),
            risk_level: Severity::Medium,
            diff,
            nodes: levels
                .into_iter()
                .enumerate()
                .map(|(i, level)| ServiceNode::new(format!("n{i}"), "n", "r").with_impact(level))
                .collect(),
            paths: vec![],
        }
    })
}

proptest! {
    #[test]
    fn prop_changed_fields_is_sum_of_lists(s in scenario()) {
        let metrics = analyze(&s);
        prop_assert_eq!(
            metrics.changed_fields_count,
            s.diff.added.len() + s.diff.removed.len() + s.diff.changed.len()
        );
    }

    #[test]
    fn prop_breaking_count_is_high_impact_nodes(s in scenario()) {
        let expected = s.nodes.iter().filter(|n| n.impact_level == Severity::High).count();
        prop_assert_eq!(analyze(&s).breaking_count, expected);
    }

    #[test]
    fn prop_changed_tags_follow_literal_breaking(d in diff()) {
        let view = present(&d);
        prop_assert_eq!(view.changed.len(), d.changed.len());
        for (entry, change) in view.changed.iter().zip(&d.changed) {
            let breaking = change.impact == "breaking";
            prop_assert_eq!(entry.tag == ChangeTag::Breaking, breaking);
        }
        prop_assert!(view.removed.iter().all(|e| e.tag == ChangeTag::Breaking));
        prop_assert!(view.added.iter().all(|e| e.tag == ChangeTag::NonBreaking));
    }
}

#[test]
fn order_placed_metrics() {
    assert_eq!(
        analyze(&order_placed_like()),
        ScenarioMetrics {
            changed_fields_count: 5,
            breaking_count: 2,
        }
    );
}

#[test]
fn sample_catalog_badges() {
    let store = sample();
    let badges: Vec<String> = store
        .all()
        .iter()
        .map(|s| SummaryBadge::new(s, analyze(s)).to_string())
        .collect();

    assert_eq!(
        badges,
        vec![
            "2 breaking consumers · High impact · 5 field changes across v1 → v2",
            "0 breaking consumers · Medium impact · 4 field changes across v1 → v2",
            "0 breaking consumers · Medium impact · 2 field changes across v1 → v2",
        ]
    );
}

#[test]
fn diff_view_serializes_for_export() {
    let view = present(&order_placed_like().diff);
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["summary"]["added"], 2);
    assert_eq!(json["changed"][0]["tag"], "breaking");
    assert_eq!(json["changed"][1]["tag"], "non_breaking");
}
