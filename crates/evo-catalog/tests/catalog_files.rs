use evo_catalog::{load_path, load_store, CatalogError, FieldImpact, Severity};
use pretty_assertions::assert_eq;
use std::io::Write;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_json_file_with_original_field_names() {
    let file = write_temp(
        ".json",
        r#"[{
            "id": "order_placed_v2",
            "label": "OrderPlaced v1 → v2",
            "riskLevel": "high",
            "diff": {
                "added": ["a", "b"],
                "removed": ["c"],
                "changed": [
                    {"field": "total_amount", "from": "int", "to": "decimal", "impact": "breaking"},
                    {"field": "status", "from": "enum", "to": "enum", "impact": "medium"}
                ]
            },
            "nodes": [
                {"id": "billing", "name": "Billing", "role": "Consumer", "impactLevel": "high",
                 "impactSummary": "breaks", "fieldsImpacted": ["total_amount"], "issues": ["fix"]}
            ],
            "paths": [["billing"]]
        }]"#,
    );

    let records = load_path(file.path()).unwrap();
    let scenario = &records[0];
    assert_eq!(scenario.risk_level, Severity::High);
    assert_eq!(scenario.diff.len(), 5);
    assert_eq!(
        scenario
            .diff
            .changed
            .iter()
            .map(|c| c.classification())
            .collect::<Vec<_>>(),
        vec![FieldImpact::Breaking, FieldImpact::NonBreaking]
    );
    assert_eq!(scenario.nodes[0].fields_impacted, vec!["total_amount".to_string()]);
}

#[test]
fn loads_yml_extension() {
    let file = write_temp(".yml", "- id: only\n  label: Only\n");
    let store = load_store(file.path()).unwrap();
    assert_eq!(store.default_scenario().label, "Only");
    assert!(store.default_scenario().diff.is_empty());
}

#[test]
fn empty_file_catalog_is_rejected() {
    let file = write_temp(".json", "[]");
    assert!(matches!(load_store(file.path()), Err(CatalogError::EmptyCatalog)));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn parse_error_names_file_and_field() {
    let file = write_temp(".json", r#"{"scenarios":[{"id":"a","nodes":"oops"}]}"#);
    let err = load_path(file.path()).unwrap_err();

    let CatalogError::Parse { path, message, .. } = &err else {
        panic!("expected a parse error, got {err:?}");
    };
    assert_eq!(path.as_deref(), Some(file.path()));
    assert!(message.contains("scenarios[0].nodes"), "{message}");

    let rendered = err.to_string();
    assert!(rendered.contains(&file.path().display().to_string()), "{rendered}");
    assert!(rendered.contains("nodes"), "{rendered}");
}
