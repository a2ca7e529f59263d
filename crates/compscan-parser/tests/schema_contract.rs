//! Serialized records validate against their exported JSON Schema.

use compscan_parser::{ComponentMetadata, FileAnalysis, analyze_source};
use schemars::schema_for;

const SAMPLE: &str = include_str!("fixtures/sample.tsx");

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn sample() -> FileAnalysis {
    analyze_source(SAMPLE, "sample.tsx").expect("fixture should parse")
}

#[test]
fn every_component_matches_record_schema() {
    let schema = serde_json::to_value(schema_for!(ComponentMetadata)).unwrap();
    let analysis = sample();
    assert!(!analysis.components.is_empty());

    for component in &analysis.components {
        let instance = serde_json::to_value(component).unwrap();
        let errors = validate_against_schema(&schema, &instance);
        assert!(
            errors.is_empty(),
            "schema validation failed for {}: {errors:?}",
            component.name
        );
    }
}

#[test]
fn file_analysis_matches_schema() {
    let schema = serde_json::to_value(schema_for!(FileAnalysis)).unwrap();
    let instance = serde_json::to_value(sample()).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

#[test]
fn record_roundtrips_through_json() {
    let analysis = sample();
    let json = serde_json::to_string_pretty(&analysis).unwrap();
    let recovered: FileAnalysis = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, analysis);
}

#[test]
fn downstream_field_names() {
    let analysis = sample();
    let card = analysis.component("UserCard").expect("UserCard");
    let value = serde_json::to_value(card).unwrap();

    let prop = &value["props"][0];
    for field in ["name", "type", "required", "defaultValue", "isCallback", "isBoolean"] {
        assert!(prop.get(field).is_some(), "prop field {field} missing");
    }
    let conditional = &value["conditionals"][0];
    assert!(conditional.get("hasTrueBranch").is_some());
    assert!(conditional.get("hasFalseBranch").is_some());
    assert_eq!(value["wrapper"], "none");
}
