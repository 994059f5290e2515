// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the shared model types

use super::*;

#[test]
fn test_resource_selector_default_is_empty() {
    let selector = ResourceSelector::default();
    assert!(selector.agent.is_none());
    assert!(selector.label_selector.is_none());
    assert!(selector.types.is_none());
}

#[test]
fn test_resource_selector_camel_case_keys() {
    let selector = ResourceSelector {
        field_selector: Some("status=healthy".to_string()),
        label_selector: Some("app=payments".to_string()),
        ..ResourceSelector::default()
    };
    let value = serde_json::to_value(&selector).unwrap();
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["fieldSelector", "labelSelector"]);
}

#[test]
fn test_template_sparse_serialization() {
    let template = Template {
        json_path: Some("$.status".to_string()),
        ..Template::default()
    };
    let value = serde_json::to_value(&template).unwrap();
    assert_eq!(value, serde_json::json!({ "jsonPath": "$.status" }));
}

#[test]
fn test_config_selector_type_key() {
    let config = ConfigSelector {
        r#type: Some("Kubernetes::Pod".to_string()),
        class: Some("Pod".to_string()),
        ..ConfigSelector::default()
    };
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["type"], "Kubernetes::Pod");
    assert_eq!(value["class"], "Pod");
}

#[test]
fn test_component_check_inline_is_verbatim() {
    let inline = serde_json::json!({ "http": [{ "url": "https://example.com" }] });
    let check = ComponentCheck {
        inline: Some(inline.clone()),
        selector: None,
    };
    let value = serde_json::to_value(&check).unwrap();
    assert_eq!(value["inline"], inline);
    assert!(value.as_object().unwrap().get("selector").is_none());
}

#[test]
fn test_relationship_ref_key() {
    let relationship = Relationship {
        r#ref: Some("other-component".to_string()),
        r#type: Some("outgoing".to_string()),
    };
    let value = serde_json::to_value(&relationship).unwrap();
    assert_eq!(value["ref"], "other-component");
}

#[test]
fn test_summary_nested_counts() {
    let mut severities = BTreeMap::new();
    severities.insert("critical".to_string(), 2_i64);
    let mut incidents = BTreeMap::new();
    incidents.insert("availability".to_string(), severities);

    let summary = Summary {
        healthy: Some(10),
        incidents: Some(incidents),
        ..Summary::default()
    };
    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["healthy"], 10);
    assert_eq!(value["incidents"]["availability"]["critical"], 2);
    assert!(value.as_object().unwrap().get("unhealthy").is_none());
}

#[test]
fn test_property_round_trip() {
    let yaml = "name: cpu\nunit: millicores\nvalue: 500\nheadline: true\n";
    let property: Property = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(property.name.as_deref(), Some("cpu"));
    assert_eq!(property.value, Some(500));
    assert_eq!(property.headline, Some(true));
    assert!(property.links.is_none());
}

#[test]
fn test_for_each_deserializes_camel_case() {
    let yaml = "relationships:\n  - ref: parent\n    type: incoming\n";
    let for_each: ForEach = serde_yaml::from_str(yaml).unwrap();
    let relationships = for_each.relationships.unwrap();
    assert_eq!(relationships.len(), 1);
    assert_eq!(relationships[0].r#ref.as_deref(), Some("parent"));
}
