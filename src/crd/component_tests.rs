// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the Component kind

use super::ComponentSpec;
use crate::crd::ResourceSelector;
use crate::manifest::ManifestKind;

#[test]
fn test_kind_constants() {
    assert_eq!(ComponentSpec::KIND, "Component");
    assert_eq!(ComponentSpec::GROUP, "canaries.flanksource.com");
    assert_eq!(ComponentSpec::VERSION, "v1");
}

#[test]
fn test_default_spec_serializes_empty() {
    let spec = ComponentSpec::default();
    let value = serde_json::to_value(&spec).unwrap();
    assert_eq!(value, serde_json::json!({}));
}

#[test]
fn test_spec_camel_case_keys() {
    let spec = ComponentSpec {
        status_expr: Some("summary.healthy > 0".to_string()),
        parent_lookup: Some(crate::crd::Template::default()),
        for_each: Some(crate::crd::ForEach::default()),
        ..ComponentSpec::default()
    };
    let value = serde_json::to_value(&spec).unwrap();
    let object = value.as_object().unwrap();
    assert!(object.contains_key("statusExpr"));
    assert!(object.contains_key("parentLookup"));
    assert!(object.contains_key("forEach"));
}

#[test]
fn test_deserialize_from_manifest_yaml() {
    let yaml = r"
type: database
icon: postgres
hidden: true
order: 3
selectors:
  - labelSelector: app=payments,tier=db
    namespace: production
";
    let spec: ComponentSpec = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(spec.r#type.as_deref(), Some("database"));
    assert_eq!(spec.hidden, Some(true));
    assert_eq!(spec.order, Some(3));
    let selectors = spec.selectors.unwrap();
    assert_eq!(
        selectors[0].label_selector.as_deref(),
        Some("app=payments,tier=db")
    );
}

#[test]
fn test_legacy_selector_and_selectors_coexist() {
    let spec = ComponentSpec {
        selector: Some(ResourceSelector {
            label_selector: Some("app=legacy".to_string()),
            ..ResourceSelector::default()
        }),
        selectors: Some(vec![ResourceSelector {
            label_selector: Some("app=new".to_string()),
            ..ResourceSelector::default()
        }]),
        ..ComponentSpec::default()
    };
    let value = serde_json::to_value(&spec).unwrap();
    assert_eq!(value["selector"]["labelSelector"], "app=legacy");
    assert_eq!(value["selectors"][0]["labelSelector"], "app=new");
}

#[test]
fn test_child_components_stay_free_form() {
    let yaml = r"
components:
  - name: replica-1
    properties:
      anything: goes
      nested: [1, 2, 3]
";
    let spec: ComponentSpec = serde_yaml::from_str(yaml).unwrap();
    let children = spec.components.unwrap();
    assert_eq!(children[0]["name"], "replica-1");
    assert_eq!(children[0]["properties"]["nested"][2], 3);
}
