// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! End-to-end tests for the manifest read pipeline.
//!
//! These drive the public API the way an embedding provider framework
//! would: caller configuration in, validated and rendered manifest state
//! out.

use canopy::crd::{ComponentSpec, TopologySpec};
use canopy::datasource::{data_source_names, ManifestDataSource};

mod common;

#[test]
fn component_scenario_renders_expected_manifest() {
    let source = ManifestDataSource::<ComponentSpec>::new();
    let state = source.read(&common::component_config()).unwrap();

    let doc: serde_json::Value = serde_yaml::from_str(&state.yaml).unwrap();
    assert_eq!(doc["apiVersion"], "canaries.flanksource.com/v1");
    assert_eq!(doc["kind"], "Component");
    assert_eq!(doc["metadata"]["name"], "db");
    assert_eq!(doc["metadata"]["namespace"], "prod");
    assert_eq!(doc["spec"]["type"], "database");
    assert_eq!(doc["spec"]["hidden"], true);

    // nothing else leaks into spec
    assert_eq!(doc["spec"].as_object().unwrap().len(), 2);
    // the output field never contains itself
    assert!(doc.as_object().unwrap().get("yaml").is_none());
}

#[test]
fn topology_scenario_preserves_nested_paths() {
    let source = ManifestDataSource::<TopologySpec>::new();
    let state = source.read(&common::topology_config()).unwrap();

    let doc: serde_json::Value = serde_yaml::from_str(&state.yaml).unwrap();
    assert_eq!(doc["kind"], "Topology");
    assert_eq!(
        doc["spec"]["components"][0]["selectors"][0]["labelSelector"],
        "app=payments,tier=db"
    );
    assert_eq!(
        doc["spec"]["components"][0]["checks"][0]["inline"]["http"][0]["url"],
        "https://example.com/health"
    );
}

#[test]
fn rendering_is_deterministic_across_sources() {
    let source = ManifestDataSource::<TopologySpec>::new();
    let first = source.read(&common::topology_config()).unwrap();
    let second = ManifestDataSource::<TopologySpec>::new()
        .read(&common::topology_config())
        .unwrap();
    assert_eq!(first.yaml, second.yaml);
}

#[test]
fn invalid_configs_never_render() {
    let source = ManifestDataSource::<ComponentSpec>::new();
    let mut config = common::component_config();
    config["metadata"]["name"] = serde_json::Value::String(String::new());

    let diagnostics = source.read(&config).unwrap_err();
    assert!(diagnostics.mentions_path("metadata.name"));
}

#[test]
fn provider_listing_is_stable() {
    assert_eq!(
        data_source_names("k8s"),
        vec![
            "k8s_canaries_flanksource_com_component_v1_manifest".to_string(),
            "k8s_canaries_flanksource_com_topology_v1_manifest".to_string(),
        ]
    );
}

#[test]
fn state_serializes_like_a_provider_response() {
    let source = ManifestDataSource::<ComponentSpec>::new();
    let state = source.read(&common::component_config()).unwrap();

    let response = serde_json::to_value(&state).unwrap();
    assert_eq!(response["apiVersion"], "canaries.flanksource.com/v1");
    assert_eq!(response["metadata"]["name"], "db");
    assert!(response["yaml"].as_str().unwrap().contains("kind: Component"));
}
