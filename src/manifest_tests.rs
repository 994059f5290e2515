// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

#[cfg(test)]
mod tests {
    use crate::crd::{ComponentSpec, TopologySpec};
    use crate::manifest::{kind_snake, Manifest, ManifestConfig, ManifestKind, ObjectMeta};
    use std::collections::BTreeMap;

    fn meta(name: &str, namespace: &str) -> ObjectMeta {
        ObjectMeta {
            name: name.to_string(),
            namespace: namespace.to_string(),
            labels: None,
            annotations: None,
        }
    }

    #[test]
    fn test_identity_is_stamped() {
        let manifest = Manifest::<ComponentSpec>::new(meta("db", "prod"), None);
        assert_eq!(manifest.api_version, "canaries.flanksource.com/v1");
        assert_eq!(manifest.kind, "Component");

        let manifest = Manifest::<TopologySpec>::new(meta("t", "prod"), None);
        assert_eq!(manifest.kind, "Topology");
    }

    #[test]
    fn test_render_contains_identity_lines() {
        let manifest = Manifest::<ComponentSpec>::new(meta("db", "prod"), None);
        let yaml = manifest.render().unwrap();
        assert!(yaml.contains("apiVersion: canaries.flanksource.com/v1"));
        assert!(yaml.contains("kind: Component"));
        assert!(yaml.contains("name: db"));
        assert!(yaml.contains("namespace: prod"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let spec = ComponentSpec {
            r#type: Some("database".to_string()),
            hidden: Some(true),
            ..ComponentSpec::default()
        };
        let manifest = Manifest::<ComponentSpec>::new(meta("db", "prod"), Some(spec));
        let first = manifest.render().unwrap();
        let second = manifest.render().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_omits_absent_spec() {
        let manifest = Manifest::<ComponentSpec>::new(meta("db", "prod"), None);
        let yaml = manifest.render().unwrap();
        assert!(!yaml.contains("spec:"));
        assert!(!yaml.contains("null"));
    }

    #[test]
    fn test_render_omits_absent_optional_fields() {
        let spec = ComponentSpec {
            r#type: Some("database".to_string()),
            ..ComponentSpec::default()
        };
        let manifest = Manifest::<ComponentSpec>::new(meta("db", "prod"), Some(spec));
        let yaml = manifest.render().unwrap();
        assert!(yaml.contains("type: database"));
        assert!(!yaml.contains("icon"));
        assert!(!yaml.contains("hidden"));
        assert!(!yaml.contains("labels"));
    }

    #[test]
    fn test_metadata_maps_serialize_sorted() {
        let mut labels = BTreeMap::new();
        labels.insert("tier".to_string(), "db".to_string());
        labels.insert("app".to_string(), "payments".to_string());
        let metadata = ObjectMeta {
            labels: Some(labels),
            ..meta("db", "prod")
        };
        let manifest = Manifest::<ComponentSpec>::new(metadata, None);
        let yaml = manifest.render().unwrap();
        let app = yaml.find("app: payments").unwrap();
        let tier = yaml.find("tier: db").unwrap();
        assert!(app < tier);
    }

    #[test]
    fn test_config_decode_ignores_identity_keys() {
        let config: ManifestConfig<ComponentSpec> = serde_json::from_value(serde_json::json!({
            "apiVersion": "overridden/v9",
            "kind": "Nonsense",
            "metadata": { "name": "db", "namespace": "prod" },
        }))
        .unwrap();
        assert!(config.spec.is_none());
        let manifest = Manifest::from(config);
        assert_eq!(manifest.api_version, "canaries.flanksource.com/v1");
        assert_eq!(manifest.kind, "Component");
    }

    #[test]
    fn test_state_serializes_flattened() {
        let manifest = Manifest::<ComponentSpec>::new(meta("db", "prod"), None);
        let yaml = manifest.render().unwrap();
        let state = crate::manifest::ManifestState { manifest, yaml };
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["apiVersion"], "canaries.flanksource.com/v1");
        assert_eq!(value["kind"], "Component");
        assert!(value["yaml"].as_str().unwrap().contains("kind: Component"));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(
            ComponentSpec::type_name("k8s"),
            "k8s_canaries_flanksource_com_component_v1_manifest"
        );
        assert_eq!(
            TopologySpec::type_name("flank"),
            "flank_canaries_flanksource_com_topology_v1_manifest"
        );
    }

    #[test]
    fn test_kind_snake() {
        assert_eq!(kind_snake("Component"), "component");
        assert_eq!(kind_snake("Topology"), "topology");
        assert_eq!(kind_snake("GroupVersion"), "group_version");
        assert_eq!(kind_snake("HTTPRoute"), "httproute");
    }

    #[test]
    fn test_api_version() {
        assert_eq!(
            ComponentSpec::api_version(),
            "canaries.flanksource.com/v1"
        );
    }
}
