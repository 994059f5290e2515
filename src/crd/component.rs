// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The `Component` manifest kind.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::manifest::ManifestKind;
use crate::schema::Schema;
use crate::validation::Validator;

use super::{
    ComponentCheck, ConfigSelector, ForEach, LogSelector, Property, Relationship,
    ResourceSelector, Summary, Template,
};

/// Kind-level documentation for the schema descriptor.
const DESCRIPTION: &str =
    "Component is a node in a topology tree: health checks, display properties, \
     relationships and child components, rendered as a canaries.flanksource.com/v1 manifest";

/// Spec of a single topology component.
///
/// A component describes one node in the topology tree: how it is looked up,
/// which checks and logs feed its health, how it is displayed, and which
/// child components hang off it. Children are free-form values because the
/// upstream schema does not constrain their depth.
///
/// # Example
///
/// ```yaml
/// apiVersion: canaries.flanksource.com/v1
/// kind: Component
/// metadata:
///   name: payments-db
///   namespace: production
/// spec:
///   type: database
///   icon: postgres
///   selectors:
///     - labelSelector: app=payments,tier=db
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    /// Health checks attached to this component, inline or by selector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<ComponentCheck>>,

    /// Child components. Free-form upstream, carried verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<serde_json::Value>>,

    /// Config items linked to this component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configs: Option<Vec<ConfigSelector>>,

    /// Templates applied to every item produced by `lookup`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_each: Option<ForEach>,

    /// Hide the component from the default topology view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,

    /// Icon shown for the component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Expression producing a stable component id from lookup results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Template>,

    /// Labels applied to the component. Keys must be valid Kubernetes
    /// qualified names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,

    /// Lifecycle stage of the component, e.g. `production`, `staging`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<String>,

    /// Log sources attached to this component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs: Option<Vec<LogSelector>>,

    /// Canary lookup that instantiates components dynamically. Free-form
    /// upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookup: Option<serde_json::Value>,

    /// Display name; falls back to the resource name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Namespace the component reports itself under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Sort order among sibling components.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    /// Team or person that owns the component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Expression locating the parent component for lookup-produced
    /// children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_lookup: Option<Template>,

    /// Display properties of the component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,

    /// Relationships to other resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Vec<Relationship>>,

    /// Single resource selector. Superseded by `selectors`; both are
    /// accepted and may coexist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<ResourceSelector>,

    /// Resource selectors binding live resources to this component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selectors: Option<Vec<ResourceSelector>>,

    /// CEL expression deriving the component status from its state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_expr: Option<String>,

    /// Rolled-up health counts, normally computed upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,

    /// Tooltip shown on hover.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,

    /// Component type, e.g. `database`, `website`, `service`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

impl ManifestKind for ComponentSpec {
    const KIND: &'static str = "Component";

    fn schema() -> &'static Schema {
        static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
            Schema::for_kind::<ComponentSpec>(DESCRIPTION)
                .with_validator("spec.labels", Validator::LabelKeys)
        });
        &SCHEMA
    }
}

#[cfg(test)]
#[path = "component_tests.rs"]
mod component_tests;
