// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The `Topology` manifest kind.

use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::manifest::ManifestKind;
use crate::schema::Schema;
use crate::validation::Validator;

use super::{ComponentSpec, ConfigSelector, Property, ResourceSelector, Template};

/// Kind-level documentation for the schema descriptor.
const DESCRIPTION: &str =
    "Topology is a scheduled tree of components with grouping rules, rendered as a \
     canaries.flanksource.com/v1 manifest";

/// Rule grouping looked-up components into synthetic parents.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupBy {
    /// Group components matched by this selector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<ResourceSelector>,

    /// Group components by the value of this tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Spec of a topology.
///
/// A topology is the root of a component tree, re-evaluated on a schedule.
/// Its direct children are fully typed [`ComponentSpec`]s; deeper descendants
/// travel inside each child's free-form `components` list.
///
/// # Example
///
/// ```yaml
/// apiVersion: canaries.flanksource.com/v1
/// kind: Topology
/// metadata:
///   name: payments
///   namespace: production
/// spec:
///   schedule: "@every 5m"
///   type: application
///   components:
///     - name: payments-db
///       type: database
///       selectors:
///         - labelSelector: app=payments,tier=db
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopologySpec {
    /// Root components of the tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<ComponentSpec>>,

    /// Config items linked to the topology itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configs: Option<Vec<ConfigSelector>>,

    /// Grouping rule for looked-up components.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<GroupBy>,

    /// Icon shown for the topology.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Expression producing stable ids for looked-up components.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Template>,

    /// Team or person that owns the topology.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Display properties of the topology root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,

    /// Evaluation schedule in cron syntax, e.g. `@every 5m`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    /// Text shown for the topology root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Tooltip shown on hover.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,

    /// Topology type, e.g. `application`, `cluster`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

impl ManifestKind for TopologySpec {
    const KIND: &'static str = "Topology";

    fn schema() -> &'static Schema {
        static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
            Schema::for_kind::<TopologySpec>(DESCRIPTION)
                .with_validator("spec.components.labels", Validator::LabelKeys)
        });
        &SCHEMA
    }
}

#[cfg(test)]
#[path = "topology_tests.rs"]
mod topology_tests;
