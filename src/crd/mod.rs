// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Typed models for the `canaries.flanksource.com/v1` object family.
//!
//! This module defines the manifest models served by this crate, mirroring
//! the upstream CRD schemas field by field (camelCase on the wire). Shared
//! building blocks live here; the kinds themselves are:
//!
//! - [`component::ComponentSpec`] - a single topology component
//! - [`topology::TopologySpec`] - a component tree with scheduling and
//!   grouping rules
//!
//! Every field is optional and absent-by-default except where the upstream
//! schema requires it; presence and absence are distinct from empty values,
//! so absent fields never serialize. Free-form upstream fields
//! (`x-kubernetes-preserve-unknown-fields`) are carried as raw values.
//!
//! # Example
//!
//! ```rust
//! use canopy::crd::{ResourceSelector, Template};
//!
//! let selector = ResourceSelector {
//!     label_selector: Some("app=payments".to_string()),
//!     types: Some(vec!["KubernetesPod".to_string()]),
//!     ..ResourceSelector::default()
//! };
//!
//! let id = Template {
//!     javascript: Some("properties.id".to_string()),
//!     ..Template::default()
//! };
//! ```

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod component;
pub mod topology;

pub use component::ComponentSpec;
pub use topology::TopologySpec;

/// Selector matching resources by name, namespace, labels or field values.
///
/// All present clauses are ANDed; an empty selector matches nothing.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSelector {
    /// Agent that owns the matched resources. Use `all` to span agents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,

    /// How long the selector result may be served from cache.
    ///
    /// Examples: `no-cache`, `no-store`, `max-age=5m`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<String>,

    /// Field selector expression over resource fields.
    ///
    /// Example: `status=healthy,type=database`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_selector: Option<String>,

    /// Label selector expression over resource labels.
    ///
    /// Example: `environment=production,tier in (frontend)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_selector: Option<String>,

    /// Exact resource name to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Namespace to match resources in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Health statuses the matched resources must be in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statuses: Option<Vec<String>>,

    /// Resource types to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
}

/// Expression evaluated against a lookup result.
///
/// Exactly one of the fields is normally set; when several are set the
/// upstream engine picks the first non-empty one in field order.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// CEL expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expr: Option<String>,

    /// Javascript snippet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javascript: Option<String>,

    /// JSONPath expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_path: Option<String>,

    /// Go text template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// Selector matching config items in the catalog.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSelector {
    /// Config class to match, e.g. `Cluster`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Config item id to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Config item name to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Namespace of the config item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Tags the config item must carry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,

    /// Config type to match, e.g. `Kubernetes::Pod`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

/// Health check attached to a component.
///
/// Either an inline canary spec or a selector over existing checks.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentCheck {
    /// Inline canary definition. The upstream schema treats this as a
    /// free-form object, so it is carried verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<serde_json::Value>,

    /// Selector over existing checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<ResourceSelector>,
}

/// Log source attached to a component.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogSelector {
    /// Labels the log source must carry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,

    /// Name of the log source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Type of the log source, e.g. `elasticsearch`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

/// Directed relationship from a component to another resource.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    /// Reference to the related resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,

    /// Relationship type, e.g. `incoming` or `outgoing`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

/// Rolled-up health counts for a component subtree.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Check counts by state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checks: Option<BTreeMap<String, i64>>,

    /// Number of healthy descendants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healthy: Option<i64>,

    /// Open incident counts by type and severity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incidents: Option<BTreeMap<String, BTreeMap<String, i64>>>,

    /// Number of descendants in an informational state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<i64>,

    /// Config insight counts by type and severity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<BTreeMap<String, BTreeMap<String, i64>>>,

    /// Number of unhealthy descendants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unhealthy: Option<i64>,

    /// Number of descendants in a warning state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<i64>,
}

/// Hyperlink rendered next to a property.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Icon shown with the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Link text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Tooltip shown on hover.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,

    /// Link type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    /// Target URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Property value sourced from a config item in the catalog.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigLookup {
    /// Config item to read from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigSelector>,

    /// Expression applied to the config item to produce the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<Template>,

    /// Field of the config item to read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Config item id to read from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Display property of a component.
///
/// Properties carry either a literal `text`/`value` or a lookup that
/// produces one at evaluation time.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Display color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Source the value from a config item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_lookup: Option<ConfigLookup>,

    /// Show the property in the component headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<bool>,

    /// Icon shown with the property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Timestamp of the last value transition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition: Option<String>,

    /// Links rendered next to the property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,

    /// Canary lookup producing the value. Free-form upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookup: Option<serde_json::Value>,

    /// Maximum for gauge display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,

    /// Minimum for gauge display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,

    /// Property name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Sort order among sibling properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    /// Status text shown with the property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Expression producing a summary value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Template>,

    /// Literal text value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Tooltip shown on hover.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,

    /// Property type, e.g. `currency`, `url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    /// Unit of the value, e.g. `bytes`, `millicores`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Literal numeric value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

/// Templates applied to every item produced by a component lookup.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForEach {
    /// Child components instantiated per item. Free-form upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<serde_json::Value>>,

    /// Config selectors attached per item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configs: Option<Vec<ConfigSelector>>,

    /// Properties attached per item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,

    /// Relationships attached per item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Vec<Relationship>>,

    /// Selectors attached per item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selectors: Option<Vec<ResourceSelector>>,
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod mod_tests;
