// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Manifest envelope, kind contract and render handler.
//!
//! A [`Manifest`] is one request's worth of configuration wrapped in the
//! fixed Kubernetes document shape: `apiVersion` and `kind` (stamped from
//! the kind's constants, never caller-supplied), restricted [`ObjectMeta`]
//! and an optional typed spec. Rendering serializes the document to YAML
//! with sparse semantics: absent optional fields never appear in the output,
//! not even as nulls.
//!
//! Rendering is deterministic. Struct fields serialize in declaration order
//! and maps are `BTreeMap`s, so identical input always produces byte
//! identical output.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ManifestError;
use crate::schema::Schema;

/// Restricted object metadata accepted by manifest data sources.
///
/// Unlike full Kubernetes `ObjectMeta`, only the fields a manifest author
/// controls are accepted, and both `name` and `namespace` are mandatory.
/// Key syntax for `labels` and `annotations` is enforced during decoding by
/// [`crate::validation`].
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct ObjectMeta {
    /// Unique name of the resource within its namespace.
    ///
    /// Must be a valid RFC 1123 DNS subdomain.
    #[schemars(length(min = 1, max = 253))]
    pub name: String,

    /// Namespace the resource belongs to.
    ///
    /// Must be a valid RFC 1123 DNS label.
    #[schemars(length(min = 1, max = 63))]
    pub namespace: String,

    /// Map of string keys and values that can be used to organize and
    /// categorize objects. Keys must be valid Kubernetes qualified names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,

    /// Unstructured key/value map stored with the resource. Keys must be
    /// valid Kubernetes qualified names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

/// Contract implemented by every spec type this crate serves.
///
/// The constants identify the kind; [`ManifestKind::schema`] exposes the
/// process-wide shared descriptor, built once and never torn down.
pub trait ManifestKind:
    Clone + std::fmt::Debug + Serialize + DeserializeOwned + JsonSchema + Sized + 'static
{
    /// Resource kind string stamped into rendered manifests.
    const KIND: &'static str;

    /// API group, shared by every kind in this crate.
    const GROUP: &'static str = constants::GROUP;

    /// API version, shared by every kind in this crate.
    const VERSION: &'static str = constants::VERSION;

    /// The shared, read-only schema descriptor for this kind.
    fn schema() -> &'static Schema;

    /// `group/version` identity string, e.g. `canaries.flanksource.com/v1`.
    fn api_version() -> String {
        format!("{}/{}", Self::GROUP, Self::VERSION)
    }

    /// Externally visible resource type name for this kind.
    ///
    /// Formed by concatenating the caller-supplied provider prefix with the
    /// fixed per-kind suffix, e.g.
    /// `k8s_canaries_flanksource_com_component_v1_manifest`.
    fn type_name(prefix: &str) -> String {
        format!(
            "{}_{}_{}_{}_manifest",
            prefix,
            Self::GROUP.replace(['.', '-'], "_"),
            kind_snake(Self::KIND),
            Self::VERSION
        )
    }
}

/// Caller-supplied configuration, decoded before identity stamping.
///
/// Identity fields are deliberately absent: callers cannot override
/// `apiVersion` or `kind`, and unknown keys in the input are ignored.
#[derive(Clone, Debug, Deserialize)]
#[serde(bound(deserialize = "S: Deserialize<'de>"))]
pub struct ManifestConfig<S> {
    /// Required object metadata.
    pub metadata: ObjectMeta,

    /// Optional typed spec; absent means "not present".
    #[serde(default)]
    pub spec: Option<S>,
}

/// One manifest document: identity fields, metadata and spec.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest<S> {
    /// Fixed `group/version` identity, stamped at construction.
    pub api_version: String,

    /// Fixed resource kind, stamped at construction.
    pub kind: String,

    /// Object metadata.
    pub metadata: ObjectMeta,

    /// Typed spec; omitted from output when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<S>,
}

impl<S: ManifestKind> Manifest<S> {
    /// Assemble a manifest, stamping the identity fields from the kind's
    /// constants.
    pub fn new(metadata: ObjectMeta, spec: Option<S>) -> Self {
        Self {
            api_version: S::api_version(),
            kind: S::KIND.to_string(),
            metadata,
            spec,
        }
    }

    /// Render the manifest to YAML.
    ///
    /// Idempotent: identical input produces byte-identical output. The
    /// rendered text never contains the computed output field itself.
    ///
    /// # Errors
    ///
    /// [`ManifestError::Serialization`] when the YAML emitter fails; no
    /// partial output is returned.
    pub fn render(&self) -> Result<String, ManifestError> {
        serde_yaml::to_string(self).map_err(|error| ManifestError::Serialization {
            kind: self.kind.clone(),
            reason: error.to_string(),
        })
    }
}

impl<S: ManifestKind> From<ManifestConfig<S>> for Manifest<S> {
    fn from(config: ManifestConfig<S>) -> Self {
        Self::new(config.metadata, config.spec)
    }
}

/// A read response: the manifest plus the computed output field.
#[derive(Clone, Debug, Serialize)]
pub struct ManifestState<S> {
    /// The manifest echoed back to the caller.
    #[serde(flatten)]
    pub manifest: Manifest<S>,

    /// The rendered manifest in YAML format.
    pub yaml: String,
}

/// Lowercase a CamelCase kind with `_` separators (`Component` →
/// `component`, `IPPool` → `i_p_pool` is avoided by folding runs).
pub(crate) fn kind_snake(kind: &str) -> String {
    let mut out = String::with_capacity(kind.len() + 4);
    let mut prev_upper = false;
    for (index, ch) in kind.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if index > 0 && !prev_upper {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
            prev_upper = true;
        } else {
            out.push(ch);
            prev_upper = false;
        }
    }
    out
}
