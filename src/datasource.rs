// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Manifest data sources: the read operation.
//!
//! A [`ManifestDataSource`] exposes one manifest kind to the surrounding
//! provider framework. Reading is a single stateless transformation per
//! request:
//!
//! 1. validate caller configuration against the kind's shared schema
//!    descriptor (every fault is collected before giving up),
//! 2. decode into the typed model,
//! 3. stamp the fixed identity fields,
//! 4. render the manifest to YAML and store it in the computed output field.
//!
//! The descriptor is the only shared state and is read-only after
//! initialization, so any number of requests may run concurrently with no
//! coordination. Nothing here performs I/O or blocks.
//!
//! # Example
//!
//! ```rust
//! use canopy::crd::ComponentSpec;
//! use canopy::datasource::ManifestDataSource;
//!
//! let source = ManifestDataSource::<ComponentSpec>::new();
//! assert_eq!(
//!     source.type_name("k8s"),
//!     "k8s_canaries_flanksource_com_component_v1_manifest"
//! );
//!
//! let state = source
//!     .read_yaml("metadata:\n  name: db\n  namespace: prod\n")
//!     .expect("valid config");
//! assert!(state.yaml.contains("kind: Component"));
//! ```

use std::marker::PhantomData;

use serde_json::Value;
use tracing::debug;

use crate::constants;
use crate::crd::{ComponentSpec, TopologySpec};
use crate::errors::{Diagnostics, ManifestError};
use crate::manifest::{Manifest, ManifestConfig, ManifestKind, ManifestState};
use crate::schema::Schema;

/// Data source serving one manifest kind.
///
/// Zero-sized; all behavior is parameterized by the kind. One value can be
/// shared freely or created per request, it makes no difference.
#[derive(Clone, Copy, Debug)]
pub struct ManifestDataSource<S: ManifestKind> {
    _kind: PhantomData<S>,
}

impl<S: ManifestKind> ManifestDataSource<S> {
    /// Create the data source for kind `S`.
    pub fn new() -> Self {
        Self { _kind: PhantomData }
    }

    /// Externally visible resource type name under `prefix`.
    pub fn type_name(&self, prefix: &str) -> String {
        S::type_name(prefix)
    }

    /// The kind's shared schema descriptor.
    pub fn schema(&self) -> &'static Schema {
        S::schema()
    }

    /// Read the data source: validate, decode, stamp identity, render.
    ///
    /// # Errors
    ///
    /// [`Diagnostics`] carrying every validation fault, a decode fault at
    /// the document pseudo-path, or a serialization fault. No partial state
    /// is returned.
    pub fn read(&self, config: &Value) -> Result<ManifestState<S>, Diagnostics> {
        S::schema().validate(config)?;

        let config: ManifestConfig<S> =
            serde_json::from_value(config.clone()).map_err(|error| {
                Diagnostics::from(ManifestError::invalid(
                    constants::DOCUMENT_PATH,
                    error.to_string(),
                ))
            })?;

        let manifest = Manifest::from(config);
        let yaml = manifest.render().map_err(Diagnostics::from)?;

        debug!(
            kind = S::KIND,
            name = %manifest.metadata.name,
            namespace = %manifest.metadata.namespace,
            bytes = yaml.len(),
            "rendered manifest"
        );

        Ok(ManifestState { manifest, yaml })
    }

    /// Read the data source from a YAML configuration document.
    ///
    /// # Errors
    ///
    /// As [`ManifestDataSource::read`]; an unparseable document is reported
    /// at the document pseudo-path.
    pub fn read_yaml(&self, config: &str) -> Result<ManifestState<S>, Diagnostics> {
        let value: Value = serde_yaml::from_str(config).map_err(|error| {
            Diagnostics::from(ManifestError::invalid(
                constants::DOCUMENT_PATH,
                error.to_string(),
            ))
        })?;
        self.read(&value)
    }
}

impl<S: ManifestKind> Default for ManifestDataSource<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Resource type names of every kind this crate serves, under `prefix`.
///
/// The surrounding framework uses this to register the data sources.
pub fn data_source_names(prefix: &str) -> Vec<String> {
    vec![
        ComponentSpec::type_name(prefix),
        TopologySpec::type_name(prefix),
    ]
}
