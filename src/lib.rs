// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # Canopy - Typed manifests for Flanksource canary topologies
//!
//! Canopy exposes the `canaries.flanksource.com/v1` `Component` and
//! `Topology` Custom Resource kinds as manifest data sources: typed models,
//! shared schema descriptors, field validation and deterministic YAML
//! rendering, ready to be embedded by a provider framework.
//!
//! ## Overview
//!
//! Reading a data source is a single stateless transformation: caller
//! configuration is validated against the kind's schema descriptor, decoded
//! into the typed model, stamped with the fixed `apiVersion`/`kind` identity,
//! and rendered back as a YAML manifest string in the computed output field.
//! Absent optional fields stay absent throughout; they never serialize, not
//! even as nulls.
//!
//! ## Modules
//!
//! - [`crd`] - typed models for the Component and Topology kinds
//! - [`schema`] - schema descriptors derived from the models
//! - [`datasource`] - the per-kind read pipeline
//! - [`manifest`] - manifest envelope, kind contract and render handler
//! - [`validation`] - Kubernetes naming rules for names and keys
//! - [`errors`] - the diagnostics taxonomy
//! - [`constants`] - identity strings and length bounds
//!
//! ## Example
//!
//! ```rust
//! use canopy::crd::ComponentSpec;
//! use canopy::datasource::ManifestDataSource;
//!
//! let config = serde_json::json!({
//!     "metadata": { "name": "payments-db", "namespace": "production" },
//!     "spec": { "type": "database", "icon": "postgres" },
//! });
//!
//! let source = ManifestDataSource::<ComponentSpec>::new();
//! let state = source.read(&config).expect("valid config");
//!
//! assert!(state.yaml.contains("apiVersion: canaries.flanksource.com/v1"));
//! assert!(state.yaml.contains("kind: Component"));
//! assert!(state.yaml.contains("type: database"));
//! ```

pub mod constants;
pub mod crd;
pub mod datasource;
pub mod errors;
pub mod manifest;
pub mod schema;
pub mod validation;

#[cfg(test)]
mod errors_tests;
#[cfg(test)]
mod manifest_tests;
