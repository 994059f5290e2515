// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Identity and validation constants shared across all manifest kinds.
//!
//! Every kind served by this crate belongs to the same API group and version,
//! so the identity strings live here as the single source of truth. The
//! length bounds mirror the upstream Kubernetes naming rules enforced by
//! [`crate::validation`].

// ============================================================================
// API Identity
// ============================================================================

/// API group of every kind served by this crate
pub const GROUP: &str = "canaries.flanksource.com";

/// API version of every kind served by this crate
pub const VERSION: &str = "v1";

// ============================================================================
// Schema Field Keys
// ============================================================================

/// Key of the computed output field holding the rendered manifest text
pub const OUTPUT_FIELD: &str = "yaml";

/// Key of the computed API group/version identity field
pub const API_VERSION_FIELD: &str = "apiVersion";

/// Key of the computed resource kind identity field
pub const KIND_FIELD: &str = "kind";

/// Key of the required metadata block
pub const METADATA_FIELD: &str = "metadata";

/// Key of the optional spec block
pub const SPEC_FIELD: &str = "spec";

/// Pseudo-path reported for faults that concern the whole configuration
/// document rather than a single field
pub const DOCUMENT_PATH: &str = "$";

// ============================================================================
// Naming Rules (RFC 1123 / Kubernetes qualified names)
// ============================================================================

/// Maximum length of a resource name (DNS subdomain)
pub const MAX_NAME_LEN: usize = 253;

/// Maximum length of a namespace name (DNS label)
pub const MAX_NAMESPACE_LEN: usize = 63;

/// Maximum length of the name part of a label or annotation key
pub const MAX_KEY_NAME_LEN: usize = 63;

/// Maximum length of the optional prefix part of a label or annotation key
pub const MAX_KEY_PREFIX_LEN: usize = 253;
