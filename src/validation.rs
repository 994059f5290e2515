// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Field validators for manifest configuration.
//!
//! These are the character-class rules Kubernetes itself applies to object
//! names and to label/annotation keys (RFC 1123 subdomains and labels,
//! qualified names with an optional DNS prefix). They run during input
//! decoding, before any rendering happens, and never mutate their input.
//!
//! The free functions are pure predicates over single values; [`Validator`]
//! binds a predicate to a schema field so the descriptor walk in
//! [`crate::schema`] can report faults with the offending field path.

use serde_json::Value;

use crate::constants::{
    MAX_KEY_NAME_LEN, MAX_KEY_PREFIX_LEN, MAX_NAMESPACE_LEN, MAX_NAME_LEN,
};
use crate::errors::ManifestError;

/// Validate a resource name as an RFC 1123 DNS subdomain.
///
/// Must be non-empty, at most 253 characters, consist of lowercase
/// alphanumerics, `-` and `.`, and start and end with an alphanumeric.
///
/// # Errors
///
/// Returns the reason the value is rejected.
pub fn validate_resource_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("must not be empty".to_string());
    }
    if name.len() > MAX_NAME_LEN {
        return Err(format!("must be at most {MAX_NAME_LEN} characters"));
    }
    for part in name.split('.') {
        validate_dns_label_part(part)?;
    }
    Ok(())
}

/// Validate a namespace name as an RFC 1123 DNS label.
///
/// Must be non-empty, at most 63 characters, consist of lowercase
/// alphanumerics and `-`, and start and end with an alphanumeric.
///
/// # Errors
///
/// Returns the reason the value is rejected.
pub fn validate_namespace_name(namespace: &str) -> Result<(), String> {
    if namespace.is_empty() {
        return Err("must not be empty".to_string());
    }
    if namespace.len() > MAX_NAMESPACE_LEN {
        return Err(format!("must be at most {MAX_NAMESPACE_LEN} characters"));
    }
    validate_dns_label_part(namespace)
}

/// Validate a label or annotation key as a Kubernetes qualified name.
///
/// A key is either a bare name or `prefix/name`. The name part is at most
/// 63 characters, starts and ends with an alphanumeric, and may contain
/// `-`, `_` and `.` in between. The prefix, when present, must be a valid
/// DNS subdomain of at most 253 characters.
///
/// # Errors
///
/// Returns the reason the value is rejected.
pub fn validate_key(key: &str) -> Result<(), String> {
    if key.is_empty() {
        return Err("must not be empty".to_string());
    }
    let mut parts = key.splitn(2, '/');
    let first = parts.next().unwrap_or_default();
    match parts.next() {
        None => validate_key_name(first),
        Some(name) => {
            if first.is_empty() {
                return Err("prefix part must not be empty".to_string());
            }
            if first.len() > MAX_KEY_PREFIX_LEN {
                return Err(format!(
                    "prefix part must be at most {MAX_KEY_PREFIX_LEN} characters"
                ));
            }
            for part in first.split('.') {
                validate_dns_label_part(part)
                    .map_err(|reason| format!("prefix part {reason}"))?;
            }
            validate_key_name(name)
        }
    }
}

/// Check the name part of a qualified key.
fn validate_key_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name part must not be empty".to_string());
    }
    if name.len() > MAX_KEY_NAME_LEN {
        return Err(format!(
            "name part must be at most {MAX_KEY_NAME_LEN} characters"
        ));
    }
    let bytes = name.as_bytes();
    if !bytes[0].is_ascii_alphanumeric() || !bytes[bytes.len() - 1].is_ascii_alphanumeric() {
        return Err("name part must start and end with an alphanumeric character".to_string());
    }
    if !bytes
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
    {
        return Err(
            "name part may only contain alphanumerics, '-', '_' and '.'".to_string(),
        );
    }
    Ok(())
}

/// Check one dot-separated segment of a DNS subdomain.
fn validate_dns_label_part(part: &str) -> Result<(), String> {
    if part.is_empty() {
        return Err("must not contain empty segments".to_string());
    }
    let bytes = part.as_bytes();
    if !bytes[0].is_ascii_lowercase() && !bytes[0].is_ascii_digit() {
        return Err("must start with a lowercase alphanumeric character".to_string());
    }
    let last = bytes[bytes.len() - 1];
    if !last.is_ascii_lowercase() && !last.is_ascii_digit() {
        return Err("must end with a lowercase alphanumeric character".to_string());
    }
    if !bytes
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
    {
        return Err("may only contain lowercase alphanumerics and '-'".to_string());
    }
    Ok(())
}

/// A validator attached to one schema field.
///
/// Validators are stateless and shared; the descriptor walk invokes them on
/// present values only. Wrongly-typed values are reported by the walk itself,
/// so every variant quietly skips values of the wrong shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Validator {
    /// The field is a resource name (DNS subdomain).
    ResourceName,
    /// The field is a namespace name (DNS label).
    NamespaceName,
    /// The field is a label map; every key must be a qualified name.
    LabelKeys,
    /// The field is an annotation map; every key must be a qualified name.
    AnnotationKeys,
}

impl Validator {
    /// Run the validator against `value`, appending any faults to `errors`.
    pub(crate) fn check(&self, path: &str, value: &Value, errors: &mut Vec<ManifestError>) {
        match self {
            Validator::ResourceName => {
                if let Some(name) = value.as_str() {
                    if let Err(reason) = validate_resource_name(name) {
                        errors.push(ManifestError::invalid(path, reason));
                    }
                }
            }
            Validator::NamespaceName => {
                if let Some(namespace) = value.as_str() {
                    if let Err(reason) = validate_namespace_name(namespace) {
                        errors.push(ManifestError::invalid(path, reason));
                    }
                }
            }
            Validator::LabelKeys | Validator::AnnotationKeys => {
                if let Some(map) = value.as_object() {
                    for key in map.keys() {
                        if let Err(reason) = validate_key(key) {
                            errors.push(ManifestError::invalid(
                                format!("{path}.{key}"),
                                format!("invalid key: {reason}"),
                            ));
                        }
                    }
                }
            }
        }
    }
}
