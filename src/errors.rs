// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Diagnostic error types for manifest data sources.
//!
//! The taxonomy is deliberately closed: a request either trips over its own
//! configuration ([`ManifestError::InvalidFieldValue`]) or the final YAML
//! encode fails ([`ManifestError::Serialization`]). Neither is fatal to the
//! process and neither is retried here; the caller corrects the input and
//! issues a new request.
//!
//! One validation pass may surface several faults at once, so errors are
//! reported through [`Diagnostics`], an ordered collection that the
//! surrounding framework attaches to its response verbatim.

use thiserror::Error;

/// Errors raised while reading a manifest data source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManifestError {
    /// A configured field is structurally invalid.
    ///
    /// Raised when a required field is absent, a present field fails its
    /// validator, a scalar carries the wrong type, or the document cannot be
    /// decoded into the typed model. `path` is the dotted field path with
    /// list indices in brackets (for example
    /// `spec.components[0].selectors[1].labelSelector`); faults that concern
    /// the whole document use the pseudo-path `$`.
    #[error("invalid value for field '{path}': {reason}")]
    InvalidFieldValue {
        /// Dotted path of the offending field
        path: String,
        /// Human-readable explanation of the fault
        reason: String,
    },

    /// The render step failed to encode the manifest.
    ///
    /// The model is well-typed by the time rendering runs, so this only
    /// surfaces encoding-level faults from the YAML emitter. No partial
    /// output is committed.
    #[error("failed to serialize {kind} manifest: {reason}")]
    Serialization {
        /// Kind of the manifest being rendered
        kind: String,
        /// Emitter error message
        reason: String,
    },
}

impl ManifestError {
    /// Shorthand for an [`ManifestError::InvalidFieldValue`] at `path`.
    pub fn invalid<P: Into<String>, R: Into<String>>(path: P, reason: R) -> Self {
        Self::InvalidFieldValue {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Ordered, non-empty collection of errors from one request.
///
/// Validation walks the whole configuration and keeps going past the first
/// fault, so callers see every problem in a single round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<ManifestError>,
}

impl Diagnostics {
    /// Wrap a batch of errors collected by one validation pass.
    ///
    /// Intended for internal use; an empty batch is an implementer mistake.
    pub(crate) fn from_errors(errors: Vec<ManifestError>) -> Self {
        debug_assert!(!errors.is_empty(), "diagnostics must carry at least one error");
        Self { errors }
    }

    /// All errors, in the order they were discovered.
    pub fn errors(&self) -> &[ManifestError] {
        &self.errors
    }

    /// Number of errors carried.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when no errors are carried (never the case for values produced
    /// by this crate; present for completeness).
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when any carried error points at `path`.
    pub fn mentions_path(&self, path: &str) -> bool {
        self.errors.iter().any(|e| match e {
            ManifestError::InvalidFieldValue { path: p, .. } => p == path,
            ManifestError::Serialization { .. } => false,
        })
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}

impl From<ManifestError> for Diagnostics {
    fn from(error: ManifestError) -> Self {
        Self { errors: vec![error] }
    }
}

impl IntoIterator for Diagnostics {
    type Item = ManifestError;
    type IntoIter = std::vec::IntoIter<ManifestError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
