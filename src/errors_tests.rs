// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

#[cfg(test)]
mod tests {
    use crate::errors::{Diagnostics, ManifestError};

    #[test]
    fn test_invalid_field_value_display() {
        let error = ManifestError::invalid("metadata.name", "must not be empty");
        assert_eq!(
            error.to_string(),
            "invalid value for field 'metadata.name': must not be empty"
        );
    }

    #[test]
    fn test_serialization_display() {
        let error = ManifestError::Serialization {
            kind: "Component".to_string(),
            reason: "emitter fault".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "failed to serialize Component manifest: emitter fault"
        );
    }

    #[test]
    fn test_diagnostics_from_single_error() {
        let diagnostics = Diagnostics::from(ManifestError::invalid("spec.type", "expected a string"));
        assert_eq!(diagnostics.len(), 1);
        assert!(!diagnostics.is_empty());
        assert!(diagnostics.mentions_path("spec.type"));
        assert!(!diagnostics.mentions_path("spec.hidden"));
    }

    #[test]
    fn test_diagnostics_display_joins_errors() {
        let diagnostics = Diagnostics::from_errors(vec![
            ManifestError::invalid("metadata.name", "must not be empty"),
            ManifestError::invalid("spec.hidden", "expected a boolean"),
        ]);
        let rendered = diagnostics.to_string();
        assert!(rendered.contains("metadata.name"));
        assert!(rendered.contains("; "));
        assert!(rendered.contains("spec.hidden"));
    }

    #[test]
    fn test_diagnostics_preserves_order() {
        let first = ManifestError::invalid("a", "first");
        let second = ManifestError::invalid("b", "second");
        let diagnostics = Diagnostics::from_errors(vec![first.clone(), second.clone()]);
        let collected: Vec<ManifestError> = diagnostics.into_iter().collect();
        assert_eq!(collected, vec![first, second]);
    }

    #[test]
    fn test_serialization_never_mentions_paths() {
        let diagnostics = Diagnostics::from(ManifestError::Serialization {
            kind: "Topology".to_string(),
            reason: "emitter fault".to_string(),
        });
        assert!(!diagnostics.mentions_path("spec"));
    }
}
