// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Schema descriptors for manifest data sources.
//!
//! A [`Schema`] is an immutable tree describing every acceptable field of
//! one manifest kind: its key, nesting, required/optional/computed mode,
//! documentation and attached [`Validator`]s. The spec subtree is derived
//! from the model type's [`JsonSchema`] implementation, so the descriptor
//! tree and the model tree cannot drift apart; doc comments on the model
//! become field descriptions here.
//!
//! Descriptors are built once per kind (behind a `LazyLock` in each kind's
//! module) and shared read-only across all requests. Construction is a pure
//! function of the model type; malformed descriptors are implementer
//! mistakes caught by tests, not runtime faults.
//!
//! [`Schema::validate`] walks caller configuration against the tree before
//! the typed decode runs, collecting every fault in one pass: missing
//! required fields, scalar type mismatches and validator failures.

use schemars::{JsonSchema, SchemaGenerator};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants;
use crate::errors::{Diagnostics, ManifestError};
use crate::manifest::{ManifestKind, ObjectMeta};
use crate::validation::Validator;

/// Whether a field must, may, or cannot be supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldMode {
    /// The caller must supply a value.
    Required,
    /// The caller may supply a value; absent means "not present".
    Optional,
    /// The value is produced by the data source; caller input is ignored.
    Computed,
}

/// Shape of one field's value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// UTF-8 string scalar
    String,
    /// Boolean scalar
    Bool,
    /// Integer scalar
    Int,
    /// Floating-point scalar
    Float,
    /// Free-form value (`x-kubernetes-preserve-unknown-fields` upstream)
    Any,
    /// Mapping from string keys to values of the given shape
    MapOf(Box<Node>),
    /// List of values of the given shape
    ListOf(Box<Node>),
    /// Nested object with a fixed field set
    SingleNested(Vec<Field>),
    /// List of nested objects with a fixed field set
    ListNested(Vec<Field>),
}

/// One named field in a descriptor tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    /// Field key as it appears on the wire (camelCase)
    pub key: String,
    /// Human-readable documentation, taken from the model's doc comment
    pub description: String,
    /// Required/optional/computed mode
    pub mode: FieldMode,
    /// Validators run against present values
    pub validators: Vec<Validator>,
    /// Shape of the value
    pub node: Node,
}

/// The complete descriptor for one manifest kind.
///
/// Top-level fields are always `apiVersion` and `kind` (computed),
/// `metadata` (required, with name/namespace validators attached),
/// `spec` (optional, derived from the model type) and the computed
/// `yaml` output field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    /// Resource kind this descriptor belongs to
    pub kind: String,
    /// Fixed API group/version identity
    pub api_version: String,
    /// Kind-level documentation
    pub description: String,
    /// Top-level fields
    pub fields: Vec<Field>,
}

impl Schema {
    /// Build the descriptor for a manifest kind.
    ///
    /// Pure function of the model type's schema: no I/O, no external state.
    /// `description` documents the kind as a whole.
    pub fn for_kind<S: ManifestKind>(description: &str) -> Self {
        let mut metadata_fields = derive_fields::<ObjectMeta>().0;
        attach(&mut metadata_fields, "name", Validator::ResourceName);
        attach(&mut metadata_fields, "namespace", Validator::NamespaceName);
        attach(&mut metadata_fields, "labels", Validator::LabelKeys);
        attach(&mut metadata_fields, "annotations", Validator::AnnotationKeys);

        let (spec_fields, spec_description) = derive_fields::<S>();

        let fields = vec![
            Field {
                key: constants::API_VERSION_FIELD.to_string(),
                description: "Fixed API group/version of the rendered manifest".to_string(),
                mode: FieldMode::Computed,
                validators: Vec::new(),
                node: Node::String,
            },
            Field {
                key: constants::KIND_FIELD.to_string(),
                description: "Fixed resource kind of the rendered manifest".to_string(),
                mode: FieldMode::Computed,
                validators: Vec::new(),
                node: Node::String,
            },
            Field {
                key: constants::METADATA_FIELD.to_string(),
                description: "Standard object metadata".to_string(),
                mode: FieldMode::Required,
                validators: Vec::new(),
                node: Node::SingleNested(metadata_fields),
            },
            Field {
                key: constants::SPEC_FIELD.to_string(),
                description: spec_description,
                mode: FieldMode::Optional,
                validators: Vec::new(),
                node: Node::SingleNested(spec_fields),
            },
            Field {
                key: constants::OUTPUT_FIELD.to_string(),
                description: "The rendered manifest in YAML format".to_string(),
                mode: FieldMode::Computed,
                validators: Vec::new(),
                node: Node::String,
            },
        ];

        Self {
            kind: S::KIND.to_string(),
            api_version: S::api_version(),
            description: description.to_string(),
            fields,
        }
    }

    /// Attach a validator to the field at `path` (dotted keys).
    ///
    /// A path that misses the tree is an implementer mistake; it is ignored
    /// at runtime and flagged under debug assertions.
    #[must_use]
    pub fn with_validator(mut self, path: &str, validator: Validator) -> Self {
        let attached = attach(&mut self.fields, path, validator);
        debug_assert!(attached, "no schema field at path '{path}'");
        self
    }

    /// Look up the field at `path` (dotted keys, descending through nested
    /// objects and nested lists).
    pub fn field(&self, path: &str) -> Option<&Field> {
        let mut fields = &self.fields;
        let mut found = None;
        for segment in path.split('.') {
            let field = fields.iter().find(|f| f.key == segment)?;
            found = Some(field);
            fields = match &field.node {
                Node::SingleNested(children) | Node::ListNested(children) => children,
                _ => {
                    // scalar leaf: valid only as the last segment
                    static EMPTY: Vec<Field> = Vec::new();
                    &EMPTY
                }
            };
        }
        found
    }

    /// Validate caller configuration against this descriptor.
    ///
    /// Walks the whole tree and collects every fault; computed fields in the
    /// input are ignored.
    ///
    /// # Errors
    ///
    /// Returns the accumulated [`Diagnostics`] when any field is missing,
    /// mistyped, or rejected by a validator.
    pub fn validate(&self, config: &Value) -> Result<(), Diagnostics> {
        let mut errors = Vec::new();
        match config.as_object() {
            Some(object) => validate_fields(&self.fields, object, "", &mut errors),
            None => errors.push(ManifestError::invalid(
                constants::DOCUMENT_PATH,
                "configuration must be a mapping",
            )),
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Diagnostics::from_errors(errors))
        }
    }
}

/// Attach `validator` to the field at `path` inside `fields`.
fn attach(fields: &mut [Field], path: &str, validator: Validator) -> bool {
    let (head, rest) = match path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    };
    for field in fields {
        if field.key != head {
            continue;
        }
        return match rest {
            None => {
                field.validators.push(validator);
                true
            }
            Some(rest) => match &mut field.node {
                Node::SingleNested(children) | Node::ListNested(children) => {
                    attach(children, rest, validator)
                }
                _ => false,
            },
        };
    }
    false
}

// ============================================================================
// Validation walk
// ============================================================================

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn validate_fields(
    fields: &[Field],
    object: &Map<String, Value>,
    prefix: &str,
    errors: &mut Vec<ManifestError>,
) {
    for field in fields {
        let path = join_path(prefix, &field.key);
        match object.get(&field.key) {
            None | Some(Value::Null) => {
                if field.mode == FieldMode::Required {
                    errors.push(ManifestError::invalid(path, "required field is missing"));
                }
            }
            Some(value) => {
                if field.mode == FieldMode::Computed {
                    continue;
                }
                let before = errors.len();
                validate_node(&field.node, value, &path, errors);
                // validators only see well-shaped values
                if errors.len() == before {
                    for validator in &field.validators {
                        validator.check(&path, value, errors);
                    }
                }
            }
        }
    }
}

fn validate_node(node: &Node, value: &Value, path: &str, errors: &mut Vec<ManifestError>) {
    match node {
        Node::Any => {}
        Node::String => {
            if !value.is_string() {
                errors.push(ManifestError::invalid(path, "expected a string"));
            }
        }
        Node::Bool => {
            if !value.is_boolean() {
                errors.push(ManifestError::invalid(path, "expected a boolean"));
            }
        }
        Node::Int => {
            if !value.is_i64() && !value.is_u64() {
                errors.push(ManifestError::invalid(path, "expected an integer"));
            }
        }
        Node::Float => {
            if !value.is_number() {
                errors.push(ManifestError::invalid(path, "expected a number"));
            }
        }
        Node::MapOf(element) => match value.as_object() {
            Some(map) => {
                for (key, entry) in map {
                    validate_node(element, entry, &format!("{path}.{key}"), errors);
                }
            }
            None => errors.push(ManifestError::invalid(path, "expected a mapping")),
        },
        Node::ListOf(element) => match value.as_array() {
            Some(items) => {
                for (index, item) in items.iter().enumerate() {
                    validate_node(element, item, &format!("{path}[{index}]"), errors);
                }
            }
            None => errors.push(ManifestError::invalid(path, "expected a list")),
        },
        Node::SingleNested(fields) => match value.as_object() {
            Some(object) => validate_fields(fields, object, path, errors),
            None => errors.push(ManifestError::invalid(path, "expected a mapping")),
        },
        Node::ListNested(fields) => match value.as_array() {
            Some(items) => {
                for (index, item) in items.iter().enumerate() {
                    let item_path = format!("{path}[{index}]");
                    match item.as_object() {
                        Some(object) => validate_fields(fields, object, &item_path, errors),
                        None => {
                            errors.push(ManifestError::invalid(item_path, "expected a mapping"));
                        }
                    }
                }
            }
            None => errors.push(ManifestError::invalid(path, "expected a list")),
        },
    }
}

// ============================================================================
// Derivation from JSON Schema
// ============================================================================

/// Derive descriptor fields for a model type from its JSON Schema.
///
/// Returns the fields plus the type-level description (the struct's doc
/// comment). `$ref`s are resolved against `$defs`, nullable wrappers coming
/// from `Option` fields are unwrapped, and free-form values map to
/// [`Node::Any`].
pub(crate) fn derive_fields<T: JsonSchema>() -> (Vec<Field>, String) {
    let mut generator = SchemaGenerator::default();
    // Schema is a newtype wrapper around serde_json::Value
    let root: Value = generator.root_schema_for::<T>().into();
    let empty = Map::new();
    let object = root.as_object().unwrap_or(&empty);
    let defs = object
        .get("$defs")
        .and_then(Value::as_object)
        .unwrap_or(&empty);
    let description = object
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    (fields_from_object(object, defs), description)
}

/// Convert one JSON Schema object's `properties` into descriptor fields.
fn fields_from_object(object: &Map<String, Value>, defs: &Map<String, Value>) -> Vec<Field> {
    let required: Vec<&str> = object
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    let Some(properties) = object.get("properties").and_then(Value::as_object) else {
        return Vec::new();
    };
    properties
        .iter()
        .map(|(key, prop)| {
            let description = prop
                .as_object()
                .and_then(|p| p.get("description"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            Field {
                key: key.clone(),
                description,
                mode: if required.contains(&key.as_str()) {
                    FieldMode::Required
                } else {
                    FieldMode::Optional
                },
                validators: Vec::new(),
                node: node_from_schema(prop, defs),
            }
        })
        .collect()
}

/// Convert one JSON Schema value into a descriptor node.
fn node_from_schema(schema: &Value, defs: &Map<String, Value>) -> Node {
    let object = match schema {
        // `true` admits anything; `false` admits nothing and never occurs in
        // derived model schemas
        Value::Bool(_) => return Node::Any,
        Value::Object(object) => object,
        _ => return Node::Any,
    };

    if let Some(reference) = object.get("$ref").and_then(Value::as_str) {
        let name = reference.strip_prefix("#/$defs/").unwrap_or(reference);
        return match defs.get(name) {
            Some(target) => node_from_schema(target, defs),
            None => Node::Any,
        };
    }

    // Option<T> over referenced types becomes anyOf [T, null]
    for combinator in ["anyOf", "oneOf"] {
        if let Some(alternatives) = object.get(combinator).and_then(Value::as_array) {
            let non_null: Vec<&Value> = alternatives
                .iter()
                .filter(|alt| !is_null_schema(alt))
                .collect();
            return match non_null.as_slice() {
                [single] => node_from_schema(single, defs),
                _ => Node::Any,
            };
        }
    }

    // Option<T> over scalars becomes a ["T", "null"] type array
    let type_name = match object.get("type") {
        Some(Value::String(name)) => Some(name.as_str()),
        Some(Value::Array(names)) => names
            .iter()
            .filter_map(Value::as_str)
            .find(|name| *name != "null"),
        _ => None,
    };

    match type_name {
        Some("string") => Node::String,
        Some("boolean") => Node::Bool,
        Some("integer") => Node::Int,
        Some("number") => Node::Float,
        Some("array") => {
            let element = object
                .get("items")
                .map(|items| node_from_schema(items, defs))
                .unwrap_or(Node::Any);
            match element {
                Node::SingleNested(fields) => Node::ListNested(fields),
                element => Node::ListOf(Box::new(element)),
            }
        }
        Some("object") => {
            if object.contains_key("properties") {
                Node::SingleNested(fields_from_object(object, defs))
            } else {
                let element = object
                    .get("additionalProperties")
                    .map(|ap| node_from_schema(ap, defs))
                    .unwrap_or(Node::Any);
                Node::MapOf(Box::new(element))
            }
        }
        _ => Node::Any,
    }
}

fn is_null_schema(schema: &Value) -> bool {
    schema
        .as_object()
        .and_then(|object| object.get("type"))
        .and_then(Value::as_str)
        == Some("null")
}
