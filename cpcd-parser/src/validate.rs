//! Structural validation of a document against a [`Schema`]
//!
//!     The walk is recursive and variant-aware:
//!
//!     - the node and the schema must be the same variant;
//!     - null and scalar nodes always conform, their content is not inspected;
//!     - every element of a document sequence is checked against every element pattern of the
//!       schema sequence (schema sequences are one-element shape templates in practice);
//!     - for mappings, each schema field is checked in order. The wildcard field checks the
//!       value of the document's first entry. A literal field is checked when the document has
//!       the key; when it doesn't, lenient mode skips it and strict mode reports `MissingKey`.
//!
//!     Validation fails fast on the first mismatch.

use crate::error::SchemaError;
use crate::node::{Mapping, Node};
use crate::path::NodePath;
use crate::schema::{Schema, SchemaField, SchemaKey};

/// Validate `node` against `schema` in lenient mode
pub fn validate(node: &Node, schema: &Schema) -> Result<(), SchemaError> {
    Validator::new().validate(node, schema)
}

/// Configurable schema validator
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    strict: bool,
}

impl Validator {
    /// Lenient validator: literal schema keys absent from the document are skipped
    pub fn new() -> Self {
        Self::default()
    }

    /// Report literal schema keys missing from the document
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn validate(&self, node: &Node, schema: &Schema) -> Result<(), SchemaError> {
        self.validate_at(node, schema, &NodePath::root())
    }

    fn validate_at(&self, node: &Node, schema: &Schema, path: &NodePath) -> Result<(), SchemaError> {
        match (node, schema) {
            (Node::Null, Schema::Null) | (Node::Scalar(_), Schema::Scalar) => Ok(()),
            (Node::Sequence(items), Schema::Sequence(patterns)) => {
                self.validate_sequence(items, patterns, path)
            }
            (Node::Mapping(map), Schema::Mapping(fields)) => self.validate_mapping(map, fields, path),
            (Node::Null, _) | (Node::Scalar(_), _) | (Node::Sequence(_), _) | (Node::Mapping(_), _) => {
                Err(SchemaError::TypeMismatch {
                    path: path.clone(),
                    expected: schema.kind(),
                    found: node.kind(),
                })
            }
        }
    }

    fn validate_sequence(
        &self,
        items: &[Node],
        patterns: &[Schema],
        path: &NodePath,
    ) -> Result<(), SchemaError> {
        for pattern in patterns {
            for (index, item) in items.iter().enumerate() {
                self.validate_at(item, pattern, &path.index(index))
                    .map_err(|inner| SchemaError::SequenceMismatch {
                        path: path.clone(),
                        inner: Box::new(inner),
                    })?;
            }
        }
        Ok(())
    }

    fn validate_mapping(
        &self,
        map: &Mapping,
        fields: &[SchemaField],
        path: &NodePath,
    ) -> Result<(), SchemaError> {
        for field in fields {
            match &field.key {
                SchemaKey::AnyKey => {
                    let (key, value) = map.first().ok_or_else(|| SchemaError::MissingKey {
                        path: path.clone(),
                        key: field.key.describe().to_string(),
                    })?;
                    self.validate_at(value, &field.pattern, &path.key(key))?;
                }
                SchemaKey::Literal(key) => match map.get(key) {
                    Some(value) => self.validate_at(value, &field.pattern, &path.key(key))?,
                    None if self.strict => {
                        return Err(SchemaError::MissingKey {
                            path: path.clone(),
                            key: key.clone(),
                        })
                    }
                    None => {}
                },
            }
        }
        Ok(())
    }
}
