//! Reference shape of a physical constants dictionary
//!
//!     A schema is written as an ordinary YAML tree where the word `VALUE` stands for "anything
//!     goes here": as a mapping key it matches any single key, as a scalar it matches any scalar.
//!     [`Schema::from_pattern`] turns that tree into a [`Schema`], after which the wildcard is
//!     an explicit [`SchemaKey::AnyKey`] and can no longer collide with a real field that happens
//!     to be called `VALUE`.
//!
//!     The dictionary schema is part of the tool, not user data. It lives here as the versioned
//!     [`DICTIONARY_SYNTAX`] literal and is built once on first use by [`dictionary_schema`].

use crate::loader::load_str;
use crate::node::{Node, NodeKind};
use once_cell::sync::Lazy;

/// Wildcard marker in pattern trees
pub const WILDCARD: &str = "VALUE";

/// Top-level key of a dictionary document
pub const ROOT_KEY: &str = "physical_constants_dictionary";
/// Sequence of constant sets under [`ROOT_KEY`]
pub const SETS_KEY: &str = "set";
/// Sequence of constants inside a set
pub const ENTRIES_KEY: &str = "entries";
pub const NAME_KEY: &str = "name";
pub const VALUE_KEY: &str = "value";

/// Version of [`DICTIONARY_SYNTAX`]
pub const SCHEMA_VERSION: &str = "1.0";

/// Reference syntax for the physical constants dictionary
pub const DICTIONARY_SYNTAX: &str = r#"
physical_constants_dictionary:
  version_number: VALUE
  institution: VALUE
  description: VALUE
  contact: VALUE
  set:
    - VALUE:
        description: VALUE
        citation: VALUE
        entries:
          - name: VALUE
            value: VALUE
            units: VALUE
            prec: VALUE
            type: VALUE
            uncertainty: VALUE
            description: VALUE
"#;

static DICTIONARY_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    let pattern = load_str(DICTIONARY_SYNTAX).expect("embedded dictionary syntax is valid YAML");
    Schema::from_pattern(&pattern)
});

/// The schema every dictionary document is validated against
pub fn dictionary_schema() -> &'static Schema {
    &DICTIONARY_SCHEMA
}

/// Expected shape of a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schema {
    Null,
    Scalar,
    /// Patterns every element of a document sequence must satisfy
    Sequence(Vec<Schema>),
    Mapping(Vec<SchemaField>),
}

/// One key of a mapping pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    pub key: SchemaKey,
    pub pattern: Schema,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaKey {
    /// Matches whichever key comes first in the document mapping
    AnyKey,
    Literal(String),
}

impl SchemaKey {
    /// Human-readable key name for diagnostics
    pub fn describe(&self) -> &str {
        match self {
            SchemaKey::AnyKey => "<any key>",
            SchemaKey::Literal(name) => name,
        }
    }
}

impl Schema {
    /// Build a schema from a pattern tree, treating `VALUE` mapping keys as wildcards
    pub fn from_pattern(pattern: &Node) -> Self {
        match pattern {
            Node::Null => Schema::Null,
            Node::Scalar(_) => Schema::Scalar,
            Node::Sequence(items) => Schema::Sequence(items.iter().map(Schema::from_pattern).collect()),
            Node::Mapping(map) => Schema::Mapping(
                map.iter()
                    .map(|(key, value)| SchemaField {
                        key: if key == WILDCARD {
                            SchemaKey::AnyKey
                        } else {
                            SchemaKey::Literal(key.to_string())
                        },
                        pattern: Schema::from_pattern(value),
                    })
                    .collect(),
            ),
        }
    }

    /// The node variant this schema requires
    pub fn kind(&self) -> NodeKind {
        match self {
            Schema::Null => NodeKind::Null,
            Schema::Scalar => NodeKind::Scalar,
            Schema::Sequence(_) => NodeKind::Sequence,
            Schema::Mapping(_) => NodeKind::Mapping,
        }
    }

    /// Pattern registered for a literal key, if any
    pub fn field(&self, key: &str) -> Option<&Schema> {
        match self {
            Schema::Mapping(fields) => fields
                .iter()
                .find(|f| matches!(&f.key, SchemaKey::Literal(k) if k == key))
                .map(|f| &f.pattern),
            _ => None,
        }
    }
}
