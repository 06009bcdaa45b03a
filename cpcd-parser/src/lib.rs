//! Tree-matching core for the Community Physical Constants Dictionary
//!
//!     This crate holds everything with algorithmic content: the document model, the schema
//!     validator, the request normalizer and the extractor. It does not print, read arguments or
//!     pick output paths; that belongs to the `cpcd` orchestrator and the CLI.
//!
//! Pipeline
//!
//!     dictionary text ──load──▶ Node ──validate(schema)──▶ ok
//!     request text    ──load──▶ Node ──normalize──▶ Query
//!     Node[set] + Query ──extract──▶ ExtractionResult
//!
//!     The file structure :
//!     .
//!     ├── node.rs          # Node / Mapping, the only shared data structure
//!     ├── path.rs          # NodePath for error locations
//!     ├── loader.rs        # serde_yaml <-> Node
//!     ├── schema.rs        # Schema, wildcard keys, the embedded dictionary syntax
//!     ├── validate.rs      # structural validation
//!     ├── request.rs       # request normalization into a Query
//!     ├── extract.rs       # query-driven extraction
//!     ├── error.rs
//!     └── lib.rs

pub mod error;
pub mod extract;
pub mod loader;
pub mod node;
pub mod path;
pub mod request;
pub mod schema;
pub mod validate;

pub use error::{ExtractError, LoadError, RequestError, SchemaError};
pub use extract::{extract, Constant, ExtractionResult};
pub use loader::{load_path, load_str, to_yaml_string};
pub use node::{Mapping, Node, NodeKind};
pub use path::NodePath;
pub use request::{normalize, Query};
pub use schema::{dictionary_schema, Schema, SchemaField, SchemaKey};
pub use validate::{validate, Validator};
