//! A loaded dictionary and request
//!
//! `Session` keeps the trees the pipeline works on: the dictionary, the user's raw request and
//! the query normalized from it. Every step is a separate call so library users (and tests) can
//! stop anywhere; [`crate::Pipeline`] strings them together for the CLI.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut session = Session::new();
//! session.read("pcd.yaml")?;
//! session.validate()?;
//! session.load_request("earth: g")?;
//! let result = session.extract()?;
//! ```

use crate::error::CpcdError;
use cpcd_parser::schema::{ROOT_KEY, SETS_KEY};
use cpcd_parser::{
    dictionary_schema, extract, load_path, load_str, normalize, to_yaml_string, ExtractionResult,
    Node, Query, Validator,
};
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct Session {
    dictionary: Node,
    request: Node,
    query: Query,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the dictionary from a YAML file
    pub fn read(&mut self, path: impl AsRef<Path>) -> Result<(), CpcdError> {
        let path = path.as_ref();
        info!("reading dictionary {}", path.display());
        self.dictionary = load_path(path)?;
        Ok(())
    }

    /// Load the dictionary from YAML text
    pub fn read_str(&mut self, text: &str) -> Result<(), CpcdError> {
        self.dictionary = load_str(text)?;
        Ok(())
    }

    /// Validate the dictionary against the embedded schema, skipping absent keys
    pub fn validate(&self) -> Result<(), CpcdError> {
        self.validate_with(Validator::new())
    }

    pub fn validate_with(&self, validator: Validator) -> Result<(), CpcdError> {
        info!(strict = validator.is_strict(), "validating dictionary");
        validator.validate(&self.dictionary, dictionary_schema())?;
        Ok(())
    }

    /// Read the request from a YAML file and normalize it
    pub fn read_request(&mut self, path: impl AsRef<Path>) -> Result<(), CpcdError> {
        let path = path.as_ref();
        info!("reading request {}", path.display());
        self.set_request(load_path(path)?)
    }

    /// Take the request from YAML text and normalize it
    pub fn load_request(&mut self, text: &str) -> Result<(), CpcdError> {
        self.set_request(load_str(text)?)
    }

    fn set_request(&mut self, request: Node) -> Result<(), CpcdError> {
        self.query = normalize(&request)?;
        self.request = request;
        Ok(())
    }

    /// The request as the user wrote it
    pub fn request(&self) -> &Node {
        &self.request
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Extract the queried constants from the dictionary's sets.
    ///
    /// A dictionary without a `set` sequence has nothing to extract. Requested groups the
    /// dictionary does not define are skipped.
    pub fn extract(&self) -> Result<ExtractionResult, CpcdError> {
        let Some(sets) = self
            .dictionary
            .get(ROOT_KEY)
            .and_then(|root| root.get(SETS_KEY))
        else {
            warn!("dictionary has no {}.{} section", ROOT_KEY, SETS_KEY);
            return Ok(ExtractionResult::default());
        };

        let result = extract(sets, &self.query)?;
        let found: Vec<&str> = result.groups().map(|(group, _)| group).collect();
        for group in self.query.groups().filter(|g| !found.contains(g)) {
            warn!("requested set '{}' not found in dictionary", group);
        }
        info!(
            groups = result.group_count(),
            constants = result.len(),
            "extraction complete"
        );
        Ok(result)
    }

    /// Write the dictionary as YAML
    pub fn write_dictionary<W: Write>(&self, out: &mut W) -> Result<(), CpcdError> {
        write_yaml(out, &self.dictionary)
    }

    /// Write the request as the user wrote it
    pub fn write_request<W: Write>(&self, out: &mut W) -> Result<(), CpcdError> {
        write_yaml(out, &self.request)
    }

    /// Write the normalized query
    pub fn write_query<W: Write>(&self, out: &mut W) -> Result<(), CpcdError> {
        write_yaml(out, self.query.as_node())
    }
}

fn write_yaml<W: Write>(out: &mut W, node: &Node) -> Result<(), CpcdError> {
    out.write_all(to_yaml_string(node)?.as_bytes())?;
    Ok(())
}
