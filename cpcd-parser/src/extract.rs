//! Extraction of requested constants from a dictionary
//!
//!     The walk is driven by the query tree, which has no depth marker of its own. The variant
//!     of the current query node picks the traversal mode:
//!
//!     - Mapping (group level): the document node is the sequence of set records. For every
//!       record and every queried group the record holds, the group's `entries` are walked in
//!       sequence mode and the matches are collected under the group name.
//!     - Sequence (leaf level): the document node is a sequence of entries. Every entry with
//!       both `name` and `value` is compared against every requested name, and each match
//!       yields a `{name, value}` pair. There is no early exit, so duplicate names in the
//!       document all match.
//!
//!     Each step returns a fresh result that the caller merges; a shape mismatch anywhere
//!     aborts the whole extraction.

use crate::error::ExtractError;
use crate::node::{Mapping, Node, NodeKind};
use crate::path::NodePath;
use crate::request::Query;
use crate::schema::{ENTRIES_KEY, NAME_KEY, VALUE_KEY};
use tracing::debug;

/// Requested constants grouped by set, in the order they were found in the dictionary
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractionResult {
    groups: Mapping,
}

/// One extracted constant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant<'a> {
    pub group: &'a str,
    pub name: &'a str,
    pub value: &'a str,
}

impl ExtractionResult {
    /// The result as a tree: group → sequence of `{name, value}` maps
    pub fn to_node(&self) -> Node {
        Node::Mapping(self.groups.clone())
    }

    /// Groups with their constants, in recorded order
    pub fn groups(&self) -> impl Iterator<Item = (&str, Vec<Constant<'_>>)> {
        self.groups.iter().map(|(group, entries)| {
            let constants = entries
                .as_sequence()
                .unwrap_or(&[])
                .iter()
                .filter_map(|entry| {
                    Some(Constant {
                        group,
                        name: entry.get_scalar(NAME_KEY)?,
                        value: entry.get_scalar(VALUE_KEY)?,
                    })
                })
                .collect();
            (group, constants)
        })
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of extracted constants
    pub fn len(&self) -> usize {
        self.groups().map(|(_, constants)| constants.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Mapping> for ExtractionResult {
    fn from(groups: Mapping) -> Self {
        Self { groups }
    }
}

/// Extract the constants named by `query` from `document_root`, the dictionary's `set` sequence
pub fn extract(document_root: &Node, query: &Query) -> Result<ExtractionResult, ExtractError> {
    match walk(document_root, query.as_node(), &NodePath::root())? {
        Node::Mapping(groups) => Ok(ExtractionResult { groups }),
        Node::Null | Node::Scalar(_) | Node::Sequence(_) => Ok(ExtractionResult::default()),
    }
}

fn walk(node: &Node, query: &Node, path: &NodePath) -> Result<Node, ExtractError> {
    match query {
        Node::Sequence(names) => extract_entries(node, names, path).map(Node::Sequence),
        Node::Mapping(groups) => extract_groups(node, groups, path).map(Node::Mapping),
        Node::Null | Node::Scalar(_) => Ok(Node::Null),
    }
}

fn expect_sequence<'a>(node: &'a Node, path: &NodePath) -> Result<&'a [Node], ExtractError> {
    node.as_sequence().ok_or_else(|| ExtractError::ShapeMismatch {
        path: path.clone(),
        expected: NodeKind::Sequence,
        found: node.kind(),
    })
}

fn expect_scalar<'a>(node: &'a Node, path: &NodePath) -> Result<&'a str, ExtractError> {
    node.as_scalar().ok_or_else(|| ExtractError::ShapeMismatch {
        path: path.clone(),
        expected: NodeKind::Scalar,
        found: node.kind(),
    })
}

fn extract_entries(node: &Node, names: &[Node], path: &NodePath) -> Result<Vec<Node>, ExtractError> {
    let mut found = Vec::new();
    for (index, entry) in expect_sequence(node, path)?.iter().enumerate() {
        let (Some(name), Some(value)) = (entry.get(NAME_KEY), entry.get(VALUE_KEY)) else {
            continue;
        };
        let entry_path = path.index(index);
        let name = expect_scalar(name, &entry_path.key(NAME_KEY))?;
        let value = expect_scalar(value, &entry_path.key(VALUE_KEY))?;
        for requested in names.iter().filter_map(Node::as_scalar) {
            if name == requested {
                debug!(">>> {} = {}", name, value);
                let pair: Mapping = [(NAME_KEY, Node::from(name)), (VALUE_KEY, Node::from(value))]
                    .into_iter()
                    .collect();
                found.push(Node::Mapping(pair));
            }
        }
    }
    Ok(found)
}

fn extract_groups(node: &Node, groups: &Mapping, path: &NodePath) -> Result<Mapping, ExtractError> {
    let mut result = Mapping::new();
    for (index, record) in expect_sequence(node, path)?.iter().enumerate() {
        for (group, leaf_query) in groups.iter() {
            let Some(set) = record.get(group) else {
                continue;
            };
            let found = match set.get(ENTRIES_KEY) {
                Some(entries) => {
                    let entries_path = path.index(index).key(group).key(ENTRIES_KEY);
                    walk(entries, leaf_query, &entries_path)?
                }
                None => Node::Sequence(Vec::new()),
            };
            merge_into(&mut result, group, found);
        }
    }
    Ok(result)
}

/// Accumulate `found` under `key`, appending to sequences already collected there
fn merge_into(result: &mut Mapping, key: &str, found: Node) {
    if found.is_null() {
        return;
    }
    let Some(existing) = result.get_mut(key) else {
        result.insert(key, found);
        return;
    };
    match (existing, found) {
        (Node::Sequence(existing), Node::Sequence(more)) => existing.extend(more),
        (Node::Mapping(existing), Node::Mapping(more)) => {
            for (k, v) in more {
                merge_into(existing, &k, v);
            }
        }
        (existing, found) => *existing = found,
    }
}
