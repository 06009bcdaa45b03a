//! Request normalization
//!
//! A user request names the constants to extract, grouped by set:
//!
//! ```yaml
//! universal: [pi, c]
//! earth: g
//! ```
//!
//! [`normalize`] turns it into a [`Query`]: one entry per group in first-seen order, each
//! holding the requested names sorted lexically with duplicates removed. A bare scalar counts
//! as a one-name list.

use crate::error::RequestError;
use crate::node::{Mapping, Node};
use std::collections::BTreeSet;

/// Canonical request: group name → sorted, unique constant names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    node: Node,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            node: Node::Mapping(Mapping::new()),
        }
    }
}

impl Query {
    /// The query as a tree, the shape the extractor walks
    pub fn as_node(&self) -> &Node {
        &self.node
    }

    pub fn is_empty(&self) -> bool {
        self.node.as_mapping().map_or(true, Mapping::is_empty)
    }

    /// Group names in first-seen order
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.node.as_mapping().into_iter().flat_map(|map| map.keys())
    }

    /// Requested names for `group`
    pub fn names(&self, group: &str) -> Vec<&str> {
        self.node
            .get(group)
            .and_then(Node::as_sequence)
            .map(|items| items.iter().filter_map(Node::as_scalar).collect())
            .unwrap_or_default()
    }
}

/// Normalize a raw request into a [`Query`].
///
/// A `Null` request (an empty file) is an empty query.
pub fn normalize(request: &Node) -> Result<Query, RequestError> {
    let map = match request {
        Node::Null => return Ok(Query::default()),
        Node::Mapping(map) => map,
        Node::Scalar(_) | Node::Sequence(_) => {
            return Err(RequestError::NotAMapping {
                found: request.kind(),
            })
        }
    };

    let mut query = Mapping::new();
    for (group, value) in map.iter() {
        let names: BTreeSet<&str> = group_names(group, value)?.into_iter().collect();
        let names = names.into_iter().map(Node::from).collect();
        query.insert(group, Node::Sequence(names));
    }
    Ok(Query {
        node: Node::Mapping(query),
    })
}

fn group_names<'a>(group: &str, value: &'a Node) -> Result<Vec<&'a str>, RequestError> {
    match value {
        Node::Scalar(name) => Ok(vec![name.as_str()]),
        Node::Sequence(items) => items
            .iter()
            .map(|item| {
                item.as_scalar().ok_or_else(|| RequestError::NonScalarName {
                    group: group.to_string(),
                })
            })
            .collect(),
        Node::Null | Node::Mapping(_) => Err(RequestError::NestedMapNotAllowed {
            group: group.to_string(),
        }),
    }
}
