//! YAML loading and rendering
//!
//! This module is the boundary between YAML text and the [`Node`] model. Everything the tool
//! reads (dictionary, request, embedded schema) comes in through [`load_str`] or [`load_path`];
//! everything it prints as YAML goes out through [`to_yaml_string`].
//!
//! Loading works on the parser's event stream, so a scalar keeps its source text: `1.50`,
//! `0x1F` and a 36-digit float reach the emitter exactly as they were written. Plain `~`,
//! `null` and empty scalars are [`Node::Null`]; quoting any of them makes a scalar.
//! Rendering goes through `serde_yaml`.

use crate::error::LoadError;
use crate::node::{Mapping, Node};
use serde_yaml::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// Parse YAML text into a [`Node`]. Empty input is `Null`. Only the first document is read.
pub fn load_str(text: &str) -> Result<Node, LoadError> {
    let mut builder = TreeBuilder::default();
    Parser::new(text.chars())
        .load(&mut builder, false)
        .map_err(|e| LoadError::Syntax(e.to_string()))?;
    builder.finish()
}

/// Read and parse a YAML file
pub fn load_path(path: impl AsRef<Path>) -> Result<Node, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    load_str(&text)
}

/// Render a [`Node`] as YAML text
pub fn to_yaml_string(node: &Node) -> Result<String, LoadError> {
    serde_yaml::to_string(&Value::from(node)).map_err(|e| LoadError::Render(e.to_string()))
}

/// A collection still being filled by the event stream
enum Frame {
    Sequence {
        anchor: usize,
        items: Vec<Node>,
    },
    Mapping {
        anchor: usize,
        map: Mapping,
        key: Option<String>,
    },
}

/// Builds a [`Node`] tree from parser events
#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Frame>,
    anchors: HashMap<usize, Node>,
    root: Option<Node>,
    error: Option<String>,
}

impl TreeBuilder {
    fn finish(self) -> Result<Node, LoadError> {
        match self.error {
            Some(message) => Err(LoadError::Syntax(message)),
            None => Ok(self.root.unwrap_or(Node::Null)),
        }
    }

    fn close(&mut self, node: Node, anchor: usize, mark: Marker) {
        if anchor > 0 {
            self.anchors.insert(anchor, node.clone());
        }
        self.attach(node, mark);
    }

    fn attach(&mut self, node: Node, mark: Marker) {
        match self.stack.last_mut() {
            None => {
                self.root.get_or_insert(node);
            }
            Some(Frame::Sequence { items, .. }) => items.push(node),
            Some(Frame::Mapping { map, key, .. }) => match key.take() {
                Some(name) if map.contains_key(&name) => {
                    self.error = Some(format!(
                        "duplicate key '{}' at line {} column {}",
                        name,
                        mark.line(),
                        mark.col() + 1
                    ));
                }
                Some(name) => {
                    map.insert(name, node);
                }
                None => match node {
                    Node::Scalar(name) => *key = Some(name),
                    Node::Null => *key = Some(String::new()),
                    other => {
                        self.error = Some(format!(
                            "{} used as a mapping key at line {} column {}",
                            other.kind(),
                            mark.line(),
                            mark.col() + 1
                        ));
                    }
                },
            },
        }
    }

    fn awaiting_key(&mut self) -> Option<&mut Option<String>> {
        match self.stack.last_mut() {
            Some(Frame::Mapping { key, .. }) if key.is_none() => Some(key),
            _ => None,
        }
    }
}

impl MarkedEventReceiver for TreeBuilder {
    fn on_event(&mut self, event: Event, mark: Marker) {
        if self.error.is_some() {
            return;
        }
        match event {
            Event::Scalar(text, style, anchor, _) => match self.awaiting_key() {
                Some(key) => *key = Some(text),
                None => self.close(scalar_node(text, style), anchor, mark),
            },
            Event::Alias(id) => {
                let node = self.anchors.get(&id).cloned().unwrap_or(Node::Null);
                self.attach(node, mark);
            }
            Event::SequenceStart(anchor, _) => self.stack.push(Frame::Sequence {
                anchor,
                items: Vec::new(),
            }),
            Event::MappingStart(anchor, _) => self.stack.push(Frame::Mapping {
                anchor,
                map: Mapping::new(),
                key: None,
            }),
            Event::SequenceEnd | Event::MappingEnd => match self.stack.pop() {
                Some(Frame::Sequence { anchor, items }) => {
                    self.close(Node::Sequence(items), anchor, mark)
                }
                Some(Frame::Mapping { anchor, map, .. }) => {
                    self.close(Node::Mapping(map), anchor, mark)
                }
                None => {}
            },
            _ => {}
        }
    }
}

fn scalar_node(text: String, style: TScalarStyle) -> Node {
    let is_null = matches!(style, TScalarStyle::Plain)
        && matches!(text.as_str(), "" | "~" | "null" | "Null" | "NULL");
    if is_null {
        Node::Null
    } else {
        Node::Scalar(text)
    }
}

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        match node {
            Node::Null => Value::Null,
            Node::Scalar(s) => scalar_value(s),
            Node::Sequence(items) => Value::Sequence(items.iter().map(Value::from).collect()),
            Node::Mapping(map) => Value::Mapping(mapping_value(map)),
        }
    }
}

fn mapping_value(map: &Mapping) -> serde_yaml::Mapping {
    let mut out = serde_yaml::Mapping::new();
    for (key, value) in map.iter() {
        out.insert(Value::String(key.to_string()), Value::from(value));
    }
    out
}

/// Scalars that render back to exactly the same text as a YAML number or boolean are written
/// unquoted; anything else stays a string.
fn scalar_value(s: &str) -> Value {
    match s {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    let number = if let Ok(i) = s.parse::<i64>() {
        Some(serde_yaml::Number::from(i))
    } else if let Ok(u) = s.parse::<u64>() {
        Some(serde_yaml::Number::from(u))
    } else {
        s.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(serde_yaml::Number::from)
    };
    match number {
        Some(n) if n.to_string() == s => Value::Number(n),
        _ => Value::String(s.to_string()),
    }
}
