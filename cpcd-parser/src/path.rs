//! Locations inside a document tree, for error messages

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
}

/// Path from the document root to a node, rendered as `root.set[0].gravity.entries[2]`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodePath {
    segments: Vec<Segment>,
}

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of the value stored under `key` below this path
    pub fn key(&self, key: &str) -> Self {
        self.child(Segment::Key(key.to_string()))
    }

    /// Path of the element at `index` below this path
    pub fn index(&self, index: usize) -> Self {
        self.child(Segment::Index(index))
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    fn child(&self, segment: Segment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => write!(f, "{}", key)?,
                Segment::Key(key) => write!(f, ".{}", key)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}
