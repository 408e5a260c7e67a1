use std::fmt;
use std::ops::{Index, IndexMut};

use super::{Node, NULL};

impl Node {
    /// Return the value stored under `key`, inserting a `Null` entry at the end of the map when
    /// the key is absent. A `Null` node becomes an empty map first, so chained calls build
    /// intermediate maps on the way down.
    ///
    /// This is a materializing read: looking up a missing key changes the document. Use
    /// [`Node::get`] when only the existence of a key matters.
    ///
    /// ```
    /// use embed_yaml::{Node, NodeKind};
    ///
    /// let mut doc = Node::new(NodeKind::Map);
    /// doc.get_or_insert("a").get_or_insert("b").assign(1);
    /// assert_eq!(doc["a"]["b"].as_str(), Some("1"));
    /// ```
    ///
    /// # Panics
    /// Panics if the node is a scalar or a sequence.
    pub fn get_or_insert(&mut self, key: &str) -> &mut Node {
        if self.is_null() {
            *self = Node::Map(Vec::new());
        }
        match self {
            Node::Map(entries) => {
                let idx = match entries.iter().position(|(k, _)| k == key) {
                    Some(idx) => idx,
                    None => {
                        entries.push((key.to_string(), Node::Null));
                        entries.len() - 1
                    }
                };
                &mut entries[idx].1
            }
            other => panic!("get_or_insert(\"{}\") called on a {:?} node", key, other.kind()),
        }
    }

    /// First value stored under `key`, or `None` if the key is absent or this is not a map.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_map()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        match self {
            Node::Map(entries) => entries.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Child at `index` of a sequence, or value of the `index`-th entry of a map.
    pub fn get_index(&self, index: usize) -> Option<&Node> {
        match self {
            Node::Sequence(items) => items.get(index),
            Node::Map(entries) => entries.get(index).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn get_index_mut(&mut self, index: usize) -> Option<&mut Node> {
        match self {
            Node::Sequence(items) => items.get_mut(index),
            Node::Map(entries) => entries.get_mut(index).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Append `value` to a sequence and return the sequence for chaining. A `Null` node becomes
    /// an empty sequence first.
    ///
    /// A [`Node`] is moved in as is; anything else convertible into a node (strings, numbers,
    /// booleans) becomes a new scalar child.
    ///
    /// # Panics
    /// Panics if the node is a scalar or a map.
    pub fn append<V: Into<Node>>(&mut self, value: V) -> &mut Self {
        if self.is_null() {
            *self = Node::Sequence(Vec::new());
        }
        match self {
            Node::Sequence(items) => items.push(value.into()),
            other => panic!("append called on a {:?} node", other.kind()),
        }
        self
    }

    /// Overwrite this node with a scalar holding the text form of `value`.
    ///
    /// Whatever the node held before, sequence or map included, is dropped.
    pub fn assign<V: fmt::Display>(&mut self, value: V) {
        *self = Node::Scalar(value.to_string());
    }

    /// Replace this node with `value`.
    pub fn set<V: Into<Node>>(&mut self, value: V) {
        *self = value.into();
    }

    /// Map keys in insertion order. Empty for every other kind.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.as_map()
            .into_iter()
            .flatten()
            .map(|(k, _)| k.as_str())
    }

    /// Map entries in insertion order, duplicates included.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Node)> + '_ {
        self.as_map()
            .into_iter()
            .flatten()
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Sequence children in order. Empty for every other kind.
    pub fn items(&self) -> impl Iterator<Item = &Node> + '_ {
        self.as_sequence().into_iter().flatten()
    }
}

/// Non-materializing lookup: an absent key (or a non-map node) yields a `Null` node.
impl Index<&str> for Node {
    type Output = Node;

    fn index(&self, key: &str) -> &Node {
        self.get(key).unwrap_or(&NULL)
    }
}

/// # Panics
/// Panics if the node is neither a sequence nor a map, or `index` is out of bounds.
impl Index<usize> for Node {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        match self.get_index(index) {
            Some(node) => node,
            None => panic!(
                "index {} out of bounds for {:?} node of length {}",
                index,
                self.kind(),
                self.len()
            ),
        }
    }
}

impl IndexMut<usize> for Node {
    fn index_mut(&mut self, index: usize) -> &mut Node {
        let (kind, len) = (self.kind(), self.len());
        match self.get_index_mut(index) {
            Some(node) => node,
            None => panic!(
                "index {} out of bounds for {:?} node of length {}",
                index, kind, len
            ),
        }
    }
}
