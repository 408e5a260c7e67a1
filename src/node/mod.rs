// Author: Dustin Pilgrim
// License: MIT

mod access;
mod conversion;

pub use conversion::FromNode;

/// The kind of a [`Node`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Scalar,
    Sequence,
    Map,
}

/// A single point in a document tree.
///
/// Children are owned by their parent, so the tree has no sharing and no cycles. Map entries
/// keep insertion order and may contain duplicate keys; lookups return the first match.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    #[default]
    Null,
    /// Raw scalar text, interpreted lazily by [`Node::parse`].
    Scalar(String),
    Sequence(Vec<Node>),
    Map(Vec<(String, Node)>),
}

pub(crate) static NULL: Node = Node::Null;

impl Node {
    /// Create an empty node of the given kind.
    pub fn new(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Null => Node::Null,
            NodeKind::Scalar => Node::Scalar(String::new()),
            NodeKind::Sequence => Node::Sequence(Vec::new()),
            NodeKind::Map => Node::Map(Vec::new()),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Null => NodeKind::Null,
            Node::Scalar(_) => NodeKind::Scalar,
            Node::Sequence(_) => NodeKind::Sequence,
            Node::Map(_) => NodeKind::Map,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Node::Sequence(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Node::Map(_))
    }

    /// Number of children for containers. `Null` and `Scalar` count as a single value.
    pub fn len(&self) -> usize {
        match self {
            Node::Sequence(items) => items.len(),
            Node::Map(entries) => entries.len(),
            Node::Null | Node::Scalar(_) => 1,
        }
    }

    /// True only for a sequence or map without children.
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Sequence(items) => items.is_empty(),
            Node::Map(entries) => entries.is_empty(),
            Node::Null | Node::Scalar(_) => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Node::Scalar(text) = self {
            Some(text)
        } else {
            None
        }
    }

    pub fn as_sequence(&self) -> Option<&Vec<Node>> {
        if let Node::Sequence(items) = self {
            Some(items)
        } else {
            None
        }
    }

    pub fn as_map(&self) -> Option<&Vec<(String, Node)>> {
        if let Node::Map(entries) = self {
            Some(entries)
        } else {
            None
        }
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Scalar(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Scalar(value.to_string())
    }
}

impl From<&String> for Node {
    fn from(value: &String) -> Self {
        Node::Scalar(value.clone())
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::Sequence(items)
    }
}

impl From<Vec<(String, Node)>> for Node {
    fn from(entries: Vec<(String, Node)>) -> Self {
        Node::Map(entries)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Node::Null, Into::into)
    }
}

// Numbers and booleans use their `Display` form, which for floats is the shortest text that
// parses back to the same value.
macro_rules! scalar_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);
