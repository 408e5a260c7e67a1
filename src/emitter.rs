// Author: Dustin Pilgrim
// License: MIT

use crate::node::Node;
use crate::EmbedYamlError;

/// Block-style text renderer.
///
/// Indentation is derived from the shape of the tree on every call; nothing about the source
/// formatting is stored in the nodes. Scalars are written verbatim, without quoting.
///
/// # Examples
/// ```
/// use embed_yaml::{Emitter, Node, NodeKind};
///
/// let mut doc = Node::new(NodeKind::Map);
/// doc.get_or_insert("name").assign("John Doe");
/// doc.get_or_insert("age").assign(30);
///
/// let text = Emitter::default().emit(&doc).unwrap();
/// assert_eq!(text, "name: John Doe\nage: 30\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitter {
    /// Spaces per nesting level.
    pub indent_width: usize,
    /// Reject documents whose root is a bare scalar or null.
    pub require_collection_root: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self {
            indent_width: 2,
            require_collection_root: false,
        }
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn with_collection_root(mut self, required: bool) -> Self {
        self.require_collection_root = required;
        self
    }

    /// Render `node` as a document.
    ///
    /// # Errors
    /// Returns [`EmbedYamlError::EmissionError`] if the root is not a sequence or map while
    /// [`Emitter::require_collection_root`] is set, or if `indent_width` is zero.
    pub fn emit(&self, node: &Node) -> Result<String, EmbedYamlError> {
        if self.indent_width == 0 {
            return Err(EmbedYamlError::EmissionError {
                message: "Indent width must be at least one space".into(),
                hint: Some("Nested blocks are only recognised by their indentation".into()),
                code: Some(502),
            });
        }
        if self.require_collection_root && !(node.is_sequence() || node.is_map()) {
            return Err(EmbedYamlError::EmissionError {
                message: format!("Document root must be a sequence or map, got {:?}", node.kind()),
                hint: Some("Wrap the value in a map or sequence".into()),
                code: Some(501),
            });
        }
        self.emit_node(node, 0)
    }

    fn indent(&self, level: usize) -> String {
        " ".repeat(level * self.indent_width)
    }

    fn emit_node(&self, node: &Node, level: usize) -> Result<String, EmbedYamlError> {
        match node {
            Node::Null => Ok("null".to_string()),
            Node::Scalar(text) => Ok(text.clone()),
            Node::Sequence(items) => self.emit_sequence(items, level),
            Node::Map(entries) => self.emit_map(entries, level),
        }
    }

    fn emit_sequence(&self, items: &[Node], level: usize) -> Result<String, EmbedYamlError> {
        let pad = self.indent(level);
        let mut out = String::new();

        for item in items {
            match item {
                Node::Null | Node::Scalar(_) => {
                    out.push_str(&format!("{}- {}\n", pad, self.emit_node(item, level)?));
                }
                Node::Sequence(_) | Node::Map(_) => {
                    let child = self.emit_node(item, level + 1)?;
                    out.push_str(&format!("{}-\n{}", pad, child));
                }
            }
        }

        Ok(out)
    }

    fn emit_map(&self, entries: &[(String, Node)], level: usize) -> Result<String, EmbedYamlError> {
        let pad = self.indent(level);
        let mut out = String::new();

        for (key, value) in entries {
            match value {
                Node::Null | Node::Scalar(_) => {
                    out.push_str(&format!("{}{}: {}\n", pad, key, self.emit_node(value, level)?));
                }
                // Sequences under a key stay at the key's column.
                Node::Sequence(_) => {
                    let child = self.emit_node(value, level)?;
                    out.push_str(&format!("{}{}:\n{}", pad, key, child));
                }
                Node::Map(_) => {
                    let child = self.emit_node(value, level + 1)?;
                    out.push_str(&format!("{}{}:\n{}", pad, key, child));
                }
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    #[test]
    fn test_emit_nested_map_and_sequence() {
        let mut doc = Node::new(NodeKind::Map);
        doc.get_or_insert("person")
            .set(Node::new(NodeKind::Sequence));
        doc.get_or_insert("person").append("Name 1").append("Name 2");
        doc.get_or_insert("other").set(Node::new(NodeKind::Map));
        doc.get_or_insert("other").get_or_insert("key").assign(42);

        let text = Emitter::default().emit(&doc).unwrap();
        assert_eq!(text, "person:\n- Name 1\n- Name 2\nother:\n  key: 42\n");
    }

    #[test]
    fn test_emit_null_and_scalar_roots() {
        let emitter = Emitter::default();
        assert_eq!(emitter.emit(&Node::Null).unwrap(), "null");
        assert_eq!(emitter.emit(&Node::from("plain text")).unwrap(), "plain text");
    }

    #[test]
    fn test_emit_null_values_inside_collections() {
        let doc = Node::Map(vec![
            ("missing".into(), Node::Null),
            ("list".into(), Node::Sequence(vec![Node::Null, Node::from("x")])),
        ]);
        let text = Emitter::default().emit(&doc).unwrap();
        assert_eq!(text, "missing: null\nlist:\n- null\n- x\n");
    }

    #[test]
    fn test_emit_containers_inside_sequence() {
        let doc = Node::Sequence(vec![
            Node::Sequence(vec![Node::from("a"), Node::from("b")]),
            Node::Map(vec![("k".into(), Node::from("v")), ("n".into(), Node::from("1"))]),
            Node::from("tail"),
        ]);
        let text = Emitter::default().emit(&doc).unwrap();
        assert_eq!(text, "-\n  - a\n  - b\n-\n  k: v\n  n: 1\n- tail\n");
    }

    #[test]
    fn test_emit_deeply_nested_maps() {
        let mut doc = Node::new(NodeKind::Map);
        doc.get_or_insert("a").set(Node::new(NodeKind::Map));
        doc.get_or_insert("a").get_or_insert("b").set(Node::new(NodeKind::Map));
        doc.get_or_insert("a").get_or_insert("b").get_or_insert("c").assign("deep");
        doc.get_or_insert("a").get_or_insert("list").set(vec![Node::from("x")]);

        let text = Emitter::default().emit(&doc).unwrap();
        assert_eq!(text, "a:\n  b:\n    c: deep\n  list:\n  - x\n");
    }

    #[test]
    fn test_emit_keeps_duplicate_keys_in_order() {
        let doc = Node::Map(vec![
            ("k".into(), Node::from("1")),
            ("j".into(), Node::from("2")),
            ("k".into(), Node::from("3")),
        ]);
        assert_eq!(Emitter::default().emit(&doc).unwrap(), "k: 1\nj: 2\nk: 3\n");
    }

    #[test]
    fn test_emit_custom_indent_width() {
        let doc = Node::Map(vec![(
            "outer".into(),
            Node::Map(vec![("inner".into(), Node::from("v"))]),
        )]);
        let text = Emitter::new().with_indent_width(4).emit(&doc).unwrap();
        assert_eq!(text, "outer:\n    inner: v\n");
    }

    #[test]
    fn test_emit_reflects_mutation_after_build() {
        let mut doc = Node::Map(vec![("a".into(), Node::from("1"))]);
        doc.get_or_insert("a").set(Node::Map(vec![("b".into(), Node::from("2"))]));
        assert_eq!(Emitter::default().emit(&doc).unwrap(), "a:\n  b: 2\n");

        doc.get_or_insert("a").assign("flat");
        assert_eq!(Emitter::default().emit(&doc).unwrap(), "a: flat\n");
    }

    #[test]
    fn test_require_collection_root() {
        let emitter = Emitter::new().with_collection_root(true);
        let err = emitter.emit(&Node::Null).unwrap_err();
        assert!(matches!(err, EmbedYamlError::EmissionError { code: Some(501), .. }));
        assert!(emitter.emit(&Node::new(NodeKind::Map)).is_ok());
    }

    #[test]
    fn test_zero_indent_is_rejected() {
        let err = Emitter::new().with_indent_width(0).emit(&Node::Null).unwrap_err();
        assert!(matches!(err, EmbedYamlError::EmissionError { code: Some(502), .. }));
    }
}
