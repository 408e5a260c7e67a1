//! In-memory document model for block-style YAML, with an event-driven builder and a
//! block-style emitter.
//!
//! ```
//! let doc = embed_yaml::parse("name: John Doe\nage: 30\n").unwrap();
//! assert_eq!(doc["age"].parse::<i32>().unwrap(), 30);
//! assert_eq!(embed_yaml::emit(&doc).unwrap(), "name: John Doe\nage: 30\n");
//! ```

pub mod config;
pub mod emitter;
pub mod error;
pub mod export;
pub mod lexer;
pub mod node;
pub mod parser;

pub use config::YamlConfig;
pub use emitter::Emitter;
pub use error::{EmbedYamlError, ErrorKind};
pub use lexer::{Event, EventSource, Lexer};
pub use node::{FromNode, Node, NodeKind};
pub use parser::Parser;

/// Build a tree from block-style YAML text.
///
/// # Errors
/// Returns [`EmbedYamlError::ParseError`] for malformed input; no partial tree is returned.
pub fn parse(text: &str) -> Result<Node, EmbedYamlError> {
    Parser::from_text(text).parse_document()
}

/// Build a tree from an already tokenized event stream.
pub fn parse_events<S: EventSource>(source: S) -> Result<Node, EmbedYamlError> {
    Parser::new(source).parse_document()
}

/// Render a tree as block-style text with two-space indentation.
pub fn emit(node: &Node) -> Result<String, EmbedYamlError> {
    Emitter::default().emit(node)
}
