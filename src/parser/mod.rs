use crate::lexer::{Event, EventSource, Lexer};
use crate::node::Node;
use crate::EmbedYamlError;

mod document;
mod value;

/// Recursive-descent builder that turns an event stream into a [`Node`] tree.
///
/// Any error aborts the whole build; no partially populated tree is ever returned.
pub struct Parser<S: EventSource> {
    source: S,
}

impl<'a> Parser<Lexer<'a>> {
    /// Parser over the built-in block-style lexer.
    pub fn from_text(input: &'a str) -> Self {
        Parser::new(Lexer::new(input))
    }
}

impl<S: EventSource> Parser<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub(crate) fn bump(&mut self) -> Result<Event, EmbedYamlError> {
        match self.source.next_event()? {
            Some(event) => Ok(event),
            None => Err(self.error(
                "Unexpected end of event stream",
                "The input ended before the document was complete",
                201,
            )),
        }
    }

    pub(crate) fn expect(&mut self, expected: Event, code: u32) -> Result<(), EmbedYamlError> {
        let event = self.bump()?;
        if event != expected {
            return Err(self.error(
                format!("Expected {:?}, got {:?}", expected, event),
                "Check the structure of the event stream",
                code,
            ));
        }
        Ok(())
    }

    pub(crate) fn error(&self, message: impl Into<String>, hint: &str, code: u32) -> EmbedYamlError {
        let (line, column) = self.source.position();
        EmbedYamlError::ParseError {
            message: message.into(),
            line,
            column,
            hint: Some(hint.into()),
            code: Some(code),
        }
    }

    /// Consume a whole single-document stream and return its root node.
    pub fn parse_document(&mut self) -> Result<Node, EmbedYamlError> {
        document::parse_document(self)
    }

    /// Build one node from the next event.
    pub fn parse_node(&mut self) -> Result<Node, EmbedYamlError> {
        value::parse_node(self)
    }
}
