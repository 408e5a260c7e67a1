// Author: Dustin Pilgrim
// License: MIT

use std::collections::VecDeque;
use std::iter::Enumerate;
use std::str::Lines;

use crate::EmbedYamlError;

mod blocks;
mod scanner;
mod tokenizer;

/// A low-level parse event, as produced by an event source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    StreamStart,
    StreamEnd,
    DocumentStart,
    DocumentEnd,
    /// Scalar content, byte for byte.
    Scalar(String),
    SequenceStart,
    SequenceEnd,
    MappingStart,
    MappingEnd,
}

/// Pull-style producer of [`Event`]s.
///
/// Events are handed out one at a time and never replayed. `Ok(None)` means the producer has
/// nothing left.
pub trait EventSource {
    fn next_event(&mut self) -> Result<Option<Event>, EmbedYamlError>;

    /// 1-based line and column of the most recent event, `(0, 0)` if unknown.
    fn position(&self) -> (usize, usize) {
        (0, 0)
    }
}

impl<S: EventSource + ?Sized> EventSource for &mut S {
    fn next_event(&mut self) -> Result<Option<Event>, EmbedYamlError> {
        (**self).next_event()
    }

    fn position(&self) -> (usize, usize) {
        (**self).position()
    }
}

/// Hand-built event streams.
impl EventSource for std::vec::IntoIter<Event> {
    fn next_event(&mut self) -> Result<Option<Event>, EmbedYamlError> {
        Ok(self.next())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Sequence,
    Map,
}

/// An open block collection and the column its entries start at.
#[derive(Debug, Clone, Copy)]
struct Block {
    kind: BlockKind,
    indent: usize,
}

/// A `key:` or `-` still waiting for its value on a later line.
#[derive(Debug, Clone, Copy)]
struct Pending {
    indent: usize,
    in_map: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    BeforeDocument,
    InDocument,
    AfterDocument,
    Finished,
}

/// Event producer for the block-style subset: plain and quoted scalars, block sequences and
/// block mappings in a single document.
pub struct Lexer<'a> {
    lines: Enumerate<Lines<'a>>,
    queue: VecDeque<Event>,
    stack: Vec<Block>,
    pending: Option<Pending>,
    state: State,
    root_started: bool,
    root_done: bool,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            lines: input.lines().enumerate(),
            queue: VecDeque::new(),
            stack: Vec::new(),
            pending: None,
            state: State::Start,
            root_started: false,
            root_done: false,
            line: 1,
            column: 0,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    fn error(&self, message: impl Into<String>, hint: &str, code: u32) -> EmbedYamlError {
        EmbedYamlError::ParseError {
            message: message.into(),
            line: self.line,
            column: self.column,
            hint: Some(hint.into()),
            code: Some(code),
        }
    }

    /// Read lines until at least one event is queued or the stream is finished.
    fn advance(&mut self) -> Result<(), EmbedYamlError> {
        match self.state {
            State::Start => {
                self.queue.push_back(Event::StreamStart);
                self.state = State::BeforeDocument;
            }
            State::BeforeDocument => match scanner::next_line(self)? {
                None => {
                    self.queue.push_back(Event::StreamEnd);
                    self.state = State::Finished;
                }
                Some(line) if line.is_document_end() => {}
                Some(line) => {
                    self.queue.push_back(Event::DocumentStart);
                    self.state = State::InDocument;
                    match line.document_start() {
                        Some(rest) if rest.text.is_empty() => {}
                        Some(rest) => blocks::process_line(self, &rest)?,
                        None => blocks::process_line(self, &line)?,
                    }
                }
            },
            State::InDocument => match scanner::next_line(self)? {
                None => {
                    blocks::finish_document(self);
                    self.queue.push_back(Event::StreamEnd);
                    self.state = State::Finished;
                }
                Some(line) if line.is_document_end() => {
                    blocks::finish_document(self);
                    self.state = State::AfterDocument;
                }
                Some(line) if line.document_start().is_some() => {
                    return Err(self.error(
                        "Multiple documents in one stream are not supported",
                        "Split the stream into separate inputs",
                        120,
                    ));
                }
                Some(line) => blocks::process_line(self, &line)?,
            },
            State::AfterDocument => match scanner::next_line(self)? {
                None => {
                    self.queue.push_back(Event::StreamEnd);
                    self.state = State::Finished;
                }
                Some(line) if line.is_document_end() => {}
                Some(line) if line.document_start().is_some() => {
                    return Err(self.error(
                        "Multiple documents in one stream are not supported",
                        "Split the stream into separate inputs",
                        120,
                    ));
                }
                Some(_) => {
                    return Err(self.error(
                        "Unexpected content after document end marker",
                        "Remove the '...' marker or the text after it",
                        121,
                    ));
                }
            },
            State::Finished => {}
        }
        Ok(())
    }
}

impl EventSource for Lexer<'_> {
    fn next_event(&mut self) -> Result<Option<Event>, EmbedYamlError> {
        loop {
            if let Some(event) = self.queue.pop_front() {
                return Ok(Some(event));
            }
            if self.state == State::Finished {
                return Ok(None);
            }
            self.advance()?;
        }
    }

    fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }
}
