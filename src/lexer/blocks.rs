use super::scanner::Line;
use super::tokenizer::{self, Entry};
use super::*;

/// Turn one content line into events, opening and closing blocks around it.
pub(super) fn process_line(lexer: &mut Lexer, line: &Line) -> Result<(), EmbedYamlError> {
    let is_dash = tokenizer::is_dash(line.text);

    if let Some(pending) = lexer.pending.take() {
        // A sequence may sit at the same column as the key that owns it.
        if line.indent > pending.indent || (pending.in_map && is_dash && line.indent == pending.indent) {
            return start_node(lexer, line.text, line.indent);
        }
        lexer.queue.push_back(Event::Scalar(String::new()));
    }

    close_blocks(lexer, line.indent, is_dash);

    let Some(top) = lexer.stack.last().copied() else {
        if lexer.root_done {
            return Err(lexer.error(
                "Unexpected content after the document root",
                "A document holds a single root node; check the indentation",
                111,
            ));
        }
        return start_node(lexer, line.text, line.indent);
    };

    if top.indent != line.indent {
        return Err(lexer.error(
            format!(
                "Bad indentation: expected column {}, found column {}",
                top.indent + 1,
                line.indent + 1
            ),
            "Entries of one block must start at the same column",
            110,
        ));
    }

    match (top.kind, tokenizer::classify(lexer, line.text, line.indent)?) {
        (BlockKind::Sequence, Entry::Dash { rest, column }) => sequence_entry(lexer, top, rest, column),
        (BlockKind::Map, Entry::Key { key, value, column }) => map_entry(lexer, top, key, value, column),
        (BlockKind::Map, Entry::Dash { .. }) => Err(lexer.error(
            "Block sequence entries are not allowed inside this mapping",
            "Indent the sequence under a key",
            115,
        )),
        (_, _) => Err(lexer.error(
            "Expected a mapping entry",
            "Write entries as 'key: value'",
            118,
        )),
    }
}

/// Start a new node at `column`: a block collection or a single scalar.
fn start_node(lexer: &mut Lexer, text: &str, column: usize) -> Result<(), EmbedYamlError> {
    let is_root = lexer.stack.is_empty();
    lexer.root_started = true;

    match tokenizer::classify(lexer, text, column)? {
        Entry::Dash { rest, column: rest_column } => {
            let block = Block { kind: BlockKind::Sequence, indent: column };
            lexer.queue.push_back(Event::SequenceStart);
            lexer.stack.push(block);
            sequence_entry(lexer, block, rest, rest_column)
        }
        Entry::Key { key, value, column: value_column } => {
            let block = Block { kind: BlockKind::Map, indent: column };
            lexer.queue.push_back(Event::MappingStart);
            lexer.stack.push(block);
            map_entry(lexer, block, key, value, value_column)
        }
        Entry::Scalar(scalar) => {
            lexer.queue.push_back(Event::Scalar(scalar));
            if is_root {
                lexer.root_done = true;
            }
            Ok(())
        }
    }
}

fn sequence_entry(lexer: &mut Lexer, block: Block, rest: &str, column: usize) -> Result<(), EmbedYamlError> {
    if rest.is_empty() {
        lexer.pending = Some(Pending { indent: block.indent, in_map: false });
        return Ok(());
    }
    start_node(lexer, rest, column)
}

fn map_entry(
    lexer: &mut Lexer,
    block: Block,
    key: String,
    value: &str,
    column: usize,
) -> Result<(), EmbedYamlError> {
    lexer.queue.push_back(Event::Scalar(key));
    if value.is_empty() {
        lexer.pending = Some(Pending { indent: block.indent, in_map: true });
        return Ok(());
    }
    let scalar = tokenizer::value(lexer, value, column)?;
    lexer.queue.push_back(Event::Scalar(scalar));
    Ok(())
}

/// Close every block the line at `indent` falls outside of.
fn close_blocks(lexer: &mut Lexer, indent: usize, is_dash: bool) {
    while let Some(top) = lexer.stack.last().copied() {
        let outside = top.indent > indent
            || (top.indent == indent && top.kind == BlockKind::Sequence && !is_dash);
        if !outside {
            break;
        }
        pop_block(lexer);
    }
}

fn pop_block(lexer: &mut Lexer) {
    if let Some(block) = lexer.stack.pop() {
        lexer.queue.push_back(match block.kind {
            BlockKind::Sequence => Event::SequenceEnd,
            BlockKind::Map => Event::MappingEnd,
        });
        if lexer.stack.is_empty() {
            lexer.root_done = true;
        }
    }
}

/// Resolve a dangling value, close all open blocks and end the document.
pub(super) fn finish_document(lexer: &mut Lexer) {
    if lexer.pending.take().is_some() || !lexer.root_started {
        lexer.queue.push_back(Event::Scalar(String::new()));
        lexer.root_started = true;
    }
    while !lexer.stack.is_empty() {
        pop_block(lexer);
    }
    lexer.root_done = true;
    lexer.queue.push_back(Event::DocumentEnd);
}
