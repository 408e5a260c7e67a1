use super::*;

/// One non-blank source line with comments removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Line<'a> {
    /// Column (0-based) where `text` starts.
    pub indent: usize,
    pub text: &'a str,
}

impl<'a> Line<'a> {
    pub fn is_document_end(&self) -> bool {
        self.indent == 0 && self.text == "..."
    }

    /// For a `---` marker line, the remainder after the marker.
    pub fn document_start(&self) -> Option<Line<'a>> {
        if self.indent != 0 {
            return None;
        }
        if self.text == "---" {
            return Some(Line { text: "", indent: 3 });
        }
        let rest = self.text.strip_prefix("--- ")?;
        let trimmed = rest.trim_start();
        Some(Line {
            text: trimmed,
            indent: 4 + rest.len() - trimmed.len(),
        })
    }
}

/// Advance to the next line that carries content, updating the lexer position.
pub(super) fn next_line<'a>(lexer: &mut Lexer<'a>) -> Result<Option<Line<'a>>, EmbedYamlError> {
    while let Some((idx, raw)) = lexer.lines.next() {
        lexer.line = idx + 1;
        lexer.column = 1;

        let body = raw.trim_start_matches(' ');
        let indent = raw.len() - body.len();
        let text = strip_comment(body).trim_end();
        if text.is_empty() {
            continue;
        }
        if text.starts_with('\t') {
            lexer.column = indent + 1;
            return Err(lexer.error(
                "Tabs are not allowed in indentation",
                "Indent with spaces only",
                101,
            ));
        }

        lexer.column = indent + 1;
        return Ok(Some(Line { indent, text }));
    }
    Ok(None)
}

/// Cut a trailing `#` comment, ignoring `#` inside quoted scalars or glued to a word.
pub(super) fn strip_comment(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let at_token_start = i == 0 || bytes[i - 1] == b' ' || bytes[i - 1] == b'\t';
        match quote {
            Some(b'"') if b == b'\\' => i += 1,
            Some(b'\'') if b == b'\'' && bytes.get(i + 1) == Some(&b'\'') => i += 1,
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if (b == b'"' || b == b'\'') && at_token_start => quote = Some(b),
            None if b == b'#' && at_token_start => return &text[..i],
            None => {}
        }
        i += 1;
    }

    text
}
