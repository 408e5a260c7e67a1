use super::*;

/// What a piece of line content starts: a sequence entry, a mapping entry or a bare scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Entry<'a> {
    /// `- rest`; `column` is where `rest` begins.
    Dash { rest: &'a str, column: usize },
    /// `key: value`; `column` is where `value` begins.
    Key { key: String, value: &'a str, column: usize },
    Scalar(String),
}

pub(super) fn is_dash(text: &str) -> bool {
    text == "-" || text.starts_with("- ")
}

pub(super) fn classify<'a>(lexer: &Lexer, text: &'a str, column: usize) -> Result<Entry<'a>, EmbedYamlError> {
    if is_dash(text) {
        let rest = text[1..].trim_start();
        return Ok(Entry::Dash { rest, column: column + text.len() - rest.len() });
    }

    reject_unsupported(lexer, text, column)?;

    if text.starts_with('"') || text.starts_with('\'') {
        let (decoded, consumed) = quoted(lexer, text, column)?;
        let after = text[consumed..].trim_start();
        if after.is_empty() {
            return Ok(Entry::Scalar(decoded));
        }
        return match key_value(after) {
            Some(value) => Ok(Entry::Key {
                key: decoded,
                value,
                column: column + text.len() - value.len(),
            }),
            None => Err(error_at(
                lexer,
                column + consumed,
                "Unexpected text after quoted scalar",
                "Quote the whole value or remove the trailing text",
                109,
            )),
        };
    }

    match find_key_indicator(text) {
        Some(idx) => {
            let key = text[..idx].trim_end();
            if key.is_empty() {
                return Err(error_at(lexer, column, "Empty mapping key", "Give every entry a key before ':'", 112));
            }
            let value = text[idx + 1..].trim_start();
            Ok(Entry::Key {
                key: key.to_string(),
                value,
                column: column + text.len() - value.len(),
            })
        }
        None => Ok(Entry::Scalar(text.to_string())),
    }
}

/// Decode the inline value of a `key: value` line.
pub(super) fn value(lexer: &Lexer, text: &str, column: usize) -> Result<String, EmbedYamlError> {
    if is_dash(text) {
        return Err(error_at(
            lexer,
            column,
            "Block sequence entries are not allowed on a value line",
            "Start the sequence on the next line",
            114,
        ));
    }

    reject_unsupported(lexer, text, column)?;

    if text.starts_with('"') || text.starts_with('\'') {
        let (decoded, consumed) = quoted(lexer, text, column)?;
        if !text[consumed..].trim().is_empty() {
            return Err(error_at(
                lexer,
                column + consumed,
                "Unexpected text after quoted scalar",
                "Quote the whole value or remove the trailing text",
                109,
            ));
        }
        return Ok(decoded);
    }

    if find_key_indicator(text).is_some() {
        return Err(error_at(
            lexer,
            column,
            "Mapping values are not allowed here",
            "Quote the value or move the nested mapping to its own line",
            113,
        ));
    }

    Ok(text.to_string())
}

/// Byte offset of the first `:` that ends a key (followed by a space or end of text).
fn find_key_indicator(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    (0..bytes.len()).find(|&i| bytes[i] == b':' && (i + 1 == bytes.len() || bytes[i + 1] == b' '))
}

/// For text right after a quoted key, the value following `:`.
fn key_value(after: &str) -> Option<&str> {
    if after == ":" {
        Some("")
    } else {
        after.strip_prefix(": ").map(str::trim_start)
    }
}

fn reject_unsupported(lexer: &Lexer, text: &str, column: usize) -> Result<(), EmbedYamlError> {
    let (message, hint, code) = match text.chars().next() {
        Some('[') | Some('{') => ("Flow collections are not supported", "Use block sequences and mappings", 102),
        Some('&') => ("Anchors are not supported", "Repeat the content instead", 103),
        Some('*') => ("Aliases are not supported", "Repeat the content instead", 103),
        Some('!') => ("Tags are not supported", "Remove the tag", 104),
        Some('|') | Some('>') => ("Block scalars are not supported", "Use a single-line scalar", 105),
        Some('?') if text == "?" || text.starts_with("? ") => {
            ("Complex mapping keys are not supported", "Use a scalar key", 106)
        }
        Some('%') => ("Directives are not supported", "Remove the directive", 107),
        Some('@') | Some('`') => ("Reserved indicator at start of scalar", "Quote the scalar", 108),
        _ => return Ok(()),
    };
    Err(error_at(lexer, column, message, hint, code))
}

/// Decode a quoted scalar at the start of `text`, returning it and the bytes consumed.
fn quoted(lexer: &Lexer, text: &str, column: usize) -> Result<(String, usize), EmbedYamlError> {
    let mut chars = text.char_indices();
    let quote = match chars.next() {
        Some((_, q)) => q,
        None => return Ok((String::new(), 0)),
    };
    let mut content = String::new();

    while let Some((idx, ch)) = chars.next() {
        if quote == '\'' {
            if ch == '\'' {
                if text[idx + 1..].starts_with('\'') {
                    chars.next();
                    content.push('\'');
                    continue;
                }
                return Ok((content, idx + 1));
            }
            content.push(ch);
            continue;
        }

        match ch {
            '"' => return Ok((content, idx + 1)),
            '\\' => {
                let escaped = match chars.next() {
                    Some((_, 'n')) => '\n',
                    Some((_, 't')) => '\t',
                    Some((_, 'r')) => '\r',
                    Some((_, '0')) => '\0',
                    Some((_, '\\')) => '\\',
                    Some((_, '"')) => '"',
                    Some((_, '/')) => '/',
                    Some((_, ' ')) => ' ',
                    Some((pos, 'u')) => {
                        let hex = text.get(pos + 1..pos + 5).unwrap_or("");
                        let decoded = u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
                        match decoded {
                            Some(c) if hex.len() == 4 => {
                                for _ in 0..4 {
                                    chars.next();
                                }
                                c
                            }
                            _ => {
                                return Err(error_at(
                                    lexer,
                                    column + pos,
                                    "Invalid unicode escape",
                                    "Use \\u followed by four hex digits",
                                    116,
                                ));
                            }
                        }
                    }
                    Some((pos, other)) => {
                        return Err(error_at(
                            lexer,
                            column + pos,
                            format!("Unknown escape sequence '\\{}'", other),
                            "Escape backslashes as \\\\",
                            116,
                        ));
                    }
                    None => break,
                };
                content.push(escaped);
            }
            other => content.push(other),
        }
    }

    Err(error_at(
        lexer,
        column,
        "Unterminated quoted scalar",
        "Close the quote on the same line",
        117,
    ))
}

fn error_at(
    lexer: &Lexer,
    column: usize,
    message: impl Into<String>,
    hint: &str,
    code: u32,
) -> EmbedYamlError {
    EmbedYamlError::ParseError {
        message: message.into(),
        line: lexer.line,
        column: column + 1,
        hint: Some(hint.into()),
        code: Some(code),
    }
}
