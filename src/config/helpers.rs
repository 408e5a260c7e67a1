use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::node::Node;

/// Leading spaces and dashes, then a plain or quoted key followed by `:`.
static KEY_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(?P<lead> *(?:- +)*)(?P<key>"[^"]*"|'[^']*'|[^\s#'"\-][^#]*?|-[^\s#][^#]*?)\s*:(?: |$)"#)
        .expect("key line pattern is valid")
});

pub(super) fn resolve_path(raw_path: &str, base_dir: &Path) -> PathBuf {
    let path_str = raw_path.trim();

    if let Some(rest) = path_str.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        return path;
    }

    base_dir.join(path)
}

/// Walk `root` along `segments`. Map segments are keys; sequence segments are indices.
pub(super) fn lookup<'a>(root: &'a Node, segments: &[String]) -> Option<&'a Node> {
    let mut node = root;
    for seg in segments {
        node = match node {
            Node::Map(_) => node.get(seg)?,
            Node::Sequence(items) => items.get(seg.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(node)
}

pub(super) fn split_path(path: &str) -> Vec<String> {
    if path.trim().is_empty() {
        return Vec::new();
    }
    path.split('.').map(|s| s.to_string()).collect()
}

/// Find the 1-based line number and trimmed text of the line defining `key` (dotted path).
///
/// Returns `(0, "<key not found>")` when no line matches.
pub(super) fn find_config_line(key: &str, raw_content: &str) -> (usize, String) {
    // Sequence indices never show up as keys in the text.
    let key_parts: Vec<&str> = key
        .split('.')
        .filter(|part| part.parse::<usize>().is_err())
        .collect();
    let mut scope_stack: Vec<(usize, String)> = Vec::new();
    let mut fallback: Option<(usize, String)> = None;

    for (idx, line) in raw_content.lines().enumerate() {
        let Some(caps) = KEY_LINE.captures(line) else {
            continue;
        };
        let column = caps["lead"].len();
        let line_key = caps["key"].trim_matches(|c| c == '"' || c == '\'').to_string();

        while scope_stack.last().is_some_and(|(indent, _)| *indent >= column) {
            scope_stack.pop();
        }

        let mut full_path: Vec<&str> = scope_stack.iter().map(|(_, k)| k.as_str()).collect();
        full_path.push(&line_key);

        if full_path == key_parts {
            return (idx + 1, line.trim().to_string());
        }

        if fallback.is_none() && key_parts.last() == Some(&line_key.as_str()) {
            fallback = Some((idx + 1, line.trim().to_string()));
        }

        scope_stack.push((column, line_key));
    }

    fallback.unwrap_or((0, "<key not found>".into()))
}
