// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::node::Node;
use crate::EmbedYamlError;

/// Serializes `Null` as unit, scalars as strings, sequences as sequences and maps as maps in
/// insertion order. Later duplicate keys are skipped so the output agrees with [`Node::get`].
impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Scalar(text) => serializer.serialize_str(text),
            Node::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Map(entries) => {
                let mut seen = HashSet::new();
                let mut map = serializer.serialize_map(None)?;
                for (key, value) in entries {
                    if seen.insert(key.as_str()) {
                        map.serialize_entry(key, value)?;
                    }
                }
                map.end()
            }
        }
    }
}

/// Export a document tree to pretty-printed JSON.
///
/// Scalars stay strings: no numeric or boolean interpretation happens here, just as in the
/// tree itself.
///
/// # Examples
/// ```
/// use embed_yaml::export::to_json;
///
/// let doc = embed_yaml::parse("name: John\ntags:\n- a\n").unwrap();
/// let json = to_json(&doc).unwrap();
/// assert!(json.contains("\"name\": \"John\""));
/// ```
pub fn to_json(node: &Node) -> Result<String, EmbedYamlError> {
    serde_json::to_string_pretty(node).map_err(|e| EmbedYamlError::EmissionError {
        message: format!("Failed to export JSON: {}", e),
        hint: None,
        code: Some(510),
    })
}

/// Read, parse and export a YAML file in one call.
///
/// # Errors
/// Returns an error if the file cannot be read or does not parse.
pub fn export_yaml_file<P: AsRef<Path>>(path: P) -> Result<String, EmbedYamlError> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|e| {
        EmbedYamlError::file_error(
            format!("Failed to read file: {}", e),
            path.to_string_lossy().to_string(),
            300,
        )
    })?;

    let doc = crate::parse(&input)?;
    to_json(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_export_nested_document_to_json() {
        let doc = crate::parse("person:\n  name: John Doe\n  age: 30\ntags:\n- a\n- b\n").unwrap();
        let json_output = to_json(&doc).expect("Failed to export document to JSON");

        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();
        assert_eq!(v["person"]["name"], "John Doe");
        assert_eq!(v["person"]["age"], "30");
        assert_eq!(v["tags"][1], "b");
    }

    #[test]
    fn test_export_preserves_key_order() {
        let doc = Node::Map(vec![
            ("zeta".into(), Node::from("1")),
            ("alpha".into(), Node::from("2")),
            ("mid".into(), Node::Null),
        ]);
        let json_output = to_json(&doc).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();

        let keys: Vec<&String> = v.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert!(v["mid"].is_null());
    }

    #[test]
    fn test_export_first_duplicate_wins() {
        let doc = Node::Map(vec![
            ("k".into(), Node::from("first")),
            ("k".into(), Node::from("second")),
        ]);
        let v: serde_json::Value = serde_json::from_str(&to_json(&doc).unwrap()).unwrap();
        assert_eq!(v["k"], "first");
        assert_eq!(v.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_export_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "server:\n  host: localhost\n  port: 8080\n").unwrap();

        let json_output = export_yaml_file(file.path()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();
        assert_eq!(v["server"]["port"], "8080");
    }

    #[test]
    fn test_export_missing_file() {
        let err = export_yaml_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, EmbedYamlError::FileError { code: Some(300), .. }));
    }
}
