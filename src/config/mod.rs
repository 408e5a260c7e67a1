// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::node::{FromNode, Node};
use crate::{emitter::Emitter, parser, EmbedYamlError};

mod access;
mod helpers;
mod validation;

/// A parsed YAML document plus the text it came from, with dotted-path typed access.
#[derive(Debug, Clone)]
pub struct YamlConfig {
    root: Node,
    raw_content: String, // Kept for error reporting until the tree is mutated
    source: Option<PathBuf>,
}

impl YamlConfig {
    /// Load a YAML file. A leading `~/` is expanded to the home directory.
    ///
    /// # Example
    /// ```ignore
    /// let config = YamlConfig::from_file("config.yaml")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EmbedYamlError> {
        let raw_path = path.as_ref().to_string_lossy().to_string();
        let resolved = helpers::resolve_path(&raw_path, Path::new("."));

        let content = fs::read_to_string(&resolved).map_err(|e| {
            EmbedYamlError::file_error(
                format!("Failed to read file: {}", e),
                resolved.to_string_lossy().to_string(),
                301,
            )
        })?;

        let mut config = Self::from_str(&content)?;
        config.source = Some(resolved);
        Ok(config)
    }

    /// Load a YAML file with fallback support
    ///
    /// Tries to load from the primary path first. If that fails with a file error, attempts
    /// to load from the fallback path. Parse errors in the primary file are returned as is.
    pub fn from_file_with_fallback<P: AsRef<Path>>(primary: P, fallback: P) -> Result<Self, EmbedYamlError> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(EmbedYamlError::FileError { .. }) => Self::from_file(&fallback).map_err(|e| match e {
                EmbedYamlError::FileError { message, .. } => EmbedYamlError::FileError {
                    message: format!(
                        "Failed to load config from primary path '{}' or fallback path '{}': {}",
                        primary.as_ref().display(),
                        fallback.as_ref().display(),
                        message
                    ),
                    path: format!(
                        "{} (fallback: {})",
                        primary.as_ref().display(),
                        fallback.as_ref().display()
                    ),
                    hint: Some("Check that at least one of the config files exists".into()),
                    code: Some(302),
                },
                other => other,
            }),
            Err(other) => Err(other),
        }
    }

    /// Parse a YAML document from a string (no file I/O).
    pub fn from_str(content: &str) -> Result<Self, EmbedYamlError> {
        let root = parser::Parser::from_text(content).parse_document()?;
        Ok(Self {
            root,
            raw_content: content.to_string(),
            source: None,
        })
    }

    /// Read the whole of `reader` and parse it.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, EmbedYamlError> {
        let mut content = String::new();
        reader.read_to_string(&mut content).map_err(|e| {
            EmbedYamlError::file_error(format!("Failed to read input: {}", e), "<reader>".into(), 303)
        })?;
        Self::from_str(&content)
    }

    /// Wrap a tree built in code. There is no source text to report lines from.
    pub fn from_node(root: Node) -> Self {
        Self {
            root,
            raw_content: String::new(),
            source: None,
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Mutable access to the tree.
    ///
    /// The source text no longer describes the tree once it can change, so later errors carry
    /// no line info.
    pub fn root_mut(&mut self) -> &mut Node {
        self.raw_content.clear();
        &mut self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// Path the config was loaded from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Convert the whole document into `T`.
    pub fn root_as<T: FromNode>(&self) -> Result<T, EmbedYamlError> {
        T::from_node(&self.root)
    }

    /// Emit the current tree, including any changes made through [`YamlConfig::root_mut`].
    pub fn to_yaml_string(&self) -> Result<String, EmbedYamlError> {
        Emitter::default().emit(&self.root)
    }

    /// Emit the current tree and write it to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), EmbedYamlError> {
        let text = self.to_yaml_string()?;
        fs::write(path.as_ref(), text).map_err(|e| {
            EmbedYamlError::file_error(
                format!("Failed to write file: {}", e),
                path.as_ref().to_string_lossy().to_string(),
                304,
            )
        })
    }
}

#[cfg(test)]
mod tests;
