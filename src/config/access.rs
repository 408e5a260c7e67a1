use super::*;

impl YamlConfig {
    /// Get a typed value from the document using dot notation.
    ///
    /// Keys match exactly. Numeric segments index into sequences.
    ///
    /// # Examples
    /// ```no_run
    /// # use embed_yaml::YamlConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = YamlConfig::from_file("config.yaml")?;
    /// let host: String = config.get("server.host")?;
    /// let port: u16 = config.get("server.port")?;
    /// let first_tag: String = config.get("tags.0")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns [`EmbedYamlError::PathNotFound`] if the path doesn't exist, or a conversion
    /// error (with the source line attached) if the value can't be converted to `T`.
    pub fn get<T: FromNode>(&self, path: &str) -> Result<T, EmbedYamlError> {
        let node = self.get_node(path)?;
        T::from_node(node).map_err(|e| enhance_error_with_line_info(e, path, &self.raw_content))
    }

    /// Get an optional typed value - returns `None` if the path doesn't exist.
    ///
    /// # Examples
    /// ```no_run
    /// # use embed_yaml::YamlConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = YamlConfig::from_file("config.yaml")?;
    /// if let Some(api_key) = config.get_optional::<String>("api.key")? {
    ///     println!("API key: {}", api_key);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_optional<T: FromNode>(&self, path: &str) -> Result<Option<T>, EmbedYamlError> {
        match self.get_node(path) {
            Ok(node) => T::from_node(node)
                .map(Some)
                .map_err(|e| enhance_error_with_line_info(e, path, &self.raw_content)),
            Err(EmbedYamlError::PathNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    pub fn get_or<T: FromNode>(&self, path: &str, default: T) -> T {
        self.get(path).unwrap_or(default)
    }

    /// The node at `path`. An empty path is the root.
    pub fn get_node(&self, path: &str) -> Result<&Node, EmbedYamlError> {
        helpers::lookup(&self.root, &helpers::split_path(path)).ok_or_else(|| not_found(path))
    }

    /// Get all keys of the map at `path`, in document order.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, EmbedYamlError> {
        let node = self.get_node(path)?;
        match node {
            Node::Map(_) => Ok(node.keys().map(str::to_string).collect()),
            other => Err(EmbedYamlError::TypeError {
                message: format!("Path '{}' is a {:?} node, not a map", path, other.kind()),
                hint: Some("Only maps have keys".into()),
                code: Some(306),
            }),
        }
    }

    /// Check if a path exists.
    pub fn has(&self, path: &str) -> bool {
        self.get_node(path).is_ok()
    }
}

fn not_found(path: &str) -> EmbedYamlError {
    EmbedYamlError::PathNotFound {
        path: path.to_string(),
        hint: Some("Check that the path exists in your document".into()),
        code: Some(305),
    }
}

/// Enhance conversion errors with the line the offending key is defined on.
fn enhance_error_with_line_info(e: EmbedYamlError, path: &str, raw_content: &str) -> EmbedYamlError {
    let (line, snippet) = helpers::find_config_line(path, raw_content);
    if line == 0 {
        return e;
    }

    match e {
        EmbedYamlError::TypeError { message, hint, code } => EmbedYamlError::TypeError {
            message: format!("{} (line {})\n  → {}", message, line, snippet),
            hint,
            code,
        },
        EmbedYamlError::ScalarConversionError { value, target, hint, code } => {
            EmbedYamlError::ScalarConversionError {
                value,
                target,
                hint: Some(match hint {
                    Some(h) => format!("{} (line {}: {})", h, line, snippet),
                    None => format!("Check the value on line {}: {}", line, snippet),
                }),
                code,
            }
        }
        other => other,
    }
}
