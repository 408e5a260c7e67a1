// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashMap;
use std::hash::BuildHasher;
use std::str::FromStr;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::Node;
use crate::EmbedYamlError;

// `str::parse` accepts a leading '+', which plain integer literals do not.
static INTEGER_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+$").expect("integer literal pattern is valid"));

static FLOAT_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^-?(?:(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:e[+-]?[0-9]+)?|inf|infinity|nan)$")
        .expect("float literal pattern is valid")
});

/// Conversion from a document node into a Rust value.
pub trait FromNode: Sized {
    fn from_node(node: &Node) -> Result<Self, EmbedYamlError>;
}

impl Node {
    /// Convert this node into `T`.
    ///
    /// Scalar targets require a `Scalar` node (otherwise [`EmbedYamlError::TypeError`]) whose
    /// whole text is a valid literal (otherwise [`EmbedYamlError::ScalarConversionError`]).
    /// Nothing is truncated or defaulted.
    ///
    /// ```
    /// use embed_yaml::Node;
    ///
    /// assert_eq!(Node::from("42").parse::<i32>().unwrap(), 42);
    /// assert!(Node::from("42abc").parse::<i32>().is_err());
    /// ```
    pub fn parse<T: FromNode>(&self) -> Result<T, EmbedYamlError> {
        T::from_node(self)
    }

    /// Like [`Node::parse`], falling back to `default` on any error.
    pub fn parse_or<T: FromNode>(&self, default: T) -> T {
        self.parse().unwrap_or(default)
    }
}

fn scalar_text<'a>(node: &'a Node, target: &str) -> Result<&'a str, EmbedYamlError> {
    match node {
        Node::Scalar(text) => Ok(text),
        other => Err(EmbedYamlError::TypeError {
            message: format!("Expected scalar for {}, got {:?} node", target, other.kind()),
            hint: Some("Only scalar nodes convert to plain values".into()),
            code: Some(401),
        }),
    }
}

fn conversion_error(text: &str, target: &'static str, code: u32) -> EmbedYamlError {
    EmbedYamlError::ScalarConversionError {
        value: text.to_string(),
        target,
        hint: None,
        code: Some(code),
    }
}

fn parse_literal<T: FromStr>(
    text: &str,
    pattern: &Regex,
    target: &'static str,
    code: u32,
) -> Result<T, EmbedYamlError> {
    if !pattern.is_match(text) {
        return Err(conversion_error(text, target, code));
    }
    text.parse::<T>().map_err(|_| conversion_error(text, target, code))
}

macro_rules! integer_from_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromNode for $ty {
                fn from_node(node: &Node) -> Result<Self, EmbedYamlError> {
                    let text = scalar_text(node, stringify!($ty))?;
                    parse_literal(text, &INTEGER_LITERAL, stringify!($ty), 402)
                }
            }
        )*
    };
}

integer_from_node!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_from_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromNode for $ty {
                fn from_node(node: &Node) -> Result<Self, EmbedYamlError> {
                    let text = scalar_text(node, stringify!($ty))?;
                    parse_literal(text, &FLOAT_LITERAL, stringify!($ty), 403)
                }
            }
        )*
    };
}

float_from_node!(f32, f64);

impl FromNode for String {
    fn from_node(node: &Node) -> Result<Self, EmbedYamlError> {
        scalar_text(node, "String").map(str::to_string)
    }
}

impl FromNode for bool {
    fn from_node(node: &Node) -> Result<Self, EmbedYamlError> {
        match scalar_text(node, "bool")? {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(EmbedYamlError::ScalarConversionError {
                value: other.to_string(),
                target: "bool",
                hint: Some("Use true or false".into()),
                code: Some(404),
            }),
        }
    }
}

impl FromNode for char {
    fn from_node(node: &Node) -> Result<Self, EmbedYamlError> {
        let text = scalar_text(node, "char")?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(conversion_error(text, "char", 406)),
        }
    }
}

impl FromNode for Node {
    fn from_node(node: &Node) -> Result<Self, EmbedYamlError> {
        Ok(node.clone())
    }
}

impl<T: FromNode> FromNode for Option<T> {
    fn from_node(node: &Node) -> Result<Self, EmbedYamlError> {
        match node {
            Node::Null => Ok(None),
            other => Ok(Some(T::from_node(other)?)),
        }
    }
}

impl<T: FromNode> FromNode for Vec<T> {
    fn from_node(node: &Node) -> Result<Self, EmbedYamlError> {
        match node {
            Node::Sequence(items) => items.iter().map(T::from_node).collect(),
            other => Err(EmbedYamlError::TypeError {
                message: format!("Expected sequence, got {:?} node", other.kind()),
                hint: Some("Use a block sequence (- item) in your document".into()),
                code: Some(405),
            }),
        }
    }
}

fn map_entries<'a>(node: &'a Node) -> Result<&'a [(String, Node)], EmbedYamlError> {
    match node {
        Node::Map(entries) => Ok(entries),
        other => Err(EmbedYamlError::TypeError {
            message: format!("Expected map, got {:?} node", other.kind()),
            hint: Some("Use a block mapping (key: value) in your document".into()),
            code: Some(410),
        }),
    }
}

/// Duplicate keys keep their first value, matching [`Node::get`].
impl<T: FromNode> FromNode for IndexMap<String, T> {
    fn from_node(node: &Node) -> Result<Self, EmbedYamlError> {
        let mut map = IndexMap::new();
        for (key, value) in map_entries(node)? {
            if !map.contains_key(key) {
                map.insert(key.clone(), T::from_node(value)?);
            }
        }
        Ok(map)
    }
}

impl<T: FromNode, S: BuildHasher + Default> FromNode for HashMap<String, T, S> {
    fn from_node(node: &Node) -> Result<Self, EmbedYamlError> {
        let mut map = HashMap::default();
        for (key, value) in map_entries(node)? {
            if !map.contains_key(key) {
                map.insert(key.clone(), T::from_node(value)?);
            }
        }
        Ok(map)
    }
}
