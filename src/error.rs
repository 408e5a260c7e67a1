// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

/// Broad category of an [`EmbedYamlError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Parse,
    Emission,
    Type,
    ScalarConversion,
    File,
    NotFound,
    Validation,
}

impl ErrorKind {
    /// Human readable name used when displaying an error.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Parse => "Parse Error",
            ErrorKind::Emission => "Emission Error",
            ErrorKind::Type => "Type Error",
            ErrorKind::ScalarConversion => "Scalar Conversion Error",
            ErrorKind::File => "File Error",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Validation => "Validation Error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The main error type for building, emitting and reading documents.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbedYamlError {
    /// Malformed input text or an unexpected event sequence.
    ParseError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// The tree cannot be rendered as block-style text.
    EmissionError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A node of the wrong kind was asked for a conversion.
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Scalar text is not a complete literal of the requested type.
    ScalarConversionError {
        value: String,
        target: &'static str,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    PathNotFound {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    ValidationError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl EmbedYamlError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EmbedYamlError::ParseError { .. } => ErrorKind::Parse,
            EmbedYamlError::EmissionError { .. } => ErrorKind::Emission,
            EmbedYamlError::TypeError { .. } => ErrorKind::Type,
            EmbedYamlError::ScalarConversionError { .. } => ErrorKind::ScalarConversion,
            EmbedYamlError::FileError { .. } => ErrorKind::File,
            EmbedYamlError::PathNotFound { .. } => ErrorKind::NotFound,
            EmbedYamlError::ValidationError { .. } => ErrorKind::Validation,
        }
    }

    pub fn code(&self) -> Option<u32> {
        match self {
            EmbedYamlError::ParseError { code, .. }
            | EmbedYamlError::EmissionError { code, .. }
            | EmbedYamlError::TypeError { code, .. }
            | EmbedYamlError::ScalarConversionError { code, .. }
            | EmbedYamlError::FileError { code, .. }
            | EmbedYamlError::PathNotFound { code, .. }
            | EmbedYamlError::ValidationError { code, .. } => *code,
        }
    }

    /// Helper for file-related errors when loading or saving documents.
    pub(crate) fn file_error(message: String, path: String, code: u32) -> Self {
        EmbedYamlError::FileError {
            message,
            path,
            hint: Some("Check file path and permissions".into()),
            code: Some(code),
        }
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for EmbedYamlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind();
        match self {
            EmbedYamlError::ParseError { message, line, column, hint, code }
            | EmbedYamlError::ValidationError { message, line, column, hint, code } => {
                if *line > 0 {
                    write!(f, "[embed-yaml] {} at {}:{}: {}{}", kind, line, column, message, suffix(hint, code))
                } else {
                    write!(f, "[embed-yaml] {}: {}{}", kind, message, suffix(hint, code))
                }
            }
            EmbedYamlError::EmissionError { message, hint, code }
            | EmbedYamlError::TypeError { message, hint, code } => {
                write!(f, "[embed-yaml] {}: {}{}", kind, message, suffix(hint, code))
            }
            EmbedYamlError::ScalarConversionError { value, target, hint, code } => write!(
                f,
                "[embed-yaml] {}: '{}' is not a valid {}{}",
                kind,
                value,
                target,
                suffix(hint, code)
            ),
            EmbedYamlError::FileError { message, path, hint, code } => {
                write!(f, "[embed-yaml] {} '{}': {}{}", kind, path, message, suffix(hint, code))
            }
            EmbedYamlError::PathNotFound { path, hint, code } => write!(
                f,
                "[embed-yaml] {}: path '{}' does not exist{}",
                kind,
                path,
                suffix(hint, code)
            ),
        }
    }
}

impl std::error::Error for EmbedYamlError {}
