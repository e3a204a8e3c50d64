//! Error types for attribute and scene parsing.

use thiserror::Error;

/// Error type for attribute and scene parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },

    /// Two children share an id
    #[error("Duplicate child id: {0}")]
    DuplicateId(String),
}

impl ParseError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::MissingField("children[0].content".to_string());
        assert_eq!(err.to_string(), "Missing required field: children[0].content");

        let err = ParseError::invalid("layout_width", "must not be negative");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'layout_width': must not be negative"
        );

        let err = ParseError::DuplicateId("a".to_string());
        assert_eq!(err.to_string(), "Duplicate child id: a");
    }

    #[test]
    fn test_parse_error_from_yaml() {
        let yaml_err = serde_yaml_ng::from_str::<u32>("[not, a, number]").unwrap_err();
        let err: ParseError = yaml_err.into();
        assert!(matches!(err, ParseError::Yaml(_)));
        assert!(err.to_string().starts_with("YAML error"));
    }

    #[test]
    fn test_parse_error_source() {
        use std::error::Error as _;

        let yaml_err = serde_yaml_ng::from_str::<u32>("{").unwrap_err();
        assert!(ParseError::from(yaml_err).source().is_some());
        assert!(ParseError::MissingField("x".into()).source().is_none());
    }
}
