//! Error types for building markup.

use std::path::PathBuf;

/// Error raised while building or loading markup.
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    /// Embedded value has no text form.
    #[error("Expected a renderable value, got {kind}")]
    InvalidRenderable {
        /// Type name of the offending value (e.g. `"null"`).
        kind: &'static str,
    },
    /// A setter received a value of the wrong type or shape.
    #[error("Invalid argument `{argument}`: expected {expected}, got {found}")]
    InvalidArgumentType {
        /// Name of the argument (e.g. `"tag_name"`, `"attributes.href"`).
        argument: String,
        /// Expected type description.
        expected: &'static str,
        /// Found type description.
        found: &'static str,
    },
    /// Block name is empty, absolute, or escapes the blocks directory.
    #[error("Invalid block name: {0:?}")]
    InvalidBlockName(String),
    /// Block file does not exist.
    #[error("Block `{name}` not found at {}", path.display())]
    BlockNotFound {
        /// Requested block name.
        name: String,
        /// Path that was looked up.
        path: PathBuf,
    },
    /// I/O error while reading a block.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HtmlError {
    pub(crate) fn invalid_argument(
        argument: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::InvalidArgumentType {
            argument: argument.into(),
            expected,
            found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_renderable_message_names_type() {
        let err = HtmlError::InvalidRenderable { kind: "null" };
        assert_eq!(err.to_string(), "Expected a renderable value, got null");
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = HtmlError::invalid_argument("attributes.id", "a string", "number");
        assert_eq!(
            err.to_string(),
            "Invalid argument `attributes.id`: expected a string, got number"
        );
    }
}
