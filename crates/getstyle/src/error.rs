//! Error types for style resolution.

use thiserror::Error;

/// Errors that can occur when resolving styles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// A requested style name has no entry in the style dictionary.
    #[error("style '{name}' does not exist in the style dictionary")]
    InvalidName { name: String },
}

impl StyleError {
    /// Creates a [`StyleError::InvalidName`] for the given style name.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        StyleError::InvalidName { name: name.into() }
    }

    /// Returns the style name that caused the error.
    pub fn name(&self) -> &str {
        match self {
            StyleError::InvalidName { name } => name,
        }
    }
}

/// Result type for style resolution.
pub type Result<T> = std::result::Result<T, StyleError>;
