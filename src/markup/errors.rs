//! Error types for markup parsing and serialization

use thiserror::Error;

/// Failures of the markup parsing/serialization facility
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// Markup is not well-formed XML
    #[error("Invalid markup: {0}")]
    InvalidXml(String),

    /// Markup has no root element to edit
    #[error("Markup has no root element")]
    MissingRoot,

    /// Tokenizer rejected input that passed the well-formedness check
    #[error("Tokenizer error at byte {position}: {message}")]
    Tokenize { position: usize, message: String },

    /// An attribute could not be decoded
    #[error("Malformed attribute: {0}")]
    Attribute(String),

    /// Writing the tree back to text failed
    #[error("Serialization failed: {0}")]
    Write(String),
}

pub type Result<T> = std::result::Result<T, MarkupError>;
