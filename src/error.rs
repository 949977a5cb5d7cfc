//! Scan Errors
//!
//! Every failure aborts the traversal in progress. Visitor side effects that
//! already happened are not rolled back.

use std::collections::TryReserveError;
use thiserror::Error;

/// Broad classification of a [`ScanError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The document does not have the shape the scanner expects
    MalformedInput,
    /// The scope stack could not grow
    ResourceExhausted,
}

/// Error raised while scanning a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("expected '<' at or after byte {position}")]
    MissingTagStart { position: usize },

    #[error("tag opened at byte {position} has no closing '>'")]
    MissingTagEnd { position: usize },

    #[error("tag at byte {position} has no element name")]
    EmptyDeclaration { position: usize },

    #[error("closing tag at byte {position} where an element was expected")]
    UnexpectedClosingTag { position: usize },

    #[error("element name is {len} bytes, closing tags can be matched for at most {max}")]
    NameTooLong { len: usize, max: usize },

    #[error("closing tag for `{name}` is longer than the {remaining} bytes left in the document")]
    ClosingTagOutOfRange { name: String, remaining: usize },

    #[error("closing tag `</{name}>` not found")]
    ClosingTagNotFound { name: String },

    #[error("element `{name}` declares more than {max} attributes")]
    TooManyAttributes { name: String, max: usize },

    #[error("nesting depth exceeds the configured maximum of {max}")]
    DepthExceeded { max: usize },

    #[error("scope stack allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

impl ScanError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScanError::DepthExceeded { .. } | ScanError::Allocation(_) => ErrorKind::ResourceExhausted,
            _ => ErrorKind::MalformedInput,
        }
    }

    /// True for every error caused by the document itself
    #[inline]
    pub fn is_malformed_input(&self) -> bool {
        self.kind() == ErrorKind::MalformedInput
    }

    pub(crate) fn closing_tag_not_found(name: &[u8]) -> Self {
        ScanError::ClosingTagNotFound {
            name: String::from_utf8_lossy(name).into_owned(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ScanError>;
