//! Error types for the Synspace library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SynspaceError`] enum.
//!
//! # Examples
//!
//! ```
//! use synspace::error::{Result, SynspaceError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SynspaceError::type_kind("expected an array of strings"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for Synspace operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides constructor methods for the string-carrying variants.
#[derive(Error, Debug)]
pub enum SynspaceError {
    /// An argument is not of an accepted shape (wrong container kind,
    /// non-string element, wrong operand kind).
    #[error("Type error: {0}")]
    TypeKind(String),

    /// A term belongs to more than one synonym group.
    #[error("Rank violation: term '{term}' appears in group {first} and group {second}")]
    RankViolation {
        term: String,
        first: usize,
        second: usize,
    },

    /// Storage-related errors (reading dictionary files)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Parse errors (malformed dictionary content)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SynspaceError.
pub type Result<T> = std::result::Result<T, SynspaceError>;

impl SynspaceError {
    /// Create a new type error.
    pub fn type_kind<S: Into<String>>(msg: S) -> Self {
        SynspaceError::TypeKind(msg.into())
    }

    /// Create a new rank violation for `term` shared by groups `first` and `second`.
    pub fn rank_violation<S: Into<String>>(term: S, first: usize, second: usize) -> Self {
        SynspaceError::RankViolation {
            term: term.into(),
            first,
            second,
        }
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        SynspaceError::Storage(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        SynspaceError::Parse(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SynspaceError::InvalidConfig(msg.into())
    }

    /// Whether this error is a [`SynspaceError::TypeKind`].
    pub fn is_type_kind(&self) -> bool {
        matches!(self, SynspaceError::TypeKind(_))
    }

    /// Whether this error is a [`SynspaceError::RankViolation`].
    pub fn is_rank_violation(&self) -> bool {
        matches!(self, SynspaceError::RankViolation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SynspaceError::type_kind("expected string, found number");
        assert_eq!(error.to_string(), "Type error: expected string, found number");
        assert!(error.is_type_kind());

        let error = SynspaceError::rank_violation("b", 0, 1);
        assert_eq!(
            error.to_string(),
            "Rank violation: term 'b' appears in group 0 and group 1"
        );
        assert!(error.is_rank_violation());

        let error = SynspaceError::storage("Failed to read 'a.json'");
        assert_eq!(error.to_string(), "Storage error: Failed to read 'a.json'");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let error = SynspaceError::from(json_error);
        assert!(matches!(error, SynspaceError::Json(_)));
        assert!(!error.is_type_kind());
    }
}
