//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations in pure parsing and path handling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("cannot expand path '{path}': {reason}")]
    PathExpansion { path: String, reason: String },

    #[error("invalid property key: '{0}'")]
    InvalidKey(String),

    #[error("invalid value for property '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}
