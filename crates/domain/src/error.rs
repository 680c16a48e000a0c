//! Domain error types.
//!
//! Business-rule violations are not errors: they travel as notifications in a
//! [`CommandResult`](crate::CommandResult). The variants here are faults
//! raised by collaborators or by invalid configuration.

use thiserror::Error;

/// Faults that abort a command.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The student repository failed.
    #[error("Repository error: {0}")]
    Repository(String),

    /// The repository refused a commit because the document or email is
    /// already registered.
    #[error("Student already registered: {field} {value}")]
    DuplicateStudent { field: &'static str, value: String },

    /// The welcome email could not be delivered.
    #[error("Email delivery error: {0}")]
    EmailDelivery(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while loading validation settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable could not be parsed.
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    /// The name length bounds admit no name at all.
    #[error("Invalid name length bounds: min {min}, max {max}")]
    InvalidNameBounds { min: usize, max: usize },
}
