//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Lookups by exact value that matched nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    /// No phone entry on the record equals the given value
    #[error("Phone number not found: {0}")]
    Phone(String),

    /// No record is stored under the given name
    #[error("Record not found: {0}")]
    Record(String),
}

/// Errors returned by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A name or phone number failed its format check
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The entity to remove or delete does not exist
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
