//! Error types for record and address book operations.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on records and address books.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number targeted by an edit does not exist on the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;
