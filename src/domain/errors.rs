//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field value validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly 10 decimal digits.
    InvalidPhone(String),

    /// The provided birthday is not a valid calendar date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Phone number must be 10 digits: {}", phone)
            }
            Self::InvalidBirthday(input) => {
                write!(f, "Birthday must be a date: {}", input)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
