//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A type-safe wrapper for phone numbers.
///
/// A phone number is exactly 10 decimal digits, no formatting characters.
/// Validation happens at construction time and again on every assignment,
/// so a stored number is always well-formed.
///
/// # Example
///
/// ```
/// use rolodex::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("5551234567").unwrap();
/// assert_eq!(phone.as_str(), "5551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must be exactly 10 characters long
    /// - Every character must be an ASCII decimal digit
    ///
    /// Formatting characters are rejected, never stripped.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number is invalid.
    pub fn new(number: impl Into<String>) -> Result<Self, ValidationError> {
        let number = number.into();

        if !Self::is_valid(&number) {
            return Err(ValidationError::InvalidPhone(number));
        }

        Ok(Self(number))
    }

    /// Validate phone format.
    fn is_valid(number: &str) -> bool {
        number.len() == 10 && number.chars().all(|c| c.is_ascii_digit())
    }

    /// Replace the stored number, validating the new value first.
    ///
    /// A failed assignment leaves the previous number in place.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the new number is invalid.
    pub fn set(&mut self, number: impl Into<String>) -> Result<(), ValidationError> {
        let number = number.into();

        if !Self::is_valid(&number) {
            return Err(ValidationError::InvalidPhone(number));
        }

        self.0 = number;
        Ok(())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhoneNumber::new(s)
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
