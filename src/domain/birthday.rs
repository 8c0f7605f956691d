//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A type-safe wrapper for birthdays.
///
/// A birthday is a proper calendar date, never a free-form string. Holding a
/// `chrono::NaiveDate` makes the validity predicate structural: every value
/// that exists is a real date. The fallible paths are the untyped entry
/// points, year/month/day parts and `YYYY-MM-DD` text.
///
/// # Example
///
/// ```
/// use rolodex::domain::Birthday;
///
/// let birthday = Birthday::from_ymd(1990, 5, 17).unwrap();
/// assert_eq!(birthday.to_string(), "1990-05-17");
/// assert!(Birthday::from_ymd(2023, 2, 30).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a Birthday from an already-valid calendar date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Create a Birthday from year/month/day parts.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the parts do not name
    /// an existing calendar date (e.g. February 30th).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                ValidationError::InvalidBirthday(format!("{:04}-{:02}-{:02}", year, month, day))
            })
    }

    /// Parse a Birthday from `YYYY-MM-DD` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input is not a
    /// date in that format.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(input.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Replace the stored date.
    ///
    /// Infallible: the argument type already guarantees a valid date.
    pub fn set(&mut self, date: NaiveDate) {
        self.0 = date;
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Birthday::parse(s)
    }
}

// Serde support - serialize as YYYY-MM-DD string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0.format("%Y-%m-%d"))
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_birthday_from_date_always_succeeds() {
        let date = NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();
        let birthday = Birthday::new(date);
        assert_eq!(birthday.date(), date);
    }

    #[test]
    fn test_birthday_from_ymd_valid() {
        let birthday = Birthday::from_ymd(2000, 2, 29).unwrap();
        assert_eq!(birthday.date().year(), 2000);
        assert_eq!(birthday.date().month(), 2);
        assert_eq!(birthday.date().day(), 29);
    }

    #[test]
    fn test_birthday_from_ymd_rejects_impossible_dates() {
        assert!(Birthday::from_ymd(2023, 2, 30).is_err());
        assert!(Birthday::from_ymd(2023, 2, 29).is_err());
        assert!(Birthday::from_ymd(2023, 13, 1).is_err());
        assert!(Birthday::from_ymd(2023, 4, 31).is_err());
        assert!(Birthday::from_ymd(2023, 0, 1).is_err());
    }

    #[test]
    fn test_birthday_from_ymd_error_names_the_input() {
        let err = Birthday::from_ymd(2023, 2, 30).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidBirthday("2023-02-30".to_string())
        );
    }

    #[test]
    fn test_birthday_parse_valid() {
        let birthday = Birthday::parse("1990-05-17").unwrap();
        assert_eq!(birthday.to_string(), "1990-05-17");
    }

    #[test]
    fn test_birthday_parse_rejects_non_dates() {
        assert!(Birthday::parse("not-a-date").is_err());
        assert!(Birthday::parse("17.05.1990").is_err());
        assert!(Birthday::parse("1990-13-01").is_err());
        assert!(Birthday::parse("2023-02-30").is_err());
        assert!(Birthday::parse("").is_err());
    }

    #[test]
    fn test_birthday_from_str() {
        let birthday: Birthday = "2000-02-29".parse().unwrap();
        assert_eq!(birthday.date().day(), 29);
        assert!("2023-02-29".parse::<Birthday>().is_err());
    }

    #[test]
    fn test_birthday_set() {
        let mut birthday = Birthday::from_ymd(1990, 5, 17).unwrap();
        let moved = NaiveDate::from_ymd_opt(1991, 6, 18).unwrap();
        birthday.set(moved);
        assert_eq!(birthday.date(), moved);
    }

    #[test]
    fn test_birthday_display() {
        let birthday = Birthday::from_ymd(1985, 12, 3).unwrap();
        assert_eq!(format!("{}", birthday), "1985-12-03");
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::from_ymd(1990, 5, 17).unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"1990-05-17\"");
    }

    #[test]
    fn test_birthday_deserialization() {
        let birthday: Birthday = serde_json::from_str("\"1990-05-17\"").unwrap();
        assert_eq!(birthday, Birthday::from_ymd(1990, 5, 17).unwrap());
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"yesterday\"");
        assert!(result.is_err());

        let result: Result<Birthday, _> = serde_json::from_str("\"2023-02-30\"");
        assert!(result.is_err());
    }
}
