//! Contact record model: one person's name, phones, and birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the directory.
///
/// A record owns exactly one name, an ordered list of phone numbers, and at
/// most one birthday. Phones keep their insertion order and may repeat; the
/// record never deduplicates them. Records are only ever dropped by removing
/// them from their address book.
///
/// Phone mutations follow one policy per operation class: `edit_phone`
/// demands its target and fails if the old number is absent, while
/// `remove_phone` is a best-effort no-op on a missing number.
///
/// # Example
///
/// ```
/// use rolodex::Record;
///
/// let mut record = Record::new("Alice", None).unwrap();
/// record.add_phone("5551234567").unwrap();
/// record.edit_phone("5551234567", "5559876543").unwrap();
/// assert!(record.find_phone("5559876543").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Contact name; doubles as the record's key inside an address book
    name: ContactName,

    /// Phone numbers in insertion order (duplicates permitted)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    /// Birthday, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with the given name and optional birthday.
    ///
    /// Phones start empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` (as a `BookError`) if the name
    /// is empty.
    pub fn new(name: impl Into<String>, birthday: Option<NaiveDate>) -> BookResult<Self> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: birthday.map(Birthday::new),
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The contact's phone numbers, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if one is set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `number` and append it to the phone list.
    ///
    /// No duplicate check: the same number may be added more than once.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` (as a `BookError`) if the
    /// number is not exactly 10 digits.
    pub fn add_phone(&mut self, number: impl Into<String>) -> BookResult<()> {
        let phone = PhoneNumber::new(number)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `number`.
    ///
    /// Returns whether a phone was removed; a missing number is a silent
    /// no-op, so removal is idempotent.
    pub fn remove_phone(&mut self, number: &str) -> bool {
        match self.position(number) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// The replacement happens in place, keeping the phone's position in the
    /// list. A failed validation of `new` leaves the list untouched.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no phone equals `old`, and
    /// `ValidationError::InvalidPhone` (as a `BookError`) if `new` is not a
    /// valid number.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> BookResult<()> {
        let index = self
            .position(old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;
        self.phones[index].set(new)?;
        Ok(())
    }

    /// Find the first phone equal to `number`.
    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == number)
    }

    /// Index of the first phone equal to `number`.
    fn position(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.as_str() == number)
    }

    /// Attach a birthday, or clear it with `None`.
    pub fn set_birthday(&mut self, birthday: Option<NaiveDate>) {
        self.birthday = birthday.map(Birthday::new);
    }

    /// Days until the next occurrence of the contact's birthday.
    ///
    /// Returns `None` when no birthday is set. The count is measured from
    /// the local calendar date, so a birthday falling today yields 0.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days until the next birthday occurrence at or after `today`.
    ///
    /// Deterministic variant of [`days_to_birthday`](Self::days_to_birthday):
    /// the next occurrence is the birthday's month/day in `today`'s year, or
    /// in the following year when that date has already passed. The result
    /// is never negative. A Feb 29 birthday is observed on Mar 1 in years
    /// without a leap day.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday?.date();
        let (month, day) = (birthday.month(), birthday.day());
        let candidate = anniversary_in(today.year(), month, day)?;
        let next = if candidate < today {
            anniversary_in(today.year() + 1, month, day)?
        } else {
            candidate
        };
        Some((next - today).num_days())
    }
}

/// The date the (month, day) anniversary falls on in `year`.
///
/// The only month/day pair absent from some years is Feb 29; those
/// anniversaries land on Mar 1.
fn anniversary_in(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

// Display support - one human-readable line
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}
