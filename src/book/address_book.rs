//! The address book: an insertion-ordered collection of records keyed by
//! contact name.

use serde::{Deserialize, Serialize};

use crate::book::pages::Pages;
use crate::models::Record;

/// Collection of contact records keyed by contact name.
///
/// Records keep the order in which they were first added; storing a record
/// under an existing name replaces the old record in place without moving it.
/// Serialized form is the plain sequence of records, so a round trip through
/// serde preserves both content and order.
///
/// # Examples
///
/// ```
/// use rolodex::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// let mut record = Record::new("Alice", None).unwrap();
/// record.add_phone("5551234567").unwrap();
/// book.add_record(record);
///
/// assert!(book.contains("Alice"));
/// assert_eq!(book.find("Alice").unwrap().phones().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Creates an empty address book.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }

    /// Stores a record under its contact name.
    ///
    /// If a record with the same name already exists it is replaced in place,
    /// keeping its position, and the previous record is returned. Otherwise
    /// the record is appended and `None` is returned.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name().as_str()) {
            Some(index) => {
                tracing::debug!("Replacing record for {}", record.name());
                Some(std::mem::replace(&mut self.records[index], record))
            }
            None => {
                tracing::debug!("Storing new record for {}", record.name());
                self.records.push(record);
                None
            }
        }
    }

    /// Looks up a record by contact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        let index = self.position(name)?;
        Some(&self.records[index])
    }

    /// Looks up a record by contact name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let index = self.position(name)?;
        Some(&mut self.records[index])
    }

    /// Removes the record stored under `name`, returning it if present.
    ///
    /// Deleting a name that is not in the book is a no-op and returns `None`.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let index = self.position(name)?;
        tracing::debug!("Deleting record for {}", name);
        Some(self.records.remove(index))
    }

    /// Returns true if a record is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over all records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Iterates over the records in pages of at most `page_size` entries.
    ///
    /// Each call returns a fresh iterator with its own cursor, so several
    /// paginations can run at the same time and each one starts from the
    /// first page.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    pub fn pages(&self, page_size: usize) -> Pages<'_> {
        Pages::new(&self.records, page_size)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for AddressBook {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Builds a book by replaying `add_record` for every entry, so duplicate
/// names collapse to the last record seen. Deserialization goes through this
/// impl and therefore upholds the same keying rules as the mutating API.
impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
