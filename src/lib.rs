//! Rolodex - an in-memory contact directory.
//!
//! This library keeps contact records (a name, any number of phone numbers,
//! an optional birthday) in an insertion-ordered address book. Every field is
//! validated at assignment time, so a record that exists is a record whose
//! fields are well formed.
//!
//! # Architecture
//!
//! - **domain**: validated field types for names, phone numbers and birthdays
//! - **error**: custom error types for precise error handling
//! - **models**: the contact record and its phone and birthday operations
//! - **book**: the address book container and its page iterator
//!
//! # Example
//!
//! ```
//! use rolodex::{AddressBook, Record};
//!
//! let mut book = AddressBook::new();
//!
//! let mut alice = Record::new("Alice", None).unwrap();
//! alice.add_phone("5551234567").unwrap();
//! book.add_record(alice);
//!
//! for page in book.pages(10) {
//!     for record in page {
//!         println!("{}", record);
//!     }
//! }
//! ```

// Re-export commonly used types
pub mod book;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, Pages};
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult};
pub use models::Record;
