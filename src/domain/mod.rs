//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the field kinds of a contact
//! record: names, phone numbers, and birthdays. Each value object validates
//! at construction time and on every assignment, so invalid data is never
//! representable in the system. Adding a new field kind means adding a new
//! wrapper with its own validation function.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
