//! Address book container for the contact directory.
//!
//! This module provides the insertion-ordered, name-keyed collection of
//! records and its fixed-size page iterator.

pub mod address_book;
pub mod pages;

pub use address_book::AddressBook;
pub use pages::Pages;
