//! Data models for contact directory entities.
//!
//! This module contains the data structures representing a single contact
//! record: its validated fields and the operations that mutate them.

pub mod record;

pub use record::Record;
