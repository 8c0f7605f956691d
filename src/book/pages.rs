//! Fixed-size page iteration over the records of an address book.

use crate::models::Record;

/// Iterator over an address book's records in fixed-size pages.
///
/// Each page is a slice of at most `page_size` records in insertion order;
/// the final page may be shorter. Every call to [`AddressBook::pages`] hands
/// out a fresh `Pages` with its own cursor, so iterations never interfere
/// with one another and pagination can always be restarted from the top.
///
/// [`AddressBook::pages`]: crate::book::AddressBook::pages
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    chunks: std::slice::Chunks<'a, Record>,
}

impl<'a> Pages<'a> {
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    pub(crate) fn new(records: &'a [Record], page_size: usize) -> Self {
        Self {
            chunks: records.chunks(page_size),
        }
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = &'a [Record];

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}
