//! Ordered list of validated books.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::book::{Book, BookDraft};
use crate::error::IndexOutOfRangeError;
use crate::reporter::{Reporter, TracingReporter};

/// An insertion-ordered list of [`Book`]s.
///
/// Every book in the list has passed field validation on the way in. Invalid
/// insertions are reported through the list's [`Reporter`] and dropped; they
/// never reach the caller as errors. Out-of-range reads are reported too, but
/// the error is still returned.
///
/// Duplicates are allowed. Cloning the list copies every book; the clone
/// shares only the reporter.
///
/// # Example
///
/// ```
/// use bookshelf_core::{Book, BookDraft, BookList, MemoryReporter};
///
/// let reporter = MemoryReporter::new();
/// let mut list = BookList::with_reporter(reporter.clone());
///
/// list.add_book(Book::new("Book1", "Author1").unwrap());
/// list.add_book(BookDraft::default().author("Author1"));
///
/// assert_eq!(list.len(), 1);
/// assert_eq!(reporter.lines(), vec!["Error adding book: Title cannot be empty or null."]);
/// ```
#[derive(Clone)]
pub struct BookList {
    books: Vec<Book>,
    reporter: Arc<dyn Reporter>,
}

impl BookList {
    /// Create an empty list that reports through `tracing`.
    pub fn new() -> Self {
        Self::with_reporter(TracingReporter)
    }

    /// Create an empty list that reports to `reporter`.
    pub fn with_reporter(reporter: impl Reporter + 'static) -> Self {
        Self {
            books: Vec::new(),
            reporter: Arc::new(reporter),
        }
    }

    /// Validate `book` and append it.
    ///
    /// The fields are run through the same guard as [`Book::set_title`] and
    /// [`Book::set_author`] before the book is stored. On failure the line
    /// `Error adding book: <message>` is reported and the list is left as it
    /// was.
    ///
    /// Returns `true` if the book was appended.
    pub fn add_book(&mut self, book: impl Into<BookDraft>) -> bool {
        match Book::try_from(book.into()) {
            Ok(book) => {
                debug!(%book, position = self.books.len(), "book added");
                self.books.push(book);
                true
            }
            Err(e) => {
                self.reporter.report(&format!("Error adding book: {}", e));
                false
            }
        }
    }

    /// Remove the first book equal to `book`.
    ///
    /// Returns `true` if a book was removed.
    pub fn remove_book(&mut self, book: &Book) -> bool {
        match self.books.iter().position(|b| b == book) {
            Some(index) => {
                self.books.remove(index);
                debug!(%book, index, "book removed");
                true
            }
            None => false,
        }
    }

    /// Returns `true` if some book in the list equals `book`.
    pub fn contains_book(&self, book: &Book) -> bool {
        self.books.contains(book)
    }

    /// Returns the book at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRangeError`] if `index >= len()`, after reporting
    /// `Error accessing book at index <index>: <message>`.
    pub fn get(&self, index: usize) -> Result<&Book, IndexOutOfRangeError> {
        self.books.get(index).ok_or_else(|| {
            let err = IndexOutOfRangeError {
                index,
                len: self.books.len(),
            };
            self.reporter
                .report(&format!("Error accessing book at index {}: {}", index, err));
            err
        })
    }

    /// Returns the number of books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns `true` if the list holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Iterate over the books in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }
}

impl Default for BookList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BookList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookList")
            .field("books", &self.books)
            .finish_non_exhaustive()
    }
}

impl PartialEq for BookList {
    fn eq(&self, other: &Self) -> bool {
        self.books == other.books
    }
}

impl Eq for BookList {}

impl<'a> IntoIterator for &'a BookList {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

impl IntoIterator for BookList {
    type Item = Book;
    type IntoIter = std::vec::IntoIter<Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.into_iter()
    }
}

impl<B: Into<BookDraft>> Extend<B> for BookList {
    fn extend<I: IntoIterator<Item = B>>(&mut self, iter: I) {
        for book in iter {
            self.add_book(book);
        }
    }
}

impl<B: Into<BookDraft>> FromIterator<B> for BookList {
    fn from_iter<I: IntoIterator<Item = B>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
