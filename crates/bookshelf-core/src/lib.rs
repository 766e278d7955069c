//! bookshelf-core - Validated book records and an ordered book list.
//!
//! A [`Book`] always has a non-blank title and author. A [`BookList`] keeps
//! books in insertion order, rejecting invalid ones at the door, and reports
//! problems through an injected [`Reporter`] instead of printing.
//!
//! # Example
//!
//! ```
//! use bookshelf_core::{Book, BookList};
//!
//! let mut list = BookList::new();
//! list.add_book(Book::new("Book1", "Author1")?);
//! list.add_book(Book::new("Book2", "Author2")?);
//!
//! for book in &list {
//!     println!("{book}");
//! }
//!
//! assert!(list.get(10).is_err());
//! # Ok::<(), bookshelf_core::Error>(())
//! ```

pub mod book;
pub mod book_list;
pub mod error;
pub mod reporter;

pub use book::{Book, BookDraft};
pub use book_list::BookList;
pub use error::{BookField, Error, IndexOutOfRangeError, InvalidFieldError};
pub use reporter::{MemoryReporter, Reporter, TracingReporter};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
