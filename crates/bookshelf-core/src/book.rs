//! Book record type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{BookField, InvalidFieldError};

/// Separator between title and author in the display form.
const BY: &str = " by ";

/// A validated book record.
///
/// Both the title and the author are non-blank for the whole lifetime of a
/// `Book`: construction validates them, and the setters refuse blank values
/// without touching the current one.
///
/// Two books are equal when their titles and authors are equal.
///
/// # Example
///
/// ```
/// use bookshelf_core::Book;
///
/// let mut book = Book::new("Dune", "Frank Herbert").unwrap();
/// assert_eq!(book.to_string(), "Dune by Frank Herbert");
///
/// assert!(book.set_title("   ").is_err());
/// assert_eq!(book.title(), "Dune");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BookDraft", into = "BookDraft")]
pub struct Book {
    title: String,
    author: String,
}

impl Book {
    /// Create a new book, validating the title and then the author.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first blank field.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Self, InvalidFieldError> {
        Ok(Self {
            title: validate(BookField::Title, Some(title.into()))?,
            author: validate(BookField::Author, Some(author.into()))?,
        })
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Replace the title.
    ///
    /// # Errors
    ///
    /// Returns an error if `title` is empty or whitespace-only; the current
    /// title is kept.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), InvalidFieldError> {
        self.title = validate(BookField::Title, Some(title.into()))?;
        Ok(())
    }

    /// Replace the author.
    ///
    /// # Errors
    ///
    /// Returns an error if `author` is empty or whitespace-only; the current
    /// author is kept.
    pub fn set_author(&mut self, author: impl Into<String>) -> Result<(), InvalidFieldError> {
        self.author = validate(BookField::Author, Some(author.into()))?;
        Ok(())
    }

    /// Consume the book, returning `(title, author)`.
    pub fn into_parts(self) -> (String, String) {
        (self.title, self.author)
    }
}

/// Field guard shared by construction, the setters, and draft conversion.
fn validate(field: BookField, value: Option<String>) -> Result<String, InvalidFieldError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(InvalidFieldError::new(field)),
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.title, BY, self.author)
    }
}

impl FromStr for Book {
    type Err = InvalidFieldError;

    /// Parses `"<title> by <author>"`, splitting on the last `" by "`.
    ///
    /// This undoes [`Display`](fmt::Display) as long as the author neither
    /// contains `" by "` nor starts with `"by "`. Titles may contain it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let draft = match s.rsplit_once(BY) {
            Some((title, author)) => BookDraft::new(title, author),
            None => BookDraft {
                title: Some(s.to_string()),
                author: None,
            },
        };
        Self::try_from(draft)
    }
}

/// The unvalidated shape of a [`Book`].
///
/// Drafts carry whatever a caller or a deserializer supplied, including
/// absent fields. They become books only through [`TryFrom`], which applies
/// the same field guard as [`Book::set_title`] and [`Book::set_author`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl BookDraft {
    /// Create a draft with both fields present.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
        }
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

impl TryFrom<BookDraft> for Book {
    type Error = InvalidFieldError;

    fn try_from(draft: BookDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            title: validate(BookField::Title, draft.title)?,
            author: validate(BookField::Author, draft.author)?,
        })
    }
}

impl From<Book> for BookDraft {
    fn from(book: Book) -> Self {
        Self {
            title: Some(book.title),
            author: Some(book.author),
        }
    }
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        book.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(book: &Book) -> u64 {
        let mut hasher = DefaultHasher::new();
        book.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn valid_book() {
        let book = Book::new("Book1", "Author1").unwrap();
        assert_eq!(book.title(), "Book1");
        assert_eq!(book.author(), "Author1");
    }

    #[test]
    fn values_are_stored_verbatim() {
        let book = Book::new("  Padded ", "A").unwrap();
        assert_eq!(book.title(), "  Padded ");
    }

    #[test]
    fn invalid_empty_title() {
        let err = Book::new("", "Author1").unwrap_err();
        assert_eq!(err.field, BookField::Title);
    }

    #[test]
    fn invalid_whitespace_author() {
        let err = Book::new("Book1", " \t\n").unwrap_err();
        assert_eq!(err.field, BookField::Author);
    }

    #[test]
    fn title_is_checked_before_author() {
        let err = Book::new("", "").unwrap_err();
        assert_eq!(err.field, BookField::Title);
    }

    #[test]
    fn failed_set_keeps_previous_value() {
        let mut book = Book::new("Book1", "Author1").unwrap();
        assert!(book.set_title("").is_err());
        assert!(book.set_author("   ").is_err());
        assert_eq!(book.title(), "Book1");
        assert_eq!(book.author(), "Author1");

        book.set_author("Author2").unwrap();
        assert_eq!(book.author(), "Author2");
    }

    #[test]
    fn clone_is_equal_and_independent() {
        let original = Book::new("Book1", "Author1").unwrap();
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.set_title("Other").unwrap();
        assert_ne!(copy, original);
        assert_eq!(original.title(), "Book1");
    }

    #[test]
    fn equal_books_hash_equally() {
        let a = Book::new("Book1", "Author1").unwrap();
        let b = Book::new("Book1", "Author1").unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, Book::new("Book1", "Author2").unwrap());
    }

    #[test]
    fn display_and_parse() {
        let book = Book::new("Book1", "Author1").unwrap();
        assert_eq!(book.to_string(), "Book1 by Author1");
        assert_eq!("Book1 by Author1".parse::<Book>().unwrap(), book);
    }

    #[test]
    fn parse_splits_on_last_separator() {
        let book: Book = "Stand by Me by Stephen King".parse().unwrap();
        assert_eq!(book.title(), "Stand by Me");
        assert_eq!(book.author(), "Stephen King");
    }

    #[test]
    fn parse_round_trips_display() {
        for book in [
            Book::new("Book1", "Author1").unwrap(),
            Book::new("Stand by Me", "Stephen King").unwrap(),
            Book::new("Dune", "Frank Herbert by proxy").unwrap(),
        ] {
            let parsed: Book = book.to_string().parse().unwrap();
            if book.author().contains(BY) {
                assert_ne!(parsed, book);
            } else {
                assert_eq!(parsed, book);
            }
        }
    }

    #[test]
    fn parse_moves_leading_by_of_author_into_title() {
        let book = Book::new("Dune", "by Frank Herbert").unwrap();
        assert_eq!(book.to_string(), "Dune by by Frank Herbert");

        let parsed: Book = book.to_string().parse().unwrap();
        assert_eq!(parsed.title(), "Dune by");
        assert_eq!(parsed.author(), "Frank Herbert");
    }

    #[test]
    fn draft_from_borrowed_book() {
        let book = Book::new("Book1", "Author1").unwrap();
        assert_eq!(BookDraft::from(&book), BookDraft::new("Book1", "Author1"));
    }

    #[test]
    fn parse_without_author_fails() {
        let err = "Book1".parse::<Book>().unwrap_err();
        assert_eq!(err.field, BookField::Author);
    }

    #[test]
    fn draft_with_absent_field_is_rejected() {
        let draft = BookDraft::default().author("Author1");
        let err = Book::try_from(draft).unwrap_err();
        assert_eq!(err.field, BookField::Title);
    }
}
