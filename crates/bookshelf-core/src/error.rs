//! Error types for the bookshelf library.
//!
//! Field validation and positional access each have their own error type;
//! [`Error`] unifies them for callers that handle both.

use std::fmt;
use thiserror::Error;

/// The unified error type for bookshelf operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A book field was assigned a blank value.
    #[error(transparent)]
    InvalidField(#[from] InvalidFieldError),

    /// A position outside the list was requested.
    #[error(transparent)]
    IndexOutOfRange(#[from] IndexOutOfRangeError),
}

/// The validated fields of a [`Book`](crate::Book).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookField {
    Title,
    Author,
}

impl BookField {
    /// Returns the capitalized field name used in messages.
    pub fn label(self) -> &'static str {
        match self {
            BookField::Title => "Title",
            BookField::Author => "Author",
        }
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A book field was absent, empty, or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} cannot be empty or null.")]
pub struct InvalidFieldError {
    /// The field that failed validation.
    pub field: BookField,
}

impl InvalidFieldError {
    pub fn new(field: BookField) -> Self {
        Self { field }
    }
}

/// Indexed access outside `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Index is out of range.")]
pub struct IndexOutOfRangeError {
    /// The requested position.
    pub index: usize,
    /// The list length at the time of the request.
    pub len: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_messages() {
        assert_eq!(
            InvalidFieldError::new(BookField::Title).to_string(),
            "Title cannot be empty or null."
        );
        assert_eq!(
            InvalidFieldError::new(BookField::Author).to_string(),
            "Author cannot be empty or null."
        );
    }

    #[test]
    fn unified_error_is_transparent() {
        let err: Error = IndexOutOfRangeError { index: 10, len: 2 }.into();
        assert_eq!(err.to_string(), "Index is out of range.");

        let err: Error = InvalidFieldError::new(BookField::Author).into();
        assert!(matches!(err, Error::InvalidField(e) if e.field == BookField::Author));
    }
}
