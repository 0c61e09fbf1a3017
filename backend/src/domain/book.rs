//! Book entity and its outward projection.

use serde::Serialize;

use crate::domain::{BookId, ValidCreateBook};

/// A persisted book.
///
/// ## Invariants
/// - Constructed only from a [`BookId`] plus a [`ValidCreateBook`], so
///   every book in existence passed validation.
///
/// The entity is database agnostic; outbound adapters own any storage
/// representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    name: String,
    author: String,
    year: i32,
}

impl Book {
    /// Build a book from an identifier and validated input.
    pub fn new(id: BookId, input: ValidCreateBook) -> Self {
        let (name, author, year) = input.into_fields();
        Self {
            id,
            name,
            author,
            year,
        }
    }

    /// Stable book identifier.
    #[must_use]
    pub const fn id(&self) -> &BookId {
        &self.id
    }

    /// Book title.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Book author.
    #[must_use]
    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    /// Publication year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }
}

/// Flattened, transport-safe view of a [`Book`].
///
/// Purely derived data: the identifier is rendered as a plain string and
/// the projection has no lifecycle of its own. Reusable as the response
/// shape of create, update, or list operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookOutput {
    id: String,
    name: String,
    author: String,
    year: i32,
}

impl BookOutput {
    /// Project a book into its outward view.
    #[must_use]
    pub fn from_book(book: &Book) -> Self {
        Self {
            id: book.id().to_string(),
            name: book.name().to_owned(),
            author: book.author().to_owned(),
            year: book.year(),
        }
    }

    /// Identifier rendered as plain text.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Book title.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Book author.
    #[must_use]
    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    /// Publication year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{CreateBook, Outcome};
    use serde_json::json;

    fn valid_input() -> ValidCreateBook {
        let outcome = ValidCreateBook::from_input(CreateBook {
            name: "Dune".into(),
            author: "Herbert".into(),
            year: 1965,
        });
        match outcome {
            Outcome::Success(valid) => valid,
            Outcome::Failure(errors) => panic!("fixture input must validate: {errors:?}"),
        }
    }

    #[test]
    fn book_carries_the_validated_fields() {
        let id = BookId::from_string("book-1");
        let book = Book::new(id.clone(), valid_input());
        assert_eq!(book.id(), &id);
        assert_eq!(book.name(), "Dune");
        assert_eq!(book.author(), "Herbert");
        assert_eq!(book.year(), 1965);
    }

    #[test]
    fn projection_flattens_the_identifier() {
        let book = Book::new(BookId::from_string("book-1"), valid_input());
        let output = BookOutput::from_book(&book);
        let value = serde_json::to_value(&output).expect("output JSON");
        assert_eq!(
            value,
            json!({
                "id": "book-1",
                "name": "Dune",
                "author": "Herbert",
                "year": 1965,
            })
        );
    }
}
