//! In-memory book repository adapter.
//!
//! Backs the [`BooksRepository`] port with a process-local map. Suitable
//! for the demo wiring and for tests; a database-backed adapter would
//! replace this module without touching the domain.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{BookPersistenceError, BooksRepository};
use crate::domain::{Book, BookId, ValidCreateBook};

/// Process-local [`BooksRepository`] implementation.
#[derive(Debug, Default)]
pub struct InMemoryBooksRepository {
    books: RwLock<HashMap<String, Book>>,
}

impl InMemoryBooksRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BooksRepository for InMemoryBooksRepository {
    async fn insert(&self, book: ValidCreateBook) -> Result<Book, BookPersistenceError> {
        let stored = Book::new(BookId::generate(), book);
        let mut books = self
            .books
            .write()
            .map_err(|_| BookPersistenceError::query("books store lock poisoned"))?;
        books.insert(stored.id().as_str().to_owned(), stored.clone());
        Ok(stored)
    }

    async fn get_by_id(&self, id: &BookId) -> Result<Option<Book>, BookPersistenceError> {
        let books = self
            .books
            .read()
            .map_err(|_| BookPersistenceError::query("books store lock poisoned"))?;
        Ok(books.get(id.as_str()).cloned())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{CreateBook, Outcome};

    fn valid_input(name: &str) -> ValidCreateBook {
        let outcome = ValidCreateBook::from_input(CreateBook {
            name: name.into(),
            author: "Herbert".into(),
            year: 1965,
        });
        match outcome {
            Outcome::Success(valid) => valid,
            Outcome::Failure(errors) => panic!("fixture input must validate: {errors:?}"),
        }
    }

    #[tokio::test]
    async fn insert_assigns_a_fresh_identifier() {
        let repository = InMemoryBooksRepository::new();
        let first = repository.insert(valid_input("Dune")).await.expect("insert");
        let second = repository
            .insert(valid_input("Dune Messiah"))
            .await
            .expect("insert");
        assert_ne!(first.id(), second.id());
    }

    #[tokio::test]
    async fn inserted_books_are_retrievable_by_id() {
        let repository = InMemoryBooksRepository::new();
        let stored = repository.insert(valid_input("Dune")).await.expect("insert");

        let found = repository
            .get_by_id(stored.id())
            .await
            .expect("lookup")
            .expect("book present");
        assert_eq!(found, stored);
    }

    #[tokio::test]
    async fn unknown_identifiers_yield_none() {
        let repository = InMemoryBooksRepository::new();
        let found = repository
            .get_by_id(&BookId::from_string("missing"))
            .await
            .expect("lookup");
        assert!(found.is_none());
    }
}
