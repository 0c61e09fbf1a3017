//! Book domain services.
//!
//! The service orchestrates validate, persist-if-valid, and project.
//! Validation failures short-circuit back to the caller as a failure
//! outcome without touching persistence; repository faults propagate on
//! the outer `Result` channel for the boundary to map.

use std::sync::Arc;

use crate::domain::ports::{BookPersistenceError, BooksRepository};
use crate::domain::{BookId, BookOutput, CreateBook, Outcome, ValidCreateBook};

/// Use-case service for creating and fetching books.
#[derive(Clone)]
pub struct BooksService {
    repository: Arc<dyn BooksRepository>,
}

impl BooksService {
    /// Create a new service backed by the given repository.
    pub fn new(repository: Arc<dyn BooksRepository>) -> Self {
        Self { repository }
    }

    /// Validate the input, persist it when valid, and project the stored
    /// book for the caller.
    ///
    /// # Errors
    /// Returns the repository's error untranslated when persistence
    /// fails; validation problems are reported inside the outcome, never
    /// on this channel.
    pub async fn create_book(
        &self,
        input: CreateBook,
    ) -> Result<Outcome<BookOutput>, BookPersistenceError> {
        let valid = match ValidCreateBook::from_input(input) {
            Outcome::Success(valid) => valid,
            failure @ Outcome::Failure(_) => return Ok(failure.cast()),
        };

        let book = self.repository.insert(valid).await?;
        Ok(Outcome::success(BookOutput::from_book(&book)))
    }

    /// Fetch a book projection by identifier, `None` when absent.
    ///
    /// # Errors
    /// Returns the repository's error untranslated when the lookup fails.
    pub async fn get_book(
        &self,
        id: &BookId,
    ) -> Result<Option<BookOutput>, BookPersistenceError> {
        let book = self.repository.get_by_id(id).await?;
        Ok(book.as_ref().map(BookOutput::from_book))
    }
}
