//! Domain ports for the hexagonal boundary.

mod books_repository;

#[cfg(test)]
pub use books_repository::MockBooksRepository;
pub use books_repository::{BookPersistenceError, BooksRepository};
