//! Port abstraction for book persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Book, BookId, ValidCreateBook};

/// Persistence errors raised by book repository adapters.
///
/// These travel on a separate channel from validation failures: the
/// domain core neither catches nor translates them, it propagates them
/// for the boundary to map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookPersistenceError {
    /// Repository connection could not be established.
    #[error("books repository connection failed: {message}")]
    Connection {
        /// Adapter-supplied diagnostic detail.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("books repository query failed: {message}")]
    Query {
        /// Adapter-supplied diagnostic detail.
        message: String,
    },
}

impl BookPersistenceError {
    /// Build a [`BookPersistenceError::Connection`].
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Build a [`BookPersistenceError::Query`].
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for durable book storage.
///
/// `insert` only accepts a [`ValidCreateBook`], so unvalidated data
/// structurally cannot reach an adapter; `get_by_id` only accepts a
/// [`BookId`], so callers can never hand over some other entity's
/// identifier by mistake.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BooksRepository: Send + Sync {
    /// Persist a validated book and return the stored entity with its
    /// freshly assigned identifier.
    async fn insert(&self, book: ValidCreateBook) -> Result<Book, BookPersistenceError>;

    /// Fetch a book by identifier, `None` when absent.
    async fn get_by_id(&self, id: &BookId) -> Result<Option<Book>, BookPersistenceError>;
}
