//! Domain primitives, entities, and use-case services.
//!
//! Purpose: hold the framework-free core of the books API. Types here are
//! immutable, document their invariants in Rustdoc, and reach the outside
//! world only through the ports in [`ports`].
//!
//! Public surface:
//! - [`Outcome`] — two-variant success/failure container.
//! - [`Error`] / [`ErrorCode`] — validation error value and closed codes.
//! - [`Id`] / [`BookId`] — nominally typed identifiers.
//! - [`CreateBook`] / [`ValidCreateBook`] — raw input and validation gate.
//! - [`Book`] / [`BookOutput`] — entity and outward projection.
//! - [`BooksService`] — create/get orchestration over the repository port.

pub mod ports;

mod book;
mod books_service;
mod create_book;
mod error;
mod id;
mod outcome;

pub use self::book::{Book, BookOutput};
pub use self::books_service::BooksService;
pub use self::create_book::{CreateBook, ValidCreateBook};
pub use self::error::{Error, ErrorCode};
pub use self::id::{BookId, BookKind, Id};
pub use self::outcome::Outcome;
