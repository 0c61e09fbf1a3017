//! HTTP inbound adapter exposing REST endpoints.

pub mod books;
pub mod error;

pub use error::ApiResult;
