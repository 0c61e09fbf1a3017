//! HTTP adapter mapping for repository port errors.
//!
//! Purpose: keep the domain port errors HTTP-agnostic while allowing
//! Actix handlers to surface persistence faults as consistent JSON
//! responses and status codes. Adapter-supplied detail is logged, never
//! leaked to clients.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use tracing::error;

use crate::domain::ports::BookPersistenceError;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, BookPersistenceError>;

fn status_for(error: &BookPersistenceError) -> StatusCode {
    match error {
        BookPersistenceError::Connection { .. } => StatusCode::SERVICE_UNAVAILABLE,
        BookPersistenceError::Query { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redacted_body(status: StatusCode) -> serde_json::Value {
    if status == StatusCode::SERVICE_UNAVAILABLE {
        json!({ "code": "service_unavailable", "message": "Service unavailable." })
    } else {
        json!({ "code": "internal_error", "message": "Internal server error." })
    }
}

impl ResponseError for BookPersistenceError {
    fn status_code(&self) -> StatusCode {
        status_for(self)
    }

    fn error_response(&self) -> HttpResponse {
        // Do not leak adapter diagnostics to clients.
        error!(error = %self, "book repository fault surfaced to HTTP boundary");
        HttpResponse::build(self.status_code()).json(redacted_body(self.status_code()))
    }
}
