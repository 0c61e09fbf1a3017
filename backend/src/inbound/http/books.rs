//! Books API handlers.
//!
//! ```text
//! POST /api/v1/books {"name":"Dune","author":"Herbert","year":1965}
//! GET /api/v1/books/{id}
//! ```

use actix_web::http::header;
use actix_web::{get, post, web, HttpResponse};
use serde_json::json;

use crate::domain::{BookId, BooksService, CreateBook, Outcome};
use crate::inbound::http::ApiResult;

/// Create a book.
///
/// Maps the service outcome onto the transport: a success becomes
/// `201 Created` with a `Location` header and the projection as the
/// body; a validation failure becomes `422 Unprocessable Entity` with
/// the ordered `{code, message}` error list so clients get every field
/// problem in one round trip.
#[post("/books")]
pub async fn create_book(
    service: web::Data<BooksService>,
    payload: web::Json<CreateBook>,
) -> ApiResult<HttpResponse> {
    let outcome = service.create_book(payload.into_inner()).await?;

    match outcome {
        Outcome::Success(output) => Ok(HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/api/v1/books/{}", output.id())))
            .json(output)),
        Outcome::Failure(errors) => Ok(HttpResponse::UnprocessableEntity().json(errors)),
    }
}

/// Fetch a book by identifier.
///
/// The path segment is previously issued text, so reconstructing the
/// typed identifier goes through the explicit [`BookId::from_string`]
/// conversion.
#[get("/books/{id}")]
pub async fn get_book(
    service: web::Data<BooksService>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = BookId::from_string(path.into_inner());

    match service.get_book(&id).await? {
        Some(output) => Ok(HttpResponse::Ok().json(output)),
        None => Ok(HttpResponse::NotFound()
            .json(json!({ "code": "book_not_found", "message": "Book not found." }))),
    }
}
