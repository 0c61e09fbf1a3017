//! Backend entry-point: wires the books service and REST endpoints.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use backend::domain::BooksService;
use backend::inbound::http::books::{create_book, get_book};
use backend::outbound::persistence::InMemoryBooksRepository;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    // Explicit wiring: the repository and service are constructed here
    // and injected as values; no ambient registry.
    let service = BooksService::new(Arc::new(InMemoryBooksRepository::new()));

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(service.clone()))
            .service(
                web::scope("/api/v1")
                    .service(create_book)
                    .service(get_book),
            )
    })
    .bind(("0.0.0.0", 8080))?
    .run()
    .await
}
