//! End-to-end tests for the books API over the real in-memory adapter.

use std::sync::Arc;

use actix_web::{http::StatusCode, test as actix_test, web, App};
use serde_json::{json, Value};

use backend::domain::BooksService;
use backend::inbound::http::books::{create_book, get_book};
use backend::outbound::persistence::InMemoryBooksRepository;

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let service = BooksService::new(Arc::new(InMemoryBooksRepository::new()));
    App::new().app_data(web::Data::new(service)).service(
        web::scope("/api/v1")
            .service(create_book)
            .service(get_book),
    )
}

async fn post_book(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    payload: Value,
) -> (StatusCode, Value) {
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/books")
        .set_json(&payload)
        .to_request();
    let response = actix_test::call_service(app, request).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("JSON body");
    (status, value)
}

#[actix_web::test]
async fn creating_a_valid_book_returns_its_projection() {
    let app = actix_test::init_service(test_app()).await;

    let (status, body) = post_book(
        &app,
        json!({ "name": "Dune", "author": "Herbert", "year": 1965 }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.get("name").and_then(Value::as_str), Some("Dune"));
    assert_eq!(body.get("author").and_then(Value::as_str), Some("Herbert"));
    assert_eq!(body.get("year").and_then(Value::as_i64), Some(1965));
    let id = body.get("id").and_then(Value::as_str).expect("id present");
    assert!(!id.is_empty());
}

#[actix_web::test]
async fn violating_every_rule_reports_all_three_codes() {
    let app = actix_test::init_service(test_app()).await;

    let (status, body) = post_book(&app, json!({ "name": "", "author": "", "year": 0 })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = body.as_array().expect("error array");
    let codes: Vec<&str> = errors
        .iter()
        .map(|err| err.get("code").and_then(Value::as_str).expect("code"))
        .collect();
    assert_eq!(
        codes,
        vec!["name_is_required", "author_is_required", "year_is_required"]
    );
    for err in errors {
        let message = err
            .get("message")
            .and_then(Value::as_str)
            .expect("message present");
        assert!(!message.is_empty());
    }
}

#[actix_web::test]
async fn violating_one_rule_reports_exactly_that_code() {
    let app = actix_test::init_service(test_app()).await;

    let (status, body) = post_book(&app, json!({ "name": "X", "author": "", "year": 2000 })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let codes: Vec<&str> = body
        .as_array()
        .expect("error array")
        .iter()
        .map(|err| err.get("code").and_then(Value::as_str).expect("code"))
        .collect();
    assert_eq!(codes, vec!["author_is_required"]);
}

#[actix_web::test]
async fn created_books_can_be_fetched_back() {
    let app = actix_test::init_service(test_app()).await;

    let (status, created) = post_book(
        &app,
        json!({ "name": "Dune", "author": "Herbert", "year": 1965 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created.get("id").and_then(Value::as_str).expect("id");

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/v1/books/{id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = actix_test::read_body(response).await;
    let fetched: Value = serde_json::from_slice(&body).expect("JSON body");
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn fetching_an_unknown_book_returns_not_found() {
    let app = actix_test::init_service(test_app()).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/books/no-such-book")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = actix_test::read_body(response).await;
    let value: Value = serde_json::from_slice(&body).expect("JSON body");
    assert_eq!(
        value.get("code").and_then(Value::as_str),
        Some("book_not_found")
    );
}

#[actix_web::test]
async fn repositories_are_isolated_per_application() {
    let first = actix_test::init_service(test_app()).await;
    let second = actix_test::init_service(test_app()).await;

    let (_, created) = post_book(
        &first,
        json!({ "name": "Dune", "author": "Herbert", "year": 1965 }),
    )
    .await;
    let id = created.get("id").and_then(Value::as_str).expect("id");

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/v1/books/{id}"))
        .to_request();
    let response = actix_test::call_service(&second, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
