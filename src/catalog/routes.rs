//! axum router for the Catalog Service.

use super::dto::{
    BookListResponse, CreatedResponse, MessageResponse, NewBookRequest, PurchaseResponse,
    SearchResponse,
};
use super::error::CatalogError;
use super::service::CatalogService;
use crate::model::{Book, BookId, BookUpdate};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

type Result<T> = std::result::Result<T, CatalogError>;

pub fn router(service: CatalogService) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/books", post(add_book).get(list_books))
        .route(
            "/books/:id",
            get(get_book).put(update_book).delete(delete_book),
        )
        .route("/search/:topic", get(search_by_topic))
        .route("/purchase/:id", put(purchase_book))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

fn book_id(path: std::result::Result<Path<BookId>, PathRejection>) -> Result<BookId> {
    path.map(|Path(id)| id)
        .map_err(|e| CatalogError::Validation(format!("Invalid book id: {}", e.body_text())))
}

fn body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|e| CatalogError::Validation(e.body_text()))
}

async fn health() -> Json<MessageResponse> {
    Json(MessageResponse::new("Catalog Server is Running"))
}

async fn add_book(
    State(service): State<CatalogService>,
    payload: std::result::Result<Json<NewBookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let id = service.add_book(body(payload)?).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Book added successfully".to_string(),
            id,
        }),
    ))
}

async fn list_books(State(service): State<CatalogService>) -> Result<Json<BookListResponse>> {
    let books = service.list_books().await?;
    Ok(Json(BookListResponse { books }))
}

async fn get_book(
    State(service): State<CatalogService>,
    path: std::result::Result<Path<BookId>, PathRejection>,
) -> Result<Json<Book>> {
    Ok(Json(service.get_book(book_id(path)?).await?))
}

async fn update_book(
    State(service): State<CatalogService>,
    path: std::result::Result<Path<BookId>, PathRejection>,
    payload: std::result::Result<Json<BookUpdate>, JsonRejection>,
) -> Result<Json<Book>> {
    let id = book_id(path)?;
    Ok(Json(service.update_book(id, body(payload)?).await?))
}

async fn delete_book(
    State(service): State<CatalogService>,
    path: std::result::Result<Path<BookId>, PathRejection>,
) -> Result<Json<MessageResponse>> {
    service.delete_book(book_id(path)?).await?;
    Ok(Json(MessageResponse::new("Book deleted successfully")))
}

async fn search_by_topic(
    State(service): State<CatalogService>,
    Path(topic): Path<String>,
) -> Result<Json<SearchResponse>> {
    let books = service.search_by_topic(&topic).await?;
    Ok(Json(SearchResponse {
        message: "Books found".to_string(),
        books,
    }))
}

async fn purchase_book(
    State(service): State<CatalogService>,
    path: std::result::Result<Path<BookId>, PathRejection>,
) -> Result<Json<PurchaseResponse>> {
    let book = service.purchase_book(book_id(path)?).await?;
    Ok(Json(PurchaseResponse {
        message: "Book purchased successfully".to_string(),
        book,
    }))
}
