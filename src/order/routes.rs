//! axum router for the Order Service.

use super::error::OrderError;
use super::intent::OrderConfirmation;
use super::service::OrderService;
use crate::catalog::dto::MessageResponse;
use crate::model::BookId;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub message: String,
    pub order: OrderConfirmation,
}

pub fn router(service: OrderService) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/purchase/:book_id", put(purchase))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn health() -> Json<MessageResponse> {
    Json(MessageResponse::new("Order Server is Running"))
}

async fn purchase(
    State(service): State<OrderService>,
    path: Result<Path<BookId>, PathRejection>,
) -> Result<Json<OrderResponse>, OrderError> {
    let Path(book_id) = path.map_err(|e| OrderError::InvalidBookId(e.body_text()))?;
    let order = service.place_order(book_id).await?;
    Ok(Json(OrderResponse {
        message: "Purchase successful".to_string(),
        order,
    }))
}
