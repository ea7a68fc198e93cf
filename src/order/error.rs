//! Errors returned by the Order Service and their HTTP mapping.

use super::gateway::GatewayError;
use super::intent::{OrderConfirmation, OrderOutcome, Rejection};
use crate::catalog::dto::ErrorBody;
use crate::model::BookId;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Invalid book id: {0}")]
    InvalidBookId(String),

    #[error("Book {0} not found")]
    NotFound(BookId),

    #[error("Book {0} is out of stock")]
    OutOfStock(BookId),

    /// The catalog was unreachable or answered something unintelligible.
    #[error("{0}")]
    CatalogUnavailable(String),

    #[error("Catalog service did not answer within {0:?}")]
    CatalogTimeout(Duration),
}

impl OrderError {
    pub fn status(&self) -> StatusCode {
        match self {
            OrderError::InvalidBookId(_) => StatusCode::BAD_REQUEST,
            OrderError::NotFound(_) => StatusCode::NOT_FOUND,
            OrderError::OutOfStock(_) => StatusCode::BAD_REQUEST,
            OrderError::CatalogUnavailable(_) => StatusCode::BAD_GATEWAY,
            OrderError::CatalogTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            OrderError::InvalidBookId(_) => "validation",
            OrderError::NotFound(_) => "not_found",
            OrderError::OutOfStock(_) => "out_of_stock",
            OrderError::CatalogUnavailable(_) => "catalog_unavailable",
            OrderError::CatalogTimeout(_) => "catalog_timeout",
        }
    }

    /// True when the catalog gave no business answer.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            OrderError::CatalogUnavailable(_) | OrderError::CatalogTimeout(_)
        )
    }
}

impl From<GatewayError> for OrderError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Timeout(bound) => OrderError::CatalogTimeout(bound),
            other => OrderError::CatalogUnavailable(other.to_string()),
        }
    }
}

impl OrderOutcome {
    pub fn into_result(self) -> Result<OrderConfirmation, OrderError> {
        match self {
            OrderOutcome::Confirmed(confirmation) => Ok(confirmation),
            OrderOutcome::Rejected {
                book_id,
                reason: Rejection::NotFound,
            } => Err(OrderError::NotFound(book_id)),
            OrderOutcome::Rejected {
                book_id,
                reason: Rejection::OutOfStock,
            } => Err(OrderError::OutOfStock(book_id)),
            OrderOutcome::Failed { error, .. } => Err(error.into()),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.code().to_string(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
