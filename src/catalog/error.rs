//! Error type of the catalog HTTP surface and its mapping to status codes.

use super::dto::ErrorBody;
use crate::catalog_actor::BookError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// Missing or malformed input. Never reaches the store.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    DuplicateTitle(String),

    /// Business rejection of a purchase; not a fault.
    #[error("{0}")]
    OutOfStock(String),

    #[error("{0}")]
    Internal(String),
}

impl CatalogError {
    pub fn status(&self) -> StatusCode {
        match self {
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::DuplicateTitle(_) => StatusCode::CONFLICT,
            CatalogError::OutOfStock(_) => StatusCode::BAD_REQUEST,
            CatalogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable code carried in [`ErrorBody::error`].
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::Validation(_) => "validation",
            CatalogError::NotFound(_) => "not_found",
            CatalogError::DuplicateTitle(_) => "duplicate_title",
            CatalogError::OutOfStock(_) => "out_of_stock",
            CatalogError::Internal(_) => "internal",
        }
    }
}

impl From<BookError> for CatalogError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound(_) => CatalogError::NotFound("Book not found".to_string()),
            BookError::DuplicateTitle(_) => CatalogError::DuplicateTitle(err.to_string()),
            BookError::OutOfStock(_) => CatalogError::OutOfStock("Book out of stock".to_string()),
            BookError::Invalid(msg) => CatalogError::Validation(msg),
            BookError::ActorCommunicationError(_) => CatalogError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.code().to_string(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
