//! Request and response bodies of the catalog HTTP API.
//!
//! Response types also derive `Deserialize` so the Order Service and the tests can read them
//! back.

use super::error::CatalogError;
use crate::model::{Book, BookCreate, BookId, BookSummary};
use serde::{Deserialize, Serialize};

/// `POST /books` body. Every field is optional at the serde level so that a missing field
/// is reported by name instead of as a generic decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub quantity: Option<u32>,
    pub price: Option<f64>,
    pub topic: Option<String>,
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, CatalogError> {
    value.ok_or_else(|| CatalogError::Validation(format!("Missing required field: {field}")))
}

impl TryFrom<NewBookRequest> for BookCreate {
    type Error = CatalogError;

    fn try_from(req: NewBookRequest) -> Result<Self, Self::Error> {
        Ok(BookCreate {
            title: required(req.title, "title")?,
            author: required(req.author, "author")?,
            quantity: required(req.quantity, "quantity")?,
            price: required(req.price, "price")?,
            topic: req.topic.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: BookId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookListResponse {
    pub books: Vec<Book>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub message: String,
    pub books: Vec<BookSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseResponse {
    pub message: String,
    pub book: Book,
}

/// Body of every non-2xx response: a stable machine-readable `error` code plus a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}
