//! Error types for the Book actor.

use crate::model::BookId;
use thiserror::Error;

/// Errors that can occur during book operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookError {
    /// The requested book was not found.
    #[error("Book not found: {0}")]
    NotFound(String),

    /// Another book already uses this title.
    #[error("Book with title '{0}' already exists")]
    DuplicateTitle(String),

    /// No copies left to sell.
    #[error("Book {0} is out of stock")]
    OutOfStock(BookId),

    /// A field value violates the book's rules (empty title, negative price, ...).
    #[error("Invalid book: {0}")]
    Invalid(String),

    /// An error occurred while communicating with the record store.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
