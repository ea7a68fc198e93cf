//! Catalog operations on top of the book store.
//!
//! [`CatalogService`] holds no state of its own besides the client handle and the topic
//! policy. It validates payloads, calls the store and converts [`BookError`]s into
//! [`CatalogError`]s.

use super::dto::NewBookRequest;
use super::error::CatalogError;
use crate::catalog_actor::BookError;
use crate::clients::BookClient;
use crate::config::TopicMatch;
use crate::model::{Book, BookCreate, BookId, BookSummary, BookUpdate};
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct CatalogService {
    books: BookClient,
    topic_match: TopicMatch,
}

impl CatalogService {
    pub fn new(books: BookClient, topic_match: TopicMatch) -> Self {
        Self { books, topic_match }
    }

    /// Validates the payload and stores a new book, returning its id.
    #[instrument(skip(self, payload))]
    pub async fn add_book(&self, payload: NewBookRequest) -> Result<BookId, CatalogError> {
        let params = BookCreate::try_from(payload)?;
        let id = self.books.create_book(params).await?;
        info!(%id, "Book added");
        Ok(id)
    }

    pub async fn list_books(&self) -> Result<Vec<Book>, CatalogError> {
        Ok(self.books.list_books().await?)
    }

    pub async fn get_book(&self, id: BookId) -> Result<Book, CatalogError> {
        Ok(self.books.get_book(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_book(&self, id: BookId) -> Result<(), CatalogError> {
        self.books.delete_book(id).await?;
        info!(%id, "Book deleted");
        Ok(())
    }

    /// Applies `price` and `quantity` when present. Nothing else about a book can change.
    #[instrument(skip(self))]
    pub async fn update_book(&self, id: BookId, update: BookUpdate) -> Result<Book, CatalogError> {
        Ok(self.books.update_book(id, update).await?)
    }

    /// Books matching `topic` under the configured policy. No match is a not-found.
    pub async fn search_by_topic(&self, topic: &str) -> Result<Vec<BookSummary>, CatalogError> {
        let books = self.books.find_by_topic(topic, self.topic_match).await?;
        if books.is_empty() {
            return Err(CatalogError::NotFound(
                "No books found for the given topic".to_string(),
            ));
        }
        Ok(books.iter().map(Book::summary).collect())
    }

    /// Sells one copy. Out of stock is reported as a rejection, not a failure.
    #[instrument(skip(self))]
    pub async fn purchase_book(&self, id: BookId) -> Result<Book, CatalogError> {
        match self.books.decrement(id).await {
            Ok(book) => {
                info!(%id, remaining = book.quantity, "Purchase confirmed");
                Ok(book)
            }
            Err(err @ BookError::OutOfStock(_)) => {
                warn!(%id, "Purchase rejected, out of stock");
                Err(err.into())
            }
            Err(err) => Err(err.into()),
        }
    }
}
