//! # Book Client
//!
//! Provides a high-level API over the book store. It wraps a `ResourceClient<Book>` and
//! exposes the Inventory Store operations with [`BookError`] as the single error type.
use crate::catalog_actor::{BookAction, BookActionResult, BookError};
use crate::config::TopicMatch;
use crate::model::{Book, BookCreate, BookId, BookUpdate};
use async_trait::async_trait;
use record_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the book store.
#[derive(Clone)]
pub struct BookClient {
    inner: ResourceClient<Book>,
}

impl BookClient {
    pub fn new(inner: ResourceClient<Book>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Book> for BookClient {
    type Error = BookError;

    fn inner(&self) -> &ResourceClient<Book> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => BookError::NotFound(id),
            FrameworkError::Conflict(title) => BookError::DuplicateTitle(title),
            other => other
                .downcast_entity::<BookError>()
                .unwrap_or_else(|e| BookError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl BookClient {
    #[instrument(skip(self))]
    pub async fn create_book(&self, params: BookCreate) -> Result<BookId, BookError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Fetch one book, treating absence as [`BookError::NotFound`].
    #[instrument(skip(self))]
    pub async fn get_book(&self, id: BookId) -> Result<Book, BookError> {
        self.get(id)
            .await?
            .ok_or_else(|| BookError::NotFound(id.to_string()))
    }

    /// Every book, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_books(&self) -> Result<Vec<Book>, BookError> {
        let mut books = self.list().await?;
        books.sort_by_key(|book| book.id);
        Ok(books)
    }

    /// Books whose topic matches `topic` under `policy`, ordered by id.
    ///
    /// An empty result is not an error here; callers decide what "no match" means.
    #[instrument(skip(self))]
    pub async fn find_by_topic(
        &self,
        topic: &str,
        policy: TopicMatch,
    ) -> Result<Vec<Book>, BookError> {
        let mut books = self
            .inner
            .find(|book| policy.matches(&book.topic, topic))
            .await
            .map_err(Self::map_error)?;
        books.sort_by_key(|book| book.id);
        debug!(matched = books.len(), "Topic search");
        Ok(books)
    }

    #[instrument(skip(self))]
    pub async fn update_book(&self, id: BookId, update: BookUpdate) -> Result<Book, BookError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_book(&self, id: BookId) -> Result<(), BookError> {
        self.delete(id).await
    }

    /// Take one copy out of stock, atomically with respect to every other caller.
    ///
    /// Returns the book as committed after the decrement.
    #[instrument(skip(self))]
    pub async fn decrement(&self, id: BookId) -> Result<Book, BookError> {
        debug!("Decrementing stock for book {}", id);
        match self
            .inner
            .perform_action(id, BookAction::Decrement)
            .await
            .map_err(Self::map_error)?
        {
            BookActionResult::Decrement(book) => Ok(book),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_actor;

    fn client() -> BookClient {
        BookClient::new(catalog_actor::new(8))
    }

    fn params(title: &str, quantity: u32, topic: &str) -> BookCreate {
        BookCreate {
            title: title.to_string(),
            author: "Someone".to_string(),
            quantity,
            price: 10.0,
            topic: topic.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_matches_input() {
        let client = client();
        let id = client
            .create_book(BookCreate {
                title: "Dune".into(),
                author: "Herbert".into(),
                quantity: 1,
                price: 9.99,
                topic: String::new(),
            })
            .await
            .unwrap();

        let book = client.get_book(id).await.unwrap();
        assert_eq!(book, Book::new(id, "Dune", "Herbert", 1, 9.99, ""));
        assert_eq!(client.get_book(id).await.unwrap(), book);
    }

    #[tokio::test]
    async fn test_duplicate_title_is_rejected() {
        let client = client();
        client.create_book(params("Dune", 1, "")).await.unwrap();

        let err = client.create_book(params("Dune", 3, "")).await.unwrap_err();
        assert_eq!(err, BookError::DuplicateTitle("Dune".into()));
    }

    #[tokio::test]
    async fn test_invalid_fields_surface_as_invalid() {
        let client = client();
        let mut bad = params("Dune", 1, "");
        bad.price = -2.0;

        assert!(matches!(
            client.create_book(bad).await,
            Err(BookError::Invalid(_))
        ));
    }

    #[tokio::test]
    async fn test_dune_scenario() {
        let client = client();
        let id = client.create_book(params("Dune", 1, "")).await.unwrap();

        let after = client.decrement(id).await.unwrap();
        assert_eq!(after.quantity, 0);

        let err = client.decrement(id).await.unwrap_err();
        assert_eq!(err, BookError::OutOfStock(id));
        assert_eq!(client.get_book(id).await.unwrap().quantity, 0);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let client = client();
        let missing = BookId(999);

        assert!(matches!(client.get_book(missing).await, Err(BookError::NotFound(_))));
        assert!(matches!(client.decrement(missing).await, Err(BookError::NotFound(_))));
        assert!(matches!(client.delete_book(missing).await, Err(BookError::NotFound(_))));
        assert!(matches!(
            client.update_book(missing, BookUpdate::default()).await,
            Err(BookError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let client = client();
        let id = client.create_book(params("Dune", 1, "")).await.unwrap();

        client.delete_book(id).await.unwrap();
        assert_eq!(
            client.get_book(id).await.unwrap_err(),
            BookError::NotFound(id.to_string())
        );
    }

    #[tokio::test]
    async fn test_find_by_topic_and_listing_order() {
        let client = client();
        let a = client.create_book(params("A", 1, "fiction")).await.unwrap();
        let _h = client.create_book(params("H", 1, "history")).await.unwrap();
        let b = client.create_book(params("B", 1, "fiction")).await.unwrap();

        let ids: Vec<_> = client
            .find_by_topic("fiction", TopicMatch::Exact)
            .await
            .unwrap()
            .into_iter()
            .map(|book| book.id)
            .collect();
        assert_eq!(ids, vec![a, b]);

        assert!(client
            .find_by_topic("Fiction", TopicMatch::Exact)
            .await
            .unwrap()
            .is_empty());

        let listed: Vec<_> = client
            .list_books()
            .await
            .unwrap()
            .into_iter()
            .map(|book| book.title)
            .collect();
        assert_eq!(listed, vec!["A", "H", "B"]);
    }
}
