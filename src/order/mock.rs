//! # Mock Catalog
//!
//! A [`CatalogGateway`] with scripted answers, for testing the Order Service without a
//! running catalog.
//!
//! ```rust
//! use bookstore::model::BookId;
//! use bookstore::order::mock::MockCatalog;
//! use bookstore::order::{GatewayError, OrderService};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockCatalog::new();
//!     mock.expect_purchase(BookId(7))
//!         .return_err(GatewayError::Timeout(Duration::from_millis(10)));
//!
//!     let service = OrderService::new(mock.clone());
//!     let err = service.place_order(BookId(7)).await.unwrap_err();
//!     assert!(err.is_unavailable());
//!     mock.verify();
//! }
//! ```

use super::gateway::{CatalogGateway, CatalogReply, GatewayError};
use crate::model::BookId;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

struct Expectation {
    id: BookId,
    delay: Option<Duration>,
    response: Result<CatalogReply, GatewayError>,
}

type Expectations = Arc<Mutex<VecDeque<Expectation>>>;

fn lock(expectations: &Expectations) -> MutexGuard<'_, VecDeque<Expectation>> {
    expectations.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Answers `purchase` calls from a queue of expectations, in order.
///
/// Clones share the queue, so a test can hand one clone to [`OrderService`](super::OrderService)
/// and keep another for [`verify`](MockCatalog::verify). A call that does not match the next
/// expectation panics.
#[derive(Clone, Default)]
pub struct MockCatalog {
    expectations: Expectations,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `purchase` of `id`.
    pub fn expect_purchase(&self, id: BookId) -> PurchaseExpectationBuilder {
        PurchaseExpectationBuilder {
            id,
            delay: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

#[async_trait]
impl CatalogGateway for MockCatalog {
    async fn purchase(&self, id: BookId) -> Result<CatalogReply, GatewayError> {
        let expectation = lock(&self.expectations).pop_front();
        let Some(expectation) = expectation else {
            panic!("Unexpected purchase of book {id}");
        };
        if expectation.id != id {
            panic!("Expected purchase of book {}, got book {id}", expectation.id);
        }
        if let Some(delay) = expectation.delay {
            sleep(delay).await;
        }
        expectation.response
    }
}

/// Builder for `purchase` expectations.
pub struct PurchaseExpectationBuilder {
    id: BookId,
    delay: Option<Duration>,
    expectations: Expectations,
}

impl PurchaseExpectationBuilder {
    /// Holds the answer back for `delay` before returning it.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn return_ok(self, reply: CatalogReply) {
        self.push(Ok(reply));
    }

    pub fn return_err(self, error: GatewayError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<CatalogReply, GatewayError>) {
        lock(&self.expectations).push_back(Expectation {
            id: self.id,
            delay: self.delay,
            response,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;
    use crate::order::{OrderError, OrderService};

    #[tokio::test]
    async fn test_mock_answers_in_order() {
        let mock = MockCatalog::new();
        let dune = Book::new(BookId(1), "Dune", "Herbert", 0, 9.99, "");
        mock.expect_purchase(BookId(1)).return_ok(CatalogReply::Purchased(dune));
        mock.expect_purchase(BookId(1)).return_ok(CatalogReply::OutOfStock);

        let service = OrderService::new(mock.clone());
        let order = service.place_order(BookId(1)).await.unwrap();
        assert_eq!(order.title, "Dune");
        assert_eq!(order.remaining, 0);

        let err = service.place_order(BookId(1)).await.unwrap_err();
        assert_eq!(err, OrderError::OutOfStock(BookId(1)));
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_unused_expectations() {
        let mock = MockCatalog::new();
        mock.expect_purchase(BookId(2)).return_ok(CatalogReply::NotFound);
        mock.verify();
    }
}
