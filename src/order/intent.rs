//! Life of one purchase request inside the Order Service.
//!
//! `Received -> Forwarded -> {Confirmed | Rejected | Failed}`. Each step consumes the previous
//! state, so an intent cannot be forwarded twice or resolved before it was forwarded.

use super::gateway::{CatalogReply, GatewayError};
use crate::model::{Book, BookId};
use serde::{Deserialize, Serialize};

/// A purchase request that has not reached the catalog yet.
#[derive(Debug)]
pub struct PurchaseIntent {
    book_id: BookId,
}

/// A purchase request whose catalog call is in flight.
#[derive(Debug)]
pub struct ForwardedIntent {
    book_id: BookId,
}

/// What the customer gets back for a confirmed purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub book_id: BookId,
    pub title: String,
    pub price: f64,
    pub remaining: u32,
}

impl From<Book> for OrderConfirmation {
    fn from(book: Book) -> Self {
        Self {
            book_id: book.id,
            title: book.title,
            price: book.price,
            remaining: book.quantity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotFound,
    OutOfStock,
}

/// Terminal state of an intent.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    Confirmed(OrderConfirmation),
    Rejected { book_id: BookId, reason: Rejection },
    Failed { book_id: BookId, error: GatewayError },
}

impl PurchaseIntent {
    pub fn new(book_id: BookId) -> Self {
        Self { book_id }
    }

    pub fn book_id(&self) -> BookId {
        self.book_id
    }

    pub fn forward(self) -> ForwardedIntent {
        ForwardedIntent {
            book_id: self.book_id,
        }
    }
}

impl ForwardedIntent {
    pub fn book_id(&self) -> BookId {
        self.book_id
    }

    pub fn resolve(self, reply: Result<CatalogReply, GatewayError>) -> OrderOutcome {
        let book_id = self.book_id;
        match reply {
            Ok(CatalogReply::Purchased(book)) => OrderOutcome::Confirmed(book.into()),
            Ok(CatalogReply::NotFound) => OrderOutcome::Rejected {
                book_id,
                reason: Rejection::NotFound,
            },
            Ok(CatalogReply::OutOfStock) => OrderOutcome::Rejected {
                book_id,
                reason: Rejection::OutOfStock,
            },
            Err(error) => OrderOutcome::Failed { book_id, error },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_confirmed_carries_book_details() {
        let book = Book::new(BookId(3), "Dune", "Herbert", 0, 9.99, "fiction");
        let outcome = PurchaseIntent::new(BookId(3))
            .forward()
            .resolve(Ok(CatalogReply::Purchased(book)));

        assert_eq!(
            outcome,
            OrderOutcome::Confirmed(OrderConfirmation {
                book_id: BookId(3),
                title: "Dune".into(),
                price: 9.99,
                remaining: 0,
            })
        );
    }

    #[test]
    fn test_rejections_and_failures_stay_apart() {
        let rejected = PurchaseIntent::new(BookId(1))
            .forward()
            .resolve(Ok(CatalogReply::OutOfStock));
        assert!(matches!(
            rejected,
            OrderOutcome::Rejected {
                reason: Rejection::OutOfStock,
                ..
            }
        ));

        let failed = PurchaseIntent::new(BookId(1))
            .forward()
            .resolve(Err(GatewayError::Timeout(Duration::from_millis(5))));
        assert!(matches!(failed, OrderOutcome::Failed { .. }));
    }
}
