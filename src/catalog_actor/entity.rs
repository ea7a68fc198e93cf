//! ActorEntity trait implementation for the Book domain type.
//!
//! This is where the catalog's record-level rules live: what a valid book looks like,
//! which fields an update may touch, and the check-and-decrement behind a purchase.

use super::actions::{BookAction, BookActionResult};
use super::error::BookError;
use crate::model::{Book, BookCreate, BookId, BookUpdate};
use record_actor::ActorEntity;

fn validate_price(price: f64) -> Result<f64, BookError> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(BookError::Invalid(format!(
            "price must be a non-negative number, got {price}"
        )))
    }
}

impl ActorEntity for Book {
    type Id = BookId;
    type Create = BookCreate;
    type Update = BookUpdate;
    type Action = BookAction;
    type ActionResult = BookActionResult;
    type Error = BookError;

    /// Creates a new Book from creation parameters.
    fn from_create_params(id: BookId, params: BookCreate) -> Result<Self, Self::Error> {
        if params.title.trim().is_empty() {
            return Err(BookError::Invalid("title must not be empty".into()));
        }
        if params.author.trim().is_empty() {
            return Err(BookError::Invalid("author must not be empty".into()));
        }
        let price = validate_price(params.price)?;
        Ok(Self::new(
            id,
            params.title,
            params.author,
            params.quantity,
            price,
            params.topic,
        ))
    }

    /// Titles are unique across the catalog.
    fn unique_key(&self) -> Option<String> {
        Some(self.title.clone())
    }

    /// Handles updates to the Book entity.
    ///
    /// # Fields Updated
    /// - `price`: unit price
    /// - `quantity`: copies in stock
    fn on_update(&mut self, update: BookUpdate) -> Result<(), Self::Error> {
        if let Some(price) = update.price {
            self.price = validate_price(price)?;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        Ok(())
    }

    /// Handles custom actions for the Book entity.
    ///
    /// # Actions
    /// - `Decrement`: takes one copy out of stock, or fails with `OutOfStock` at zero
    fn handle_action(&mut self, action: BookAction) -> Result<BookActionResult, Self::Error> {
        match action {
            BookAction::Decrement => {
                if self.quantity == 0 {
                    return Err(BookError::OutOfStock(self.id));
                }
                self.quantity -= 1;
                Ok(BookActionResult::Decrement(self.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> BookCreate {
        BookCreate {
            title: "Dune".into(),
            author: "Herbert".into(),
            quantity: 1,
            price: 9.99,
            topic: "fiction".into(),
        }
    }

    #[test]
    fn test_create_keeps_fields_verbatim() {
        let book = Book::from_create_params(BookId(1), dune()).unwrap();
        assert_eq!(
            book,
            Book::new(BookId(1), "Dune", "Herbert", 1, 9.99, "fiction")
        );
        assert_eq!(book.unique_key().as_deref(), Some("Dune"));
    }

    #[test]
    fn test_create_rejects_bad_fields() {
        let mut params = dune();
        params.title = "  ".into();
        assert!(matches!(
            Book::from_create_params(BookId(1), params),
            Err(BookError::Invalid(_))
        ));

        let mut params = dune();
        params.author = String::new();
        assert!(matches!(
            Book::from_create_params(BookId(1), params),
            Err(BookError::Invalid(_))
        ));

        let mut params = dune();
        params.price = -1.0;
        assert!(matches!(
            Book::from_create_params(BookId(1), params),
            Err(BookError::Invalid(_))
        ));

        let mut params = dune();
        params.price = f64::NAN;
        assert!(Book::from_create_params(BookId(1), params).is_err());
    }

    #[test]
    fn test_update_touches_only_present_fields() {
        let mut book = Book::from_create_params(BookId(1), dune()).unwrap();

        book.on_update(BookUpdate {
            price: None,
            quantity: Some(7),
        })
        .unwrap();
        assert_eq!(book.quantity, 7);
        assert_eq!(book.price, 9.99);

        book.on_update(BookUpdate {
            price: Some(12.5),
            quantity: None,
        })
        .unwrap();
        assert_eq!(book.quantity, 7);
        assert_eq!(book.price, 12.5);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.topic, "fiction");
    }

    #[test]
    fn test_decrement_stops_at_zero() {
        let mut book = Book::from_create_params(BookId(4), dune()).unwrap();

        match book.handle_action(BookAction::Decrement).unwrap() {
            BookActionResult::Decrement(after) => assert_eq!(after.quantity, 0),
        }
        assert_eq!(
            book.handle_action(BookAction::Decrement).unwrap_err(),
            BookError::OutOfStock(BookId(4))
        );
        assert_eq!(book.quantity, 0);
    }
}
