//! Custom actions for the Book actor.
//!
//! Domain-specific operations that go beyond CRUD and are handled by
//! [`ActorEntity::handle_action`](record_actor::ActorEntity::handle_action) while the record's
//! actor holds exclusive access to the book.

/// Custom actions for Book entities.
#[derive(Debug, Clone)]
pub enum BookAction {
    /// Takes one copy out of stock.
    ///
    /// # Errors
    /// Fails with [`BookError::OutOfStock`](super::BookError::OutOfStock) when the quantity
    /// is already zero; the record is left unchanged.
    Decrement,
}

/// Results from BookActions - variants match 1:1 with BookAction
#[derive(Debug, Clone)]
pub enum BookActionResult {
    /// The book as committed after the decrement.
    Decrement(crate::model::Book),
}
