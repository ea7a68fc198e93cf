//! # Book Actor
//!
//! The Inventory Store: every [`Book`] is owned by its own record actor, and the
//! [`ResourceClient`] index maps ids to those actors.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](record_actor::ActorEntity) implementation for [`Book`]
//! - [`error`] - [`BookError`] type for type-safe error handling
//! - [`actions`] - [`BookAction`] and [`BookActionResult`] for stock management
//! - [`new()`] - Factory function that creates the store
//!
//! ## Usage
//!
//! ```rust
//! use bookstore::catalog_actor;
//! use bookstore::clients::BookClient;
//! use bookstore::model::BookCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BookClient::new(catalog_actor::new(32));
//!
//!     let id = client
//!         .create_book(BookCreate {
//!             title: "Dune".to_string(),
//!             author: "Herbert".to_string(),
//!             quantity: 1,
//!             price: 9.99,
//!             topic: "fiction".to_string(),
//!         })
//!         .await?;
//!
//!     let book = client.decrement(id).await?;
//!     assert_eq!(book.quantity, 0);
//!     assert!(client.decrement(id).await.is_err());
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Book;
use record_actor::ResourceClient;

/// Creates an empty book store whose record actors use `mailbox_size` slots each.
pub fn new(mailbox_size: usize) -> ResourceClient<Book> {
    ResourceClient::new(mailbox_size)
}
