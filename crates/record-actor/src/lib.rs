//! # Record Actor
//!
//! Building blocks for keeping a collection of stateful records where every record is owned
//! by its own Tokio task. It keeps the **Resource-Oriented** surface of a CRUD store (create,
//! get, list, update, delete, plus custom actions) and puts an **actor per record** behind it.
//!
//! ## Why one actor per record?
//!
//! - Mutations of the same record are serialized by the record's mailbox, so a
//!   check-then-modify written as an ordinary `&mut self` method is atomic.
//! - Mutations of different records run on different tasks and never contend.
//! - Readers never enter a mailbox: each actor publishes its committed state on a
//!   `watch` channel and reads copy the latest snapshot.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - your record type and its business rules
//! 2. **Runtime Layer** ([`RecordActor`]) - one task per record, sequential message processing
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed, cloneable access
//!
//! ## Example
//!
//! ```rust
//! use record_actor::{ActorEntity, ResourceClient};
//!
//! #[derive(Clone, Debug)]
//! struct Seat { id: u32, free: u32 }
//! #[derive(Debug)] struct SeatCreate { free: u32 }
//! #[derive(Debug)] struct SeatUpdate { free: Option<u32> }
//! #[derive(Debug)] enum SeatAction { Reserve }
//! #[derive(Debug, thiserror::Error)]
//! #[error("no seats left")]
//! struct SoldOut;
//!
//! impl ActorEntity for Seat {
//!     type Id = u32;
//!     type Create = SeatCreate;
//!     type Update = SeatUpdate;
//!     type Action = SeatAction;
//!     type ActionResult = u32;
//!     type Error = SoldOut;
//!
//!     fn from_create_params(id: u32, params: SeatCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, free: params.free })
//!     }
//!     fn on_update(&mut self, update: SeatUpdate) -> Result<(), Self::Error> {
//!         if let Some(free) = update.free { self.free = free; }
//!         Ok(())
//!     }
//!     fn handle_action(&mut self, action: SeatAction) -> Result<u32, Self::Error> {
//!         match action {
//!             SeatAction::Reserve if self.free > 0 => { self.free -= 1; Ok(self.free) }
//!             SeatAction::Reserve => Err(SoldOut),
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let seats = ResourceClient::<Seat>::new(16);
//!     let id = seats.create(SeatCreate { free: 1 }).await.unwrap();
//!
//!     assert_eq!(seats.perform_action(id, SeatAction::Reserve).await.unwrap(), 0);
//!     assert!(seats.perform_action(id, SeatAction::Reserve).await.is_err());
//!     assert_eq!(seats.get(id).await.unwrap().unwrap().free, 0);
//! }
//! ```

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;

// Re-export core types for convenience
pub use actor::{RecordActor, RecordHandle};
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{RecordRequest, Response};
