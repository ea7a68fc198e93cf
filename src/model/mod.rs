//! Plain data types for the catalog. [`Book`] implements
//! [`ActorEntity`](record_actor::ActorEntity) in [`crate::catalog_actor`].

pub mod book;

pub use book::*;
