//! Type-safe wrappers around [`ResourceClient`](record_actor::ResourceClient).

pub mod book_client;

pub use book_client::*;
