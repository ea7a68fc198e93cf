//! Process wiring: tracing setup, standalone runners for each service, and
//! [`BookstoreSystem`] for running both together.

mod bookstore_system;
mod tracing;

pub use bookstore_system::*;
pub use self::tracing::setup_tracing;
