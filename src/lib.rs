//! # Bookstore
//!
//! > **Two small HTTP services over an actor-backed inventory.**
//!
//! The **Catalog Service** stores books and sells copies; the **Order Service** accepts
//! purchase requests and forwards each one to the catalog. Inventory lives only in the
//! catalog process.
//!
//! ## 🏗️ Design
//!
//! ### One actor per book
//! Every [`Book`](model::Book) is owned by its own [`RecordActor`](record_actor::RecordActor)
//! from the `record-actor` crate. Mutations of one book are serialized through its mailbox,
//! so the check-and-decrement behind a purchase can never oversell. Mutations of different
//! books run in parallel, and reads take the last committed snapshot without queuing.
//!
//! ### Typed errors at every layer
//! [`FrameworkError`](record_actor::FrameworkError) in the engine,
//! [`BookError`](catalog_actor::BookError) in the store,
//! [`CatalogError`](catalog::CatalogError) and [`OrderError`](order::OrderError) at the HTTP
//! surfaces. Only the last two know about status codes.
//!
//! ### Rejections are not failures
//! "Out of stock" and "no such book" are answers. "The catalog did not answer" is a failure,
//! and the Order Service reports it as 502 or 504, never as a business outcome.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Store ([`catalog_actor`], [`clients`], [`model`])
//! - **Role**: the Inventory Store. [`BookClient`](clients::BookClient) wraps the generic
//!   `ResourceClient<Book>` with book-specific operations.
//!
//! ### 2. The Services ([`catalog`], [`order`])
//! - **Role**: axum routers, request validation, error-to-status mapping, and the
//!   [`CatalogGateway`](order::CatalogGateway) seam between the two services.
//!
//! ### 3. The Orchestrator ([`lifecycle`], [`config`])
//! - **Role**: command-line configuration, tracing setup, and
//!   [`BookstoreSystem`](lifecycle::BookstoreSystem), which runs both services and shuts
//!   them down.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Both services on their default ports
//! RUST_LOG=info cargo run -- all
//!
//! # Add a book, then buy it through the Order Service
//! curl -X POST localhost:5100/books -H 'content-type: application/json' \
//!      -d '{"title":"Dune","author":"Herbert","quantity":1,"price":9.99,"topic":"fiction"}'
//! curl -X PUT localhost:5200/purchase/1
//! ```

pub mod catalog;
pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order;
