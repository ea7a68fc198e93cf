//! # Catalog Service
//!
//! HTTP front of the book store. Handlers are stateless: every request is translated into a
//! [`BookClient`](crate::clients::BookClient) call through [`CatalogService`], and every
//! failure is rendered as an [`ErrorBody`](dto::ErrorBody) with a status from
//! [`CatalogError::status`].
//!
//! - [`dto`] - request and response bodies
//! - [`error`] - [`CatalogError`] and its HTTP mapping
//! - [`service`] - [`CatalogService`], the operations themselves
//! - [`routes`] - the axum [`Router`](axum::Router)

pub mod dto;
pub mod error;
pub mod routes;
pub mod service;

pub use error::CatalogError;
pub use routes::router;
pub use service::CatalogService;

use crate::catalog_actor;
use crate::clients::BookClient;
use crate::config::CatalogConfig;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

impl CatalogService {
    /// Builds a service over a fresh, empty book store.
    pub fn from_config(config: &CatalogConfig) -> Self {
        let books = BookClient::new(catalog_actor::new(config.mailbox_size));
        Self::new(books, config.topic_match)
    }
}

/// Serves the catalog on `listener` until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    service: CatalogService,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, "Catalog service listening");
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!(%addr, "Catalog service stopped");
    Ok(())
}
