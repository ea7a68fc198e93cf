//! # Order Service
//!
//! Accepts purchase requests and forwards each one to the catalog through a
//! [`CatalogGateway`]. The service never touches inventory itself.
//!
//! A request moves through [`PurchaseIntent`] and [`ForwardedIntent`] to an
//! [`OrderOutcome`]. Business rejections (unknown book, out of stock) and catalog failures
//! (unreachable, timeout, garbage) stay distinct all the way to the HTTP status code.

pub mod error;
pub mod gateway;
pub mod intent;
pub mod mock;
pub mod routes;
pub mod service;

pub use error::OrderError;
pub use gateway::{CatalogGateway, CatalogReply, GatewayError, HttpCatalogGateway};
pub use intent::{ForwardedIntent, OrderConfirmation, OrderOutcome, PurchaseIntent, Rejection};
pub use routes::router;
pub use service::OrderService;

use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

/// Serves the Order Service on `listener` until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    service: OrderService,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, "Order service listening");
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!(%addr, "Order service stopped");
    Ok(())
}
