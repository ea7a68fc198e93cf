use crate::catalog::{self, CatalogService};
use crate::catalog_actor;
use crate::clients::BookClient;
use crate::config::{CatalogConfig, OrderConfig};
use crate::order::{self, HttpCatalogGateway, OrderService};
use std::future::Future;
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Errors raised while bringing a service up.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build catalog HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

async fn bind(addr: SocketAddr) -> Result<(TcpListener, SocketAddr), SystemError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| SystemError::Bind { addr, source })?;
    let local = listener.local_addr()?;
    Ok((listener, local))
}

/// Resolves on Ctrl-C. If the signal handler cannot be installed it never resolves.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => {
            error!(error = %e, "Unable to listen for Ctrl-C");
            std::future::pending::<()>().await
        }
    }
}

/// Runs the Catalog Service alone until Ctrl-C.
pub async fn run_catalog(config: CatalogConfig) -> Result<(), SystemError> {
    let (listener, _) = bind(config.bind).await?;
    let service = CatalogService::from_config(&config);
    catalog::serve(listener, service, shutdown_signal()).await?;
    Ok(())
}

/// Runs the Order Service alone until Ctrl-C.
pub async fn run_order(config: OrderConfig) -> Result<(), SystemError> {
    let gateway = HttpCatalogGateway::from_config(&config)?;
    let (listener, _) = bind(config.bind).await?;
    info!(catalog_url = %config.catalog_url, "Forwarding purchases");
    order::serve(listener, OrderService::new(gateway), shutdown_signal()).await?;
    Ok(())
}

/// One running server task and the signal that stops it.
struct Server {
    name: &'static str,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<std::io::Result<()>>,
}

impl Server {
    fn spawn<S>(name: &'static str, serve: impl FnOnce(oneshot::Receiver<()>) -> S) -> Self
    where
        S: Future<Output = std::io::Result<()>> + Send + 'static,
    {
        let (shutdown, signal) = oneshot::channel();
        Self {
            name,
            shutdown,
            handle: tokio::spawn(serve(signal)),
        }
    }

    async fn stop(self) -> Result<(), String> {
        let _ = self.shutdown.send(());
        match self.handle.await {
            Ok(Ok(())) => Ok(()),
            other => Err(exit_error(self.name, other)),
        }
    }
}

/// Describes a server task that ended, whether or not it was asked to.
fn exit_error(name: &str, exit: Result<std::io::Result<()>, JoinError>) -> String {
    let message = match exit {
        Ok(Ok(())) => format!("{name} server stopped unexpectedly"),
        Ok(Err(e)) => format!("{name} server failed: {e}"),
        Err(e) => format!("{name} server task failed: {e:?}"),
    };
    error!("{message}");
    message
}

/// Both services in one process, wired together.
///
/// `BookstoreSystem` is responsible for:
/// - **Lifecycle Management**: binding both listeners and serving them on their own tasks
/// - **Dependency Wiring**: pointing the Order Service at the address the catalog actually
///   bound, so `127.0.0.1:0` works for either side
/// - **Graceful Shutdown**: stopping the order side first, then the catalog
///
/// # Example
///
/// ```rust,no_run
/// use bookstore::config::{CatalogConfig, OrderConfig};
/// use bookstore::lifecycle::BookstoreSystem;
///
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let system = BookstoreSystem::start(CatalogConfig::default(), OrderConfig::default()).await?;
/// println!("catalog on {}, orders on {}", system.catalog_addr, system.order_addr);
/// system.shutdown().await?;
/// # Ok(())
/// # }
/// ```
pub struct BookstoreSystem {
    pub catalog_addr: SocketAddr,
    pub order_addr: SocketAddr,

    /// Direct handle on the book store, e.g. for seeding.
    pub books: BookClient,

    order: Server,
    catalog: Server,
}

impl BookstoreSystem {
    /// Binds both services and starts serving. `order.catalog_url` is replaced by the
    /// catalog's bound address.
    pub async fn start(
        catalog: CatalogConfig,
        mut order: OrderConfig,
    ) -> Result<Self, SystemError> {
        let (catalog_listener, catalog_addr) = bind(catalog.bind).await?;
        let (order_listener, order_addr) = bind(order.bind).await?;
        order.catalog_url = format!("http://{catalog_addr}");

        let books = BookClient::new(catalog_actor::new(catalog.mailbox_size));
        let catalog_service = CatalogService::new(books.clone(), catalog.topic_match);
        let order_service = OrderService::new(HttpCatalogGateway::from_config(&order)?);

        let order = Server::spawn("order", |signal| {
            order::serve(order_listener, order_service, async move {
                let _ = signal.await;
            })
        });
        let catalog = Server::spawn("catalog", |signal| {
            catalog::serve(catalog_listener, catalog_service, async move {
                let _ = signal.await;
            })
        });

        info!(%catalog_addr, %order_addr, "Bookstore started");
        Ok(Self {
            catalog_addr,
            order_addr,
            books,
            order,
            catalog,
        })
    }

    pub fn catalog_url(&self) -> String {
        format!("http://{}", self.catalog_addr)
    }

    pub fn order_url(&self) -> String {
        format!("http://{}", self.order_addr)
    }

    /// Serves until `signal` resolves, then shuts down.
    ///
    /// If either server ends first, the other is stopped at once and the first one's exit
    /// is returned as the error.
    pub async fn run_until<F>(mut self, signal: F) -> Result<(), String>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            () = signal => self.shutdown().await,
            exit = &mut self.order.handle => {
                let err = exit_error(self.order.name, exit);
                let _ = self.catalog.stop().await;
                Err(err)
            }
            exit = &mut self.catalog.handle => {
                let err = exit_error(self.catalog.name, exit);
                let _ = self.order.stop().await;
                Err(err)
            }
        }
    }

    /// Signals both servers, then waits for each to drain its connections.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if both servers stopped cleanly
    /// - `Err(String)` with the first failure if a server failed or its task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down bookstore...");

        let order = self.order.stop().await;
        let catalog = self.catalog.stop().await;
        order.and(catalog)?;

        info!("Bookstore shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn local() -> (CatalogConfig, OrderConfig) {
        let catalog = CatalogConfig {
            bind: SocketAddr::from(([127, 0, 0, 1], 0)),
            ..CatalogConfig::default()
        };
        let order = OrderConfig {
            bind: SocketAddr::from(([127, 0, 0, 1], 0)),
            ..OrderConfig::default()
        };
        (catalog, order)
    }

    #[tokio::test]
    async fn test_run_until_signal_shuts_down_cleanly() {
        let (catalog, order) = local();
        let system = BookstoreSystem::start(catalog, order).await.unwrap();
        assert!(system.run_until(async {}).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_until_returns_when_a_server_fails() {
        let (catalog, order) = local();
        let mut system = BookstoreSystem::start(catalog, order).await.unwrap();

        // Swap in a catalog task that dies on its own.
        let healthy = std::mem::replace(
            &mut system.catalog,
            Server::spawn("catalog", |_signal| async {
                Err(std::io::Error::other("listener closed"))
            }),
        );
        healthy.stop().await.unwrap();

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            system.run_until(std::future::pending()),
        )
        .await
        .expect("failure was noticed without a shutdown signal");
        assert_eq!(result.unwrap_err(), "catalog server failed: listener closed");
    }
}
