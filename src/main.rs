use bookstore::config::{CatalogConfig, OrderConfig};
use bookstore::lifecycle::{self, setup_tracing, BookstoreSystem};
use clap::{Parser, Subcommand};
use tracing::{error, info};

/// Catalog and order services for a small bookstore.
#[derive(Parser)]
#[command(name = "bookstore", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the Catalog Service.
    Catalog {
        #[command(flatten)]
        config: CatalogConfig,
    },
    /// Run the Order Service against an existing catalog.
    Order {
        #[command(flatten)]
        config: OrderConfig,
    },
    /// Run both services in one process.
    All {
        #[command(flatten)]
        catalog: CatalogConfig,
        #[command(flatten)]
        order: OrderConfig,
    },
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Catalog { config } => lifecycle::run_catalog(config).await,
        Command::Order { config } => lifecycle::run_order(config).await,
        Command::All { catalog, order } => {
            let system = BookstoreSystem::start(catalog, order)
                .await
                .map_err(|e| e.to_string())?;
            info!(
                catalog = %system.catalog_url(),
                order = %system.order_url(),
                "Press Ctrl-C to stop"
            );
            return system.run_until(lifecycle::shutdown_signal()).await;
        }
    };

    result.map_err(|e| {
        error!(error = %e, "Service stopped with an error");
        e.to_string()
    })
}
