//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `fmt` subscriber filtered by `RUST_LOG`.
//!
//! Module paths are hidden (`with_target(false)`); log lines identify their source through
//! structured fields instead: `entity_type` and `id` from the record actors, `book_id` from
//! the Order Service, and the request span that `TraceLayer` opens for every HTTP call.
//!
//! ```bash
//! # Startup, purchases and failures
//! RUST_LOG=info bookstore all
//!
//! # Every store operation with its payload
//! RUST_LOG=debug bookstore catalog
//!
//! # HTTP request/response spans only
//! RUST_LOG=warn,tower_http=debug bookstore order
//! ```
//!
//! With `RUST_LOG=info`, a purchase through the Order Service reads:
//!
//! ```text
//! INFO Catalog service listening addr=127.0.0.1:5100
//! INFO Order service listening addr=127.0.0.1:5200
//! INFO purchase_book: Action ok entity_type="Book" id=1
//! INFO purchase_book: Purchase confirmed id=1 remaining=0
//! INFO process: Order confirmed book_id=1 remaining=0
//! ```

/// Installs the global subscriber. Calling it twice is harmless; the second call is ignored.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init();
}
