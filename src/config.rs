//! # Configuration
//!
//! Command-line arguments for both services. Every flag can also be set through a
//! `BOOKSTORE_*` environment variable, and every struct has a `Default` that matches the
//! command-line defaults so tests and embedders can build one without parsing anything.

use clap::builder::RangedU64ValueParser;
use clap::{Args, ValueEnum};
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_CATALOG_ADDR: &str = "127.0.0.1:5100";
pub const DEFAULT_ORDER_ADDR: &str = "127.0.0.1:5200";
pub const DEFAULT_CATALOG_URL: &str = "http://127.0.0.1:5100";
pub const DEFAULT_CATALOG_TIMEOUT_MS: u64 = 2_000;
pub const DEFAULT_MAILBOX_SIZE: usize = 32;

/// How `GET /search/{topic}` compares a book's topic with the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TopicMatch {
    /// Whole string, case-sensitive.
    #[default]
    Exact,
    /// Whole string, ignoring case.
    CaseInsensitive,
    /// The topic starts with the query (case-sensitive).
    Prefix,
}

impl TopicMatch {
    pub fn matches(self, topic: &str, query: &str) -> bool {
        match self {
            TopicMatch::Exact => topic == query,
            TopicMatch::CaseInsensitive => topic.to_lowercase() == query.to_lowercase(),
            TopicMatch::Prefix => topic.starts_with(query),
        }
    }
}

/// Settings for the Catalog Service.
#[derive(Debug, Clone, Args)]
pub struct CatalogConfig {
    /// Address the catalog HTTP server binds to.
    #[arg(
        id = "catalog_bind",
        long = "catalog-bind",
        env = "BOOKSTORE_CATALOG_BIND",
        default_value = DEFAULT_CATALOG_ADDR
    )]
    pub bind: SocketAddr,

    /// Topic search policy.
    #[arg(
        long,
        env = "BOOKSTORE_TOPIC_MATCH",
        value_enum,
        default_value_t = TopicMatch::Exact
    )]
    pub topic_match: TopicMatch,

    /// Mailbox capacity of each book's actor. Must be at least 1.
    #[arg(
        long,
        env = "BOOKSTORE_MAILBOX_SIZE",
        default_value_t = DEFAULT_MAILBOX_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub mailbox_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5100)),
            topic_match: TopicMatch::default(),
            mailbox_size: DEFAULT_MAILBOX_SIZE,
        }
    }
}

/// Settings for the Order Service.
#[derive(Debug, Clone, Args)]
pub struct OrderConfig {
    /// Address the order HTTP server binds to.
    #[arg(
        id = "order_bind",
        long = "order-bind",
        env = "BOOKSTORE_ORDER_BIND",
        default_value = DEFAULT_ORDER_ADDR
    )]
    pub bind: SocketAddr,

    /// Base URL of the Catalog Service.
    #[arg(long, env = "BOOKSTORE_CATALOG_URL", default_value = DEFAULT_CATALOG_URL)]
    pub catalog_url: String,

    /// Upper bound on one purchase call to the catalog, in milliseconds.
    #[arg(
        long,
        env = "BOOKSTORE_CATALOG_TIMEOUT_MS",
        default_value_t = DEFAULT_CATALOG_TIMEOUT_MS
    )]
    pub catalog_timeout_ms: u64,
}

impl OrderConfig {
    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_millis(self.catalog_timeout_ms)
    }
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5200)),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            catalog_timeout_ms: DEFAULT_CATALOG_TIMEOUT_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        catalog: CatalogConfig,
        #[command(flatten)]
        order: OrderConfig,
    }

    #[test]
    fn test_topic_match_policies() {
        assert!(TopicMatch::Exact.matches("fiction", "fiction"));
        assert!(!TopicMatch::Exact.matches("Fiction", "fiction"));
        assert!(TopicMatch::CaseInsensitive.matches("Fiction", "fiction"));
        assert!(TopicMatch::Prefix.matches("fiction-classic", "fiction"));
        assert!(!TopicMatch::Prefix.matches("science fiction", "fiction"));
    }

    #[test]
    fn test_cli_defaults_match_default_impls() {
        let cli = Cli::try_parse_from(["bookstore"]).unwrap();
        let catalog = CatalogConfig::default();
        let order = OrderConfig::default();

        assert_eq!(cli.catalog.bind, catalog.bind);
        assert_eq!(cli.catalog.topic_match, catalog.topic_match);
        assert_eq!(cli.catalog.mailbox_size, catalog.mailbox_size);
        assert_eq!(cli.order.bind, order.bind);
        assert_eq!(cli.order.catalog_url, order.catalog_url);
        assert_eq!(cli.order.catalog_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "bookstore",
            "--topic-match",
            "case-insensitive",
            "--catalog-timeout-ms",
            "250",
            "--order-bind",
            "0.0.0.0:9000",
        ])
        .unwrap();

        assert_eq!(cli.catalog.topic_match, TopicMatch::CaseInsensitive);
        assert_eq!(cli.order.catalog_timeout(), Duration::from_millis(250));
        assert_eq!(cli.order.bind, "0.0.0.0:9000".parse().unwrap());
    }

    #[test]
    fn test_zero_mailbox_size_is_rejected() {
        assert!(Cli::try_parse_from(["bookstore", "--mailbox-size", "0"]).is_err());

        let cli = Cli::try_parse_from(["bookstore", "--mailbox-size", "1"]).unwrap();
        assert_eq!(cli.catalog.mailbox_size, 1);
    }
}
