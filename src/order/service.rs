//! Orchestration of a purchase against the catalog.

use super::error::OrderError;
use super::gateway::CatalogGateway;
use super::intent::{OrderConfirmation, OrderOutcome, PurchaseIntent};
use crate::model::BookId;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Holds no inventory; every order is a single forward to the catalog.
#[derive(Clone)]
pub struct OrderService {
    catalog: Arc<dyn CatalogGateway>,
}

impl OrderService {
    pub fn new(catalog: impl CatalogGateway + 'static) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Runs one intent to its terminal state. The catalog is asked exactly once.
    #[instrument(skip(self, intent), fields(book_id = %intent.book_id()))]
    pub async fn process(&self, intent: PurchaseIntent) -> OrderOutcome {
        let forwarded = intent.forward();
        let reply = self.catalog.purchase(forwarded.book_id()).await;
        let outcome = forwarded.resolve(reply);

        match &outcome {
            OrderOutcome::Confirmed(order) => {
                info!(remaining = order.remaining, "Order confirmed")
            }
            OrderOutcome::Rejected { reason, .. } => warn!(?reason, "Order rejected"),
            OrderOutcome::Failed { error, .. } => error!(%error, "Order failed"),
        }
        outcome
    }

    pub async fn place_order(&self, book_id: BookId) -> Result<OrderConfirmation, OrderError> {
        self.process(PurchaseIntent::new(book_id))
            .await
            .into_result()
    }
}
