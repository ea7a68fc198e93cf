//! # Catalog Gateway
//!
//! The Order Service's only view of the catalog: one `purchase` call. [`HttpCatalogGateway`]
//! talks to a running Catalog Service over HTTP; tests substitute
//! [`MockCatalog`](super::mock::MockCatalog).

use crate::catalog::dto::{ErrorBody, PurchaseResponse};
use crate::config::OrderConfig;
use crate::model::{Book, BookId};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// A business answer from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogReply {
    Purchased(Book),
    NotFound,
    OutOfStock,
}

/// The catalog could not give a business answer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GatewayError {
    #[error("Catalog service unreachable: {0}")]
    Unreachable(String),

    #[error("Catalog service did not answer within {0:?}")]
    Timeout(Duration),

    #[error("Unexpected response from catalog service: {0}")]
    BadResponse(String),
}

#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Asks the catalog to sell one copy of `id`.
    async fn purchase(&self, id: BookId) -> Result<CatalogReply, GatewayError>;
}

/// [`CatalogGateway`] over HTTP with a bounded per-request timeout.
pub struct HttpCatalogGateway {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpCatalogGateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn from_config(config: &OrderConfig) -> reqwest::Result<Self> {
        Self::new(config.catalog_url.clone(), config.catalog_timeout())
    }

    fn classify(&self, err: reqwest::Error) -> GatewayError {
        if err.is_timeout() {
            GatewayError::Timeout(self.timeout)
        } else if err.is_decode() {
            GatewayError::BadResponse(err.to_string())
        } else {
            GatewayError::Unreachable(err.to_string())
        }
    }

    /// Reads the error body and checks it carries `expected`. Anything else means the peer is
    /// not a catalog speaking this protocol.
    async fn expect_error_code(
        &self,
        response: Response,
        expected: &str,
    ) -> Result<(), GatewayError> {
        let status = response.status();
        match response.json::<ErrorBody>().await {
            Ok(body) if body.error == expected => Ok(()),
            Ok(body) => Err(GatewayError::BadResponse(format!(
                "{status} with error code '{}'",
                body.error
            ))),
            Err(e) if e.is_timeout() => Err(GatewayError::Timeout(self.timeout)),
            Err(_) => Err(GatewayError::BadResponse(format!(
                "{status} without an error body"
            ))),
        }
    }
}

#[async_trait]
impl CatalogGateway for HttpCatalogGateway {
    #[instrument(skip(self))]
    async fn purchase(&self, id: BookId) -> Result<CatalogReply, GatewayError> {
        let url = format!("{}/purchase/{}", self.base_url, id);
        debug!(%url, "Forwarding purchase");

        let response = self.http.put(&url).send().await.map_err(|e| {
            let err = self.classify(e);
            warn!(error = %err, "Catalog call failed");
            err
        })?;

        match response.status() {
            StatusCode::OK => {
                let body: PurchaseResponse =
                    response.json().await.map_err(|e| self.classify(e))?;
                Ok(CatalogReply::Purchased(body.book))
            }
            StatusCode::NOT_FOUND => {
                self.expect_error_code(response, "not_found").await?;
                Ok(CatalogReply::NotFound)
            }
            StatusCode::BAD_REQUEST => {
                self.expect_error_code(response, "out_of_stock").await?;
                Ok(CatalogReply::OutOfStock)
            }
            other => {
                warn!(status = %other, "Unexpected catalog status");
                Err(GatewayError::BadResponse(format!("status {other}")))
            }
        }
    }
}
