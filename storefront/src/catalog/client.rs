//! HTTP client for the Fake Store catalog API

use super::{CatalogError, ProductCatalog};
use crate::types::Product;
use futures::future::BoxFuture;
use reqwest::{Client, header};
use std::time::Duration;

/// Catalog client that fetches the listing over HTTP
#[derive(Clone, Debug)]
pub struct HttpCatalog {
    client: Client,
    url: String,
}

impl HttpCatalog {
    /// Create a client for the given endpoint
    ///
    /// `timeout` bounds the whole request, connect through body.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Client`] if the TLS backend cannot be initialized.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Endpoint this client fetches from
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the listing
    ///
    /// # Errors
    ///
    /// See [`ProductCatalog::fetch_products`].
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    pub async fn get_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .client
            .get(&self.url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        let products = decode_products(&body)?;
        tracing::debug!(count = products.len(), "Fetched products");
        Ok(products)
    }
}

impl ProductCatalog for HttpCatalog {
    fn fetch_products(&self) -> BoxFuture<'_, Result<Vec<Product>, CatalogError>> {
        Box::pin(self.get_products())
    }
}

/// Decode a catalog response body
///
/// # Errors
///
/// Returns [`CatalogError::Decode`] if the body is not a JSON array of products.
pub fn decode_products(body: &str) -> Result<Vec<Product>, CatalogError> {
    serde_json::from_str(body).map_err(|e| CatalogError::Decode(e.to_string()))
}
