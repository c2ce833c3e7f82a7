//! Error types for the product catalog client

use thiserror::Error;

/// Errors that can occur when fetching the product listing
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    /// The request never produced a response (connection refused, timeout, ...)
    #[error("Request failed: {0}")]
    Request(String),

    /// The catalog answered with a non-success status
    #[error("Catalog returned status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// The body was not a JSON array of products
    #[error("Failed to decode product list: {0}")]
    Decode(String),
}
