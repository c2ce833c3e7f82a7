//! Product listing: the catalog client and the reducer behind the product page.
//!
//! The listing is fetched once per `Load` with a single GET. There is no
//! retry and no caching; a failed fetch leaves the page with an error message
//! and no products.

mod client;
mod error;

pub use client::{HttpCatalog, decode_products};
pub use error::CatalogError;

use crate::types::{Product, ProductId};
use fake_store_core::{SmallVec, async_effect, effect::Effect, reducer::Reducer, smallvec};
use futures::future::BoxFuture;
use std::sync::Arc;

/// Source of the product listing
///
/// Returns a `BoxFuture` instead of being an async fn so the trait stays
/// object safe and can be injected as `Arc<dyn ProductCatalog>`.
pub trait ProductCatalog: Send + Sync {
    /// Fetch every product in the catalog
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the request fails, the catalog answers
    /// with a non-success status, or the body is not a product list.
    fn fetch_products(&self) -> BoxFuture<'_, Result<Vec<Product>, CatalogError>>;
}

/// Environment for the catalog reducer
#[derive(Clone)]
pub struct CatalogEnvironment {
    /// Where products come from
    pub catalog: Arc<dyn ProductCatalog>,
}

impl CatalogEnvironment {
    /// Creates a new `CatalogEnvironment`
    #[must_use]
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { catalog }
    }
}

impl std::fmt::Debug for CatalogEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogEnvironment").finish_non_exhaustive()
    }
}

/// State of the product page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogState {
    /// Products from the last successful fetch
    pub products: Vec<Product>,
    /// A fetch is in flight
    pub loading: bool,
    /// Message from the last failed fetch
    pub error: Option<String>,
}

impl CatalogState {
    /// Product with the given id, if it is in the listing
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }
}

/// Actions for the product page
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogAction {
    /// Start fetching the listing
    Load,
    /// The fetch succeeded
    Loaded {
        /// Every product the catalog returned
        products: Vec<Product>,
    },
    /// The fetch failed
    Failed {
        /// Human-readable reason
        message: String,
    },
}

/// Reducer for the product page
#[derive(Clone, Copy, Debug, Default)]
pub struct CatalogReducer;

impl CatalogReducer {
    /// Creates a new `CatalogReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Action = CatalogAction;
    type Environment = CatalogEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CatalogAction::Load => {
                if state.loading {
                    tracing::debug!("Product fetch already in flight");
                    return SmallVec::new();
                }

                state.loading = true;
                state.error = None;

                let catalog = Arc::clone(&env.catalog);
                smallvec![async_effect! {
                    match catalog.fetch_products().await {
                        Ok(products) => Some(CatalogAction::Loaded { products }),
                        Err(error) => Some(CatalogAction::Failed {
                            message: error.to_string(),
                        }),
                    }
                }]
            },
            CatalogAction::Loaded { products } => {
                tracing::info!(count = products.len(), "Products loaded");
                state.products = products;
                state.loading = false;
                state.error = None;
                SmallVec::new()
            },
            CatalogAction::Failed { message } => {
                tracing::warn!(%message, "Product fetch failed");
                state.products.clear();
                state.loading = false;
                state.error = Some(message);
                SmallVec::new()
            },
        }
    }
}
