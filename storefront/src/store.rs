//! The cart handle views talk to.
//!
//! `CartStore` wraps a [`Store`] running the [`CartReducer`]. It is created
//! once by the application and cloned into whatever needs the cart; every
//! clone sees the same cart.

use crate::reducer::{CartEnvironment, CartReducer};
use crate::totals::{CartSummary, order_totals};
use crate::types::{CartAction, CartState, Product, ProductId};
use fake_store_runtime::{Store, StoreError};
use std::time::Duration;

/// Store running the cart reducer
pub type CartRuntime = Store<CartState, CartAction, CartEnvironment, CartReducer>;

/// Shared handle to the shopping cart
#[derive(Clone)]
pub struct CartStore {
    store: CartRuntime,
}

impl CartStore {
    /// Creates a handle to a new, empty cart
    #[must_use]
    pub fn new() -> Self {
        Self::with_cart(CartState::new())
    }

    /// Creates a handle to a cart with the given contents
    #[must_use]
    pub fn with_cart(cart: CartState) -> Self {
        Self {
            store: Store::new(cart, CartReducer::new(), CartEnvironment),
        }
    }

    /// Apply an action to the cart
    ///
    /// Cart actions cannot fail. The only error the store can report is that
    /// it is shutting down, in which case the action is dropped and logged.
    pub async fn dispatch(&self, action: CartAction) {
        let name = action.name();
        match self.store.send(action).await {
            Ok(_) => tracing::debug!(action = name, "Cart updated"),
            Err(error) => {
                tracing::error!(%error, action = name, "Cart action dropped");
            },
        }
    }

    /// Put a product in the cart (no-op if it is already there)
    pub async fn add_to_cart(&self, product: Product) {
        self.dispatch(CartAction::Add { product }).await;
    }

    /// Take a product out of the cart
    pub async fn remove_from_cart(&self, id: ProductId) {
        self.dispatch(CartAction::Remove { id }).await;
    }

    /// Add one to a product's quantity
    pub async fn increase_quantity(&self, id: ProductId) {
        self.dispatch(CartAction::Increase { id }).await;
    }

    /// Subtract one from a product's quantity, stopping at 1
    pub async fn decrease_quantity(&self, id: ProductId) {
        self.dispatch(CartAction::Decrease { id }).await;
    }

    /// Empty the cart
    pub async fn clear_cart(&self) {
        self.dispatch(CartAction::Clear).await;
    }

    /// Snapshot of the cart
    pub async fn cart(&self) -> CartState {
        self.store.state(Clone::clone).await
    }

    /// Whether the product is in the cart
    pub async fn contains(&self, id: ProductId) -> bool {
        self.store.state(|cart| cart.contains(id)).await
    }

    /// Number of distinct products in the cart
    pub async fn item_count(&self) -> usize {
        self.store.state(CartState::item_count).await
    }

    /// Subtotal, discount and total of the current cart
    pub async fn totals(&self) -> CartSummary {
        self.store.state(order_totals).await
    }

    /// Stop accepting cart actions
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownTimeout`] if effects are still running
    /// when the timeout expires. The cart reducer starts none, so this only
    /// happens if the runtime is wedged.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        self.store.shutdown(timeout).await
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("shutting_down", &self.store.is_shutting_down())
            .finish_non_exhaustive()
    }
}
