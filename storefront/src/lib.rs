//! # Fake Store
//!
//! A terminal storefront for the Fake Store catalog API.
//!
//! It lists products fetched from the catalog, keeps a shopping cart and
//! computes order totals with a flat 10% discount.
//!
//! ## Architecture
//!
//! - [`reducer::CartReducer`]: the cart state machine. Five actions, all
//!   total, no effects.
//! - [`totals`]: subtotal, discount and total derived from a cart.
//! - [`store::CartStore`]: the shared handle views use to read and change the
//!   cart.
//! - [`catalog`]: the product listing, a reducer whose `Load` action returns
//!   an effect that calls the injected [`catalog::ProductCatalog`].
//! - [`views`], [`routes`], [`commands`], [`app`]: the terminal front-end.
//!
//! ## Example
//!
//! ```no_run
//! use fake_store::{CartStore, ProductId};
//!
//! # async fn example(cart: CartStore) {
//! cart.increase_quantity(ProductId::new(1)).await;
//! let summary = cart.totals().await;
//! println!("{}", fake_store::format_money(summary.totals().total));
//! # }
//! ```

pub mod app;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod reducer;
pub mod routes;
pub mod store;
pub mod totals;
pub mod types;
pub mod views;

pub use app::{Outcome, Storefront};
pub use catalog::{CatalogError, HttpCatalog, ProductCatalog};
pub use commands::{Command, CommandError};
pub use config::{ConfigError, StorefrontConfig};
pub use reducer::{CartEnvironment, CartReducer};
pub use routes::Route;
pub use store::CartStore;
pub use totals::{CartSummary, DISCOUNT_RATE, OrderTotals, format_money, order_totals};
pub use types::{CartAction, CartState, LineItem, Product, ProductId, Rating};
