//! The terminal storefront: owns the stores and turns commands into pages.

use crate::catalog::{
    CatalogAction, CatalogEnvironment, CatalogReducer, CatalogState, ProductCatalog,
};
use crate::commands::{Command, HELP};
use crate::routes::Route;
use crate::store::CartStore;
use crate::views::{render_cart_page, render_nav, render_product_page};
use fake_store_runtime::{Store, StoreError};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Store running the product page reducer
pub type CatalogStore = Store<CatalogState, CatalogAction, CatalogEnvironment, CatalogReducer>;

/// Default time to wait for the product listing before showing the page anyway
pub const DEFAULT_FETCH_WAIT: Duration = Duration::from_secs(15);

const PROMPT: &str = "> ";

/// What to do after a command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print this and read the next command
    Show(String),
    /// Leave the storefront
    Quit,
}

/// The storefront application
///
/// Holds the product page store, the cart and the current page. The cart
/// handle is shared with the views through [`Storefront::cart`]; there is no
/// global state.
pub struct Storefront {
    catalog: CatalogStore,
    cart: CartStore,
    route: Route,
    fetch_wait: Duration,
}

impl Storefront {
    /// Creates a storefront on the product page with an empty listing
    #[must_use]
    pub fn new(catalog: Arc<dyn ProductCatalog>, cart: CartStore) -> Self {
        Self {
            catalog: Store::new(
                CatalogState::default(),
                CatalogReducer::new(),
                CatalogEnvironment::new(catalog),
            ),
            cart,
            route: Route::default(),
            fetch_wait: DEFAULT_FETCH_WAIT,
        }
    }

    /// How long [`Storefront::load_products`] waits for the listing
    #[must_use]
    pub const fn with_fetch_wait(mut self, fetch_wait: Duration) -> Self {
        self.fetch_wait = fetch_wait;
        self
    }

    /// The shared cart
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Page currently shown
    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    /// Snapshot of the product page state
    pub async fn catalog(&self) -> CatalogState {
        self.catalog.state(Clone::clone).await
    }

    /// Fetch the listing and wait until it has loaded or failed
    ///
    /// A failed fetch is not an error here; it ends up in
    /// [`CatalogState::error`] and is shown on the product page. If a fetch
    /// is already in flight this returns without waiting for it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] if the fetch has not finished within
    /// the fetch wait (the page keeps showing "Loading products..."), or
    /// [`StoreError::ShutdownInProgress`] after shutdown.
    pub async fn load_products(&self) -> Result<(), StoreError> {
        let mut handle = self.catalog.send(CatalogAction::Load).await?;
        handle.wait_with_timeout(self.fetch_wait).await
    }

    /// Current page with the nav bar on top
    pub async fn render(&self) -> String {
        let cart = self.cart.cart().await;
        let page = match self.route {
            Route::Products => {
                let catalog = self.catalog.state(Clone::clone).await;
                render_product_page(&catalog, &cart)
            },
            Route::Cart => render_cart_page(&cart),
        };

        format!("{}\n\n{page}", render_nav(cart.total_quantity()))
    }

    /// Carry out a shopper command
    pub async fn execute(&mut self, command: Command) -> Outcome {
        tracing::debug!(?command, "Executing command");

        match command {
            Command::Go(route) => self.route = route,
            Command::Add(id) => {
                let product = self.catalog.state(|state| state.find(id).cloned()).await;
                let Some(product) = product else {
                    return Outcome::Show(format!("Product {id} is not in the product list"));
                };
                self.cart.add_to_cart(product).await;
            },
            Command::Remove(id) => self.cart.remove_from_cart(id).await,
            Command::Increase(id) => self.cart.increase_quantity(id).await,
            Command::Decrease(id) => self.cart.decrease_quantity(id).await,
            Command::Clear => self.cart.clear_cart().await,
            Command::Reload => {
                if let Err(error) = self.load_products().await {
                    tracing::warn!(%error, "Product list did not finish loading");
                }
            },
            Command::Help => return Outcome::Show(HELP.to_string()),
            Command::Quit => return Outcome::Quit,
        }

        Outcome::Show(self.render().await)
    }

    /// Read commands from `input` and write pages to `output` until `quit`
    /// or end of input
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading or writing.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let page = self.render().await;
        write_block(&mut output, &page).await?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                output.write_all(PROMPT.as_bytes()).await?;
                output.flush().await?;
                continue;
            }

            let text = match line.parse::<Command>() {
                Ok(command) => match self.execute(command).await {
                    Outcome::Show(text) => text,
                    Outcome::Quit => break,
                },
                Err(error) => error.to_string(),
            };
            write_block(&mut output, &text).await?;
        }

        output.write_all(b"Goodbye!\n").await?;
        output.flush().await
    }

    /// Stop both stores, waiting up to `timeout` for each
    ///
    /// # Errors
    ///
    /// Returns the first [`StoreError::ShutdownTimeout`] reported.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        let catalog = self.catalog.shutdown(timeout).await;
        let cart = self.cart.shutdown(timeout).await;
        catalog.and(cart)
    }
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("route", &self.route)
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}

async fn write_block<W>(output: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n\n").await?;
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await
}
