//! End-to-end tests of the storefront against stub and mock catalogs.

#![allow(clippy::unwrap_used)]

use fake_store::{
    CartStore, CatalogError, Command, HttpCatalog, Outcome, Product, ProductCatalog, ProductId,
    Route, Storefront,
};
use futures::future::BoxFuture;
use rust_decimal::Decimal;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct StubCatalog {
    products: Vec<Product>,
    fail: bool,
    calls: AtomicUsize,
}

impl ProductCatalog for StubCatalog {
    fn fetch_products(&self) -> BoxFuture<'_, Result<Vec<Product>, CatalogError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            if self.fail {
                Err(CatalogError::Request("connection refused".to_string()))
            } else {
                Ok(self.products.clone())
            }
        })
    }
}

fn product(id: u64, cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        description: format!("Description of product {id}"),
        price: Decimal::new(cents, 2),
        image: String::new(),
        category: "electronics".to_string(),
        rating: None,
    }
}

fn stocked() -> Arc<StubCatalog> {
    Arc::new(StubCatalog {
        products: vec![product(1, 1000), product(2, 550)],
        ..StubCatalog::default()
    })
}

async fn loaded_storefront() -> Storefront {
    let storefront = Storefront::new(stocked(), CartStore::new());
    storefront.load_products().await.unwrap();
    storefront
}

fn shown(outcome: Outcome) -> String {
    match outcome {
        Outcome::Show(text) => text,
        Outcome::Quit => String::new(),
    }
}

#[tokio::test]
async fn load_fills_product_page() {
    let storefront = loaded_storefront().await;

    let catalog = storefront.catalog().await;
    assert!(!catalog.loading);
    assert_eq!(catalog.products.len(), 2);

    let page = storefront.render().await;
    assert!(page.starts_with("Fake Store  |  Products  |  Cart (0)"));
    assert!(page.contains("[1] Product 1"));
    assert!(page.contains("<Add to Cart>"));
}

#[tokio::test]
async fn failed_load_shows_error_and_no_products() {
    let catalog = Arc::new(StubCatalog {
        products: vec![product(1, 1000)],
        fail: true,
        ..StubCatalog::default()
    });
    let storefront = Storefront::new(catalog, CartStore::new());
    storefront.load_products().await.unwrap();

    let state = storefront.catalog().await;
    assert_eq!(state.error.as_deref(), Some("Request failed: connection refused"));
    assert!(state.products.is_empty());

    let page = storefront.render().await;
    assert!(page.contains("Request failed: connection refused"));
    assert!(!page.contains("Add to Cart"));
}

#[tokio::test]
async fn cart_works_without_catalog() {
    let catalog = Arc::new(StubCatalog {
        fail: true,
        ..StubCatalog::default()
    });
    let cart = CartStore::new();
    let mut storefront = Storefront::new(catalog, cart.clone());
    storefront.load_products().await.unwrap();

    cart.add_to_cart(product(9, 250)).await;
    let page = shown(storefront.execute(Command::Go(Route::Cart)).await);

    assert!(page.contains("Cart (1)"));
    assert!(page.contains("Total: $2.25"));
}

#[tokio::test]
async fn shopping_session() {
    let mut storefront = loaded_storefront().await;

    let page = shown(storefront.execute(Command::Add(ProductId::new(1))).await);
    assert!(page.contains("Cart (1)"));
    assert!(page.contains("<Remove from Cart>  `remove 1`"));

    storefront.execute(Command::Add(ProductId::new(1))).await;
    storefront.execute(Command::Increase(ProductId::new(1))).await;
    storefront.execute(Command::Add(ProductId::new(2))).await;

    let page = shown(storefront.execute(Command::Go(Route::Cart)).await);
    assert_eq!(storefront.route(), Route::Cart);
    // Two of product 1 and one of product 2
    assert!(page.starts_with("Fake Store  |  Products  |  Cart (3)"));
    assert!(page.contains("Your Cart"));
    assert!(page.contains("Subtotal: $25.50"));
    assert!(page.contains("Discount (10%): $2.55"));
    assert!(page.contains("Total: $22.95"));

    storefront.execute(Command::Decrease(ProductId::new(1))).await;
    storefront.execute(Command::Decrease(ProductId::new(1))).await;
    let cart = storefront.cart().cart().await;
    assert_eq!(cart.quantity_of(ProductId::new(1)), Some(1));

    storefront.execute(Command::Remove(ProductId::new(2))).await;
    assert!(!storefront.cart().contains(ProductId::new(2)).await);

    let page = shown(storefront.execute(Command::Clear).await);
    assert!(page.contains("Your cart is empty."));
    assert!(page.contains("Cart (0)"));
}

#[tokio::test]
async fn adding_unlisted_product_is_refused() {
    let mut storefront = loaded_storefront().await;

    let message = shown(storefront.execute(Command::Add(ProductId::new(42))).await);

    assert_eq!(message, "Product 42 is not in the product list");
    assert_eq!(storefront.cart().item_count().await, 0);
}

#[tokio::test]
async fn reload_fetches_again() {
    let catalog = stocked();
    let mut storefront = Storefront::new(catalog.clone(), CartStore::new());
    storefront.load_products().await.unwrap();

    storefront.execute(Command::Reload).await;

    assert_eq!(catalog.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn help_and_quit() {
    let mut storefront = loaded_storefront().await;

    let help = shown(storefront.execute(Command::Help).await);
    assert!(help.contains("add <id>"));

    assert_eq!(storefront.execute(Command::Quit).await, Outcome::Quit);
}

#[tokio::test]
async fn terminal_session() {
    let mut storefront = loaded_storefront().await;
    let input: &[u8] = b"add 2\ninc 2\nbogus\n\ncart\nquit\nadd 1\n";
    let mut output = Vec::new();

    storefront.run(input, &mut output).await.unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Product List"));
    assert!(text.contains("Unknown command `bogus`"));
    assert!(text.contains("[2] Product 2  $5.50 x 2 = $11.00"));
    assert!(text.trim_end().ends_with("Goodbye!"));
    // Nothing after quit is executed
    assert!(!storefront.cart().contains(ProductId::new(1)).await);
}

#[tokio::test]
async fn shutdown_stops_cart_changes() {
    let mut storefront = loaded_storefront().await;
    storefront.execute(Command::Add(ProductId::new(1))).await;

    storefront.shutdown(Duration::from_secs(1)).await.unwrap();
    storefront.execute(Command::Clear).await;

    assert_eq!(storefront.cart().item_count().await, 1);
    assert!(storefront.load_products().await.is_err());
}

#[tokio::test]
async fn http_catalog_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 5,
                "title": concat!(
                    "John Hardy Women's Legends Naga Gold & Silver ",
                    "Dragon Station Chain Bracelet"
                ),
                "price": 695,
                "description": concat!(
                    "From our Legends Collection, the Naga was inspired by the mythical ",
                    "water dragon that protects the ocean's pearl."
                ),
                "category": "jewelery",
                "image": "https://fakestoreapi.com/img/71pWzhdJNwL._AC_UL640_QL65_ML3_.jpg",
                "rating": { "rate": 4.6, "count": 400 }
            }
        ])))
        .mount(&server)
        .await;

    let catalog =
        HttpCatalog::new(format!("{}/products", server.uri()), Duration::from_secs(5)).unwrap();
    let mut storefront = Storefront::new(Arc::new(catalog), CartStore::new());
    storefront.load_products().await.unwrap();

    let page = storefront.render().await;
    assert!(page.contains("[5] John Hardy"));
    assert!(page.contains("https://fakestoreapi.com/img/71pWzhdJNwL._AC_UL640_QL65_ML3_.jpg"));
    assert!(page.contains("$695  (4.6 / 5, 400 ratings)"));
    assert!(page.contains(concat!(
        "From our Legends Collection, the Naga was inspired by the mythical ",
        "water dragon that protects the oc..."
    )));

    let page = shown(storefront.execute(Command::Add(ProductId::new(5))).await);
    assert!(page.contains("Cart (1)"));

    let page = shown(storefront.execute(Command::Go(Route::Cart)).await);
    assert!(page.contains("Subtotal: $695.00"));
    assert!(page.contains("Discount (10%): $69.50"));
    assert!(page.contains("Total: $625.50"));
}
