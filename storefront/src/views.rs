//! Text rendering of the storefront pages.
//!
//! Views are pure: they take snapshots of the catalog and cart and return the
//! text to print. They never change state.

use crate::catalog::CatalogState;
use crate::totals::{CartSummary, format_money, order_totals};
use crate::types::{CartState, LineItem, Product};

/// Characters of a description shown on a product card
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Shown in place of the cart table when the cart is empty
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Top bar with the brand and the page links
///
/// The cart badge counts units, so two of one product shows `Cart (2)`.
#[must_use]
pub fn render_nav(cart_quantity: u64) -> String {
    format!("Fake Store  |  Products  |  Cart ({cart_quantity})")
}

/// First characters of a description followed by `...`
///
/// The ellipsis is appended even when the description is shorter than the
/// preview.
#[must_use]
pub fn truncate_description(description: &str) -> String {
    let mut preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

/// Label of the button on a product card
#[must_use]
pub const fn card_action_label(in_cart: bool) -> &'static str {
    if in_cart { "Remove from Cart" } else { "Add to Cart" }
}

/// One product in the listing
#[must_use]
pub fn render_product_card(product: &Product, in_cart: bool) -> String {
    let mut price_line = format!("    ${}", product.price);
    if let Some(rating) = &product.rating {
        price_line.push_str(&format!("  ({} / 5, {} ratings)", rating.rate, rating.count));
    }

    let command = if in_cart { "remove" } else { "add" };

    let mut lines = vec![format!("[{}] {}", product.id, product.title)];
    if !product.image.is_empty() {
        lines.push(format!("    {}", product.image));
    }
    lines.push(format!("    {}", truncate_description(&product.description)));
    lines.push(price_line);
    lines.push(format!(
        "    <{}>  `{command} {}`",
        card_action_label(in_cart),
        product.id
    ));
    lines.join("\n")
}

/// Product listing page
#[must_use]
pub fn render_product_page(catalog: &CatalogState, cart: &CartState) -> String {
    let mut lines = vec!["Product List".to_string(), String::new()];

    if catalog.loading {
        lines.push("Loading products...".to_string());
    }
    if let Some(error) = &catalog.error {
        lines.push(error.clone());
    }

    for product in &catalog.products {
        lines.push(render_product_card(product, cart.contains(product.id)));
        lines.push(String::new());
    }

    lines.join("\n").trim_end().to_string()
}

fn render_cart_row(item: &LineItem) -> String {
    format!(
        "[{}] {}  ${} x {} = {}",
        item.id(),
        item.product.title,
        item.product.price,
        item.quantity,
        format_money(item.line_total())
    )
}

/// Cart page with line items and order totals
#[must_use]
pub fn render_cart_page(cart: &CartState) -> String {
    let mut lines = vec!["Your Cart".to_string(), String::new()];

    match order_totals(cart) {
        CartSummary::Empty => lines.push(EMPTY_CART_MESSAGE.to_string()),
        CartSummary::Totals(totals) => {
            lines.extend(cart.items().iter().map(render_cart_row));
            lines.push(String::new());
            lines.push(format!("Subtotal: {}", format_money(totals.subtotal)));
            lines.push(format!("Discount (10%): {}", format_money(totals.discount)));
            lines.push(format!("Total: {}", format_money(totals.total)));
            lines.push(String::new());
            lines.push("`inc <id>`, `dec <id>`, `remove <id>` or `clear`".to_string());
        },
    }

    lines.join("\n")
}
