//! Domain types for the storefront.
//!
//! Products come from the catalog API and are never modified here. The cart
//! is an ordered list of line items, one per product, and is only ever
//! changed through [`CartAction`]s applied by the cart reducer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Catalog identifier of a product
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Wraps a raw catalog id
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw catalog id
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Customer rating reported by the catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score
    pub rate: Decimal,
    /// Number of ratings
    pub count: u32,
}

/// A product record as returned by the catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier
    pub id: ProductId,
    /// Display name
    pub title: String,
    /// Long description
    pub description: String,
    /// Unit price
    pub price: Decimal,
    /// Image URL
    pub image: String,
    /// Catalog category
    pub category: String,
    /// Customer rating, when the catalog provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

/// A product in the cart together with how many of it the shopper wants
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The product as it was when added (price is not re-fetched)
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1, capped at `u64::MAX`
    pub quantity: u64,
}

impl LineItem {
    /// New line item with quantity 1
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Id of the product on this line
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// `price × quantity` at full precision
    ///
    /// Saturates at [`Decimal::MAX`] when the product does not fit.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product
            .price
            .checked_mul(Decimal::from(self.quantity))
            .unwrap_or(Decimal::MAX)
    }
}

/// The shopping cart
///
/// ## Invariants
/// - At most one line item per product id
/// - Every quantity is at least 1
/// - Items stay in the order they were first added
///
/// The item list is private so these hold: the only way to change a cart is
/// through the cart reducer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    /// Creates an empty cart
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Line items in insertion order
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Line item for a product, if it is in the cart
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Whether the product is in the cart
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Quantity of a product, if it is in the cart
    #[must_use]
    pub fn quantity_of(&self, id: ProductId) -> Option<u64> {
        self.get(id).map(|item| item.quantity)
    }

    /// Number of distinct products
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities, shown as the cart badge in the nav bar
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items
            .iter()
            .fold(0, |sum, item| sum.saturating_add(item.quantity))
    }

    /// Whether the cart has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn get_mut(&mut self, id: ProductId) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub(crate) fn push(&mut self, item: LineItem) {
        self.items.push(item);
    }

    pub(crate) fn remove(&mut self, id: ProductId) {
        self.items.retain(|item| item.id() != id);
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}

/// Everything that can happen to a cart
///
/// On the wire an action is a JSON object tagged by `type`:
/// `{"type": "REMOVE", "id": 3}`. A `type` this enum does not know decodes
/// to [`CartAction::Unknown`], which the reducer ignores.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Put a product in the cart with quantity 1; no-op if it is already there
    Add {
        /// Full product record
        product: Product,
    },
    /// Take a product out of the cart
    Remove {
        /// Product to remove
        id: ProductId,
    },
    /// Add one to a product's quantity
    Increase {
        /// Product to increase
        id: ProductId,
    },
    /// Subtract one from a product's quantity, never going below 1
    Decrease {
        /// Product to decrease
        id: ProductId,
    },
    /// Empty the cart
    Clear,
    /// Unrecognized action type
    #[serde(other)]
    Unknown,
}

impl CartAction {
    /// Wire name of the action type
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "ADD",
            Self::Remove { .. } => "REMOVE",
            Self::Increase { .. } => "INCREASE",
            Self::Decrease { .. } => "DECREASE",
            Self::Clear => "CLEAR",
            Self::Unknown => "UNKNOWN",
        }
    }
}
