//! Order totals derived from the cart.
//!
//! Totals are computed at full precision and only rounded to cents when they
//! are shown, so per-line rounding never compounds.

use crate::types::{CartState, LineItem};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Flat discount applied to every order (10%)
pub const DISCOUNT_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Subtotal, discount and total of a non-empty cart
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OrderTotals {
    /// Sum of `price × quantity` over all line items
    pub subtotal: Decimal,
    /// `subtotal × DISCOUNT_RATE`
    pub discount: Decimal,
    /// `subtotal − discount`
    pub total: Decimal,
}

impl OrderTotals {
    /// All three values at zero
    pub const ZERO: Self = Self {
        subtotal: Decimal::ZERO,
        discount: Decimal::ZERO,
        total: Decimal::ZERO,
    };

    /// Totals for a list of line items
    ///
    /// A subtotal too large for [`Decimal`] saturates at [`Decimal::MAX`].
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a LineItem>) -> Self {
        let subtotal = items.into_iter().fold(Decimal::ZERO, |sum, item| {
            sum.checked_add(item.line_total()).unwrap_or(Decimal::MAX)
        });
        let discount = subtotal
            .checked_mul(DISCOUNT_RATE)
            .unwrap_or_else(|| subtotal / Decimal::TEN);

        Self {
            subtotal,
            discount,
            total: subtotal - discount,
        }
    }

    /// The same totals rounded to cents for display
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            subtotal: round_money(self.subtotal),
            discount: round_money(self.discount),
            total: round_money(self.total),
        }
    }
}

/// What the cart view shows under the line items
///
/// An empty cart has no totals table, just an empty message, so it gets its
/// own variant instead of a table of zeros.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CartSummary {
    /// Nothing in the cart
    Empty,
    /// At least one line item
    Totals(OrderTotals),
}

impl CartSummary {
    /// Whether the cart was empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The totals, all zero for an empty cart
    #[must_use]
    pub const fn totals(&self) -> OrderTotals {
        match self {
            Self::Empty => OrderTotals::ZERO,
            Self::Totals(totals) => *totals,
        }
    }
}

/// Summarize a cart
#[must_use]
pub fn order_totals(cart: &CartState) -> CartSummary {
    if cart.is_empty() {
        CartSummary::Empty
    } else {
        CartSummary::Totals(OrderTotals::from_items(cart.items()))
    }
}

/// Round to 2 decimal places, halves away from zero, always showing both places
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Format an amount as dollars, e.g. `$22.95`
#[must_use]
pub fn format_money(value: Decimal) -> String {
    format!("${}", round_money(value))
}
