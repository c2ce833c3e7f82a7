//! Reducer logic for the shopping cart.
//!
//! The cart is a pure state machine: every action is applied synchronously
//! and no action produces an effect. All five operations are total, so the
//! reducer has no error path.

use crate::types::{CartAction, CartState, LineItem, ProductId};
use fake_store_core::{SmallVec, effect::Effect, reducer::Reducer};

/// Environment for the cart reducer
///
/// The cart needs no injected dependencies.
#[derive(Clone, Copy, Debug, Default)]
pub struct CartEnvironment;

/// Reducer for the shopping cart
#[derive(Clone, Copy, Debug, Default)]
pub struct CartReducer;

impl CartReducer {
    /// Creates a new `CartReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn increase(state: &mut CartState, id: ProductId) {
        if let Some(item) = state.get_mut(id) {
            item.quantity = item.quantity.saturating_add(1);
        }
    }

    /// Never takes a line below one; removal is a separate action.
    fn decrease(state: &mut CartState, id: ProductId) {
        if let Some(item) = state.get_mut(id).filter(|item| item.quantity > 1) {
            item.quantity -= 1;
        }
    }
}

impl Reducer for CartReducer {
    type State = CartState;
    type Action = CartAction;
    type Environment = CartEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CartAction::Add { product } => {
                if state.contains(product.id) {
                    tracing::trace!(id = %product.id, "Product already in cart");
                } else {
                    state.push(LineItem::new(product));
                }
            },
            CartAction::Remove { id } => state.remove(id),
            CartAction::Increase { id } => Self::increase(state, id),
            CartAction::Decrease { id } => Self::decrease(state, id),
            CartAction::Clear => state.clear(),
            CartAction::Unknown => {
                tracing::debug!("Ignoring unknown cart action");
            },
        }

        SmallVec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;
    use fake_store_testing::{ReducerTest, assertions};
    use rust_decimal::Decimal;

    fn product(id: u64, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            description: "A thing you can buy".to_string(),
            price: Decimal::new(cents, 2),
            image: format!("https://fakestoreapi.com/img/{id}.jpg"),
            category: "electronics".to_string(),
            rating: None,
        }
    }

    fn cart_with(lines: &[(u64, u64)]) -> CartState {
        let mut cart = CartState::new();
        for &(id, quantity) in lines {
            let mut item = LineItem::new(product(id, 1000));
            item.quantity = quantity;
            cart.push(item);
        }
        cart
    }

    fn id(raw: u64) -> ProductId {
        ProductId::new(raw)
    }

    #[test]
    fn add_appends_with_quantity_one() {
        ReducerTest::new(CartReducer::new())
            .with_env(CartEnvironment)
            .given_state(CartState::new())
            .when_action(CartAction::Add { product: product(1, 1000) })
            .when_action(CartAction::Add { product: product(2, 550) })
            .then_state(|state| {
                let ids: Vec<_> = state.items().iter().map(LineItem::id).collect();
                assert_eq!(ids, vec![id(1), id(2)]);
                assert_eq!(state.quantity_of(id(1)), Some(1));
                assert_eq!(state.quantity_of(id(2)), Some(1));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn add_is_idempotent() {
        ReducerTest::new(CartReducer::new())
            .with_env(CartEnvironment)
            .given_state(cart_with(&[(1, 3)]))
            .when_action(CartAction::Add { product: product(1, 1000) })
            .then_state(|state| {
                assert_eq!(state.item_count(), 1);
                assert_eq!(state.quantity_of(id(1)), Some(3));
            })
            .run();
    }

    #[test]
    fn add_keeps_price_from_first_add() {
        ReducerTest::new(CartReducer::new())
            .with_env(CartEnvironment)
            .given_state(CartState::new())
            .when_action(CartAction::Add { product: product(1, 1000) })
            .when_action(CartAction::Add { product: product(1, 9999) })
            .then_state(|state| {
                let price = state.get(id(1)).map(|item| item.product.price);
                assert_eq!(price, Some(Decimal::new(1000, 2)));
            })
            .run();
    }

    #[test]
    fn remove_deletes_line() {
        ReducerTest::new(CartReducer::new())
            .with_env(CartEnvironment)
            .given_state(cart_with(&[(1, 2), (2, 1), (3, 4)]))
            .when_action(CartAction::Remove { id: id(2) })
            .then_state(|state| {
                assert!(!state.contains(id(2)));
                let ids: Vec<_> = state.items().iter().map(LineItem::id).collect();
                assert_eq!(ids, vec![id(1), id(3)]);
            })
            .run();
    }

    #[test]
    fn increase_adds_one() {
        ReducerTest::new(CartReducer::new())
            .with_env(CartEnvironment)
            .given_state(cart_with(&[(1, 1)]))
            .when_actions([CartAction::Increase { id: id(1) }, CartAction::Increase { id: id(1) }])
            .then_state(|state| assert_eq!(state.quantity_of(id(1)), Some(3)))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn increase_saturates() {
        ReducerTest::new(CartReducer::new())
            .with_env(CartEnvironment)
            .given_state(cart_with(&[(1, u64::MAX)]))
            .when_action(CartAction::Increase { id: id(1) })
            .then_state(|state| assert_eq!(state.quantity_of(id(1)), Some(u64::MAX)))
            .run();
    }

    #[test]
    fn decrease_subtracts_one() {
        ReducerTest::new(CartReducer::new())
            .with_env(CartEnvironment)
            .given_state(cart_with(&[(1, 3)]))
            .when_action(CartAction::Decrease { id: id(1) })
            .then_state(|state| assert_eq!(state.quantity_of(id(1)), Some(2)))
            .run();
    }

    #[test]
    fn decrease_stops_at_one() {
        ReducerTest::new(CartReducer::new())
            .with_env(CartEnvironment)
            .given_state(cart_with(&[(1, 1)]))
            .when_actions([
                CartAction::Decrease { id: id(1) },
                CartAction::Decrease { id: id(1) },
            ])
            .then_state(|state| {
                assert!(state.contains(id(1)));
                assert_eq!(state.quantity_of(id(1)), Some(1));
            })
            .run();
    }

    #[test]
    fn clear_empties_cart() {
        ReducerTest::new(CartReducer::new())
            .with_env(CartEnvironment)
            .given_state(cart_with(&[(1, 2), (2, 5)]))
            .when_action(CartAction::Clear)
            .then_state(|state| assert!(state.is_empty()))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn unknown_ids_are_noops() {
        let before = cart_with(&[(1, 2)]);
        let expected = before.clone();

        ReducerTest::new(CartReducer::new())
            .with_env(CartEnvironment)
            .given_state(before)
            .when_actions([
                CartAction::Remove { id: id(99) },
                CartAction::Increase { id: id(99) },
                CartAction::Decrease { id: id(99) },
            ])
            .then_state(move |state| assert_eq!(*state, expected))
            .run();
    }

    #[test]
    fn unknown_action_is_noop() {
        let before = cart_with(&[(1, 2), (4, 1)]);
        let expected = before.clone();

        ReducerTest::new(CartReducer::new())
            .with_env(CartEnvironment)
            .given_state(before)
            .when_action(CartAction::Unknown)
            .then_state(move |state| assert_eq!(*state, expected))
            .then_effects(assertions::assert_no_effects)
            .run();
    }
}
