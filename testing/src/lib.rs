//! # Fake Store Testing
//!
//! Testing utilities and helpers for the Fake Store reducers.
//!
//! This crate provides:
//! - [`ReducerTest`], a Given-When-Then harness that drives a reducer
//!   directly, without a runtime
//! - Assertion helpers for the effects a reducer returns
//!
//! ## Example
//!
//! ```ignore
//! use fake_store_testing::{assertions, ReducerTest};
//!
//! #[test]
//! fn decrease_stops_at_one() {
//!     ReducerTest::new(CartReducer::new())
//!         .with_env(CartEnvironment)
//!         .given_state(cart_with(backpack(), 1))
//!         .when_action(CartAction::Decrease { id: backpack().id })
//!         .then_state(|state| assert_eq!(state.quantity_of(backpack().id), Some(1)))
//!         .then_effects(assertions::assert_no_effects)
//!         .run();
//! }
//! ```


// Re-export commonly used items
pub use reducer_test::{ReducerTest, assertions};
