//! # Fake Store Core
//!
//! Core traits and types for the Fake Store front-end.
//!
//! Every piece of mutable state in the storefront (the cart, the product
//! listing) is driven by a reducer: a pure function from the current state and
//! an action to the next state, plus a list of effect descriptions for the
//! runtime to execute.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature (the cart, the product listing)
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies (the product catalog client)
//!
//! ## Example
//!
//! ```
//! use fake_store_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Debug, Default)]
//! struct BadgeState {
//!     count: u32,
//! }
//!
//! enum BadgeAction {
//!     Bump,
//!     Reset,
//! }
//!
//! struct BadgeReducer;
//!
//! impl Reducer for BadgeReducer {
//!     type State = BadgeState;
//!     type Action = BadgeAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut BadgeState,
//!         action: BadgeAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<BadgeAction>; 4]> {
//!         match action {
//!             BadgeAction::Bump => state.count += 1,
//!             BadgeAction::Reset => state.count = 0,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = BadgeState::default();
//! BadgeReducer.reduce(&mut state, BadgeAction::Bump, &());
//! assert_eq!(state.count, 1);
//! ```

pub use smallvec::{SmallVec, smallvec};

/// Declarative macros for building effects
pub mod effect_macros;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::SmallVec;
    use super::effect::Effect;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Updates state in place
        /// 2. Returns effect descriptions to be executed
        ///
        /// Most reducers produce at most a handful of effects, so the result
        /// lives inline in a `SmallVec` and never allocates in the common case.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values, not execution: the Store runs them after the reducer returns.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what should happen,
    /// returned from reducers and executed by the Store runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Whether this effect does nothing when executed
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }
    }
}
