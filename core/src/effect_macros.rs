//! Declarative macros for ergonomic effect construction

/// Create an `Effect::Future` from an async block body
///
/// The body is moved into an `async move` block and must evaluate to
/// `Option<Action>`.
///
/// # Example
///
/// ```rust,ignore
/// use fake_store_core::async_effect;
///
/// let catalog = Arc::clone(&env.catalog);
/// async_effect! {
///     match catalog.fetch_products().await {
///         Ok(products) => Some(CatalogAction::Loaded { products }),
///         Err(error) => Some(CatalogAction::Failed { message: error.to_string() }),
///     }
/// }
/// ```
#[macro_export]
macro_rules! async_effect {
    ($($body:tt)*) => {
        $crate::effect::Effect::Future(
            ::std::boxed::Box::pin(async move { $($body)* })
        )
    };
}
