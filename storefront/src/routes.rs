//! Pages of the storefront

use std::fmt;

/// A page the shopper can be on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    /// Product listing at `/`
    #[default]
    Products,
    /// Cart at `/cart`
    Cart,
}

impl Route {
    /// Route for a path; anything unrecognized lands on the product listing
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match path.trim().trim_end_matches('/') {
            "/cart" | "cart" => Self::Cart,
            _ => Self::Products,
        }
    }

    /// Path of the route
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Products => "/",
            Self::Cart => "/cart",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
