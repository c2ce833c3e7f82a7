//! Configuration for the storefront binary.
//!
//! Loaded once at startup from environment variables (and a `.env` file, if
//! `main` found one) with defaults for everything.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Default catalog endpoint
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Default `RUST_LOG` filter
pub const DEFAULT_LOG_FILTER: &str = "fake_store=info,fake_store_runtime=warn";

/// Errors from loading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to something that is not a whole number of seconds
    #[error("{name} must be a whole number of seconds, got `{value}`")]
    InvalidSeconds {
        /// Variable name
        name: &'static str,
        /// Value found
        value: String,
    },

    /// The catalog URL is blank
    #[error("{name} must not be empty")]
    Empty {
        /// Variable name
        name: &'static str,
    },
}

/// Storefront configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Product listing endpoint (`FAKE_STORE_CATALOG_URL`)
    pub catalog_url: String,
    /// Whole-request timeout for the catalog fetch in seconds
    /// (`FAKE_STORE_REQUEST_TIMEOUT_SECS`)
    pub request_timeout_secs: u64,
    /// How long shutdown waits for in-flight effects in seconds
    /// (`FAKE_STORE_SHUTDOWN_TIMEOUT_SECS`)
    pub shutdown_timeout_secs: u64,
    /// Tracing filter (`RUST_LOG`)
    pub log_filter: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            request_timeout_secs: 10,
            shutdown_timeout_secs: 5,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a timeout is not a number or the catalog URL
    /// is blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through a variable lookup function
    ///
    /// # Errors
    ///
    /// See [`StorefrontConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let catalog_url = match lookup("FAKE_STORE_CATALOG_URL") {
            Some(url) if url.trim().is_empty() => {
                return Err(ConfigError::Empty {
                    name: "FAKE_STORE_CATALOG_URL",
                });
            },
            Some(url) => url.trim().to_string(),
            None => defaults.catalog_url,
        };

        Ok(Self {
            catalog_url,
            request_timeout_secs: seconds(
                &lookup,
                "FAKE_STORE_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            )?,
            shutdown_timeout_secs: seconds(
                &lookup,
                "FAKE_STORE_SHUTDOWN_TIMEOUT_SECS",
                defaults.shutdown_timeout_secs,
            )?,
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
        })
    }

    /// Catalog request timeout
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Shutdown grace period
    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

fn seconds<F>(lookup: &F, name: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(name) else {
        return Ok(default);
    };
    let parsed = value.trim().parse();
    parsed.map_err(|_| ConfigError::InvalidSeconds { name, value })
}
