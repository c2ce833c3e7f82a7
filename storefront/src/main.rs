//! Fake Store terminal front-end
//!
//! Fetches the product list, then reads shopper commands from stdin and
//! prints pages to stdout. Logs go to stderr.

use anyhow::Context;
use fake_store::{CartStore, HttpCatalog, Storefront, StorefrontConfig};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = StorefrontConfig::from_env().context("invalid configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| fake_store::config::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        catalog = %config.catalog_url,
        request_timeout_secs = config.request_timeout_secs,
        "Configuration loaded"
    );

    let catalog = HttpCatalog::new(config.catalog_url.clone(), config.request_timeout())
        .context("failed to create catalog client")?;

    let mut storefront = Storefront::new(Arc::new(catalog), CartStore::new())
        .with_fetch_wait(config.request_timeout() + std::time::Duration::from_secs(1));

    if let Err(error) = storefront.load_products().await {
        tracing::warn!(%error, "Product list did not finish loading");
    }

    storefront
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
        .context("terminal I/O failed")?;

    if let Err(error) = storefront.shutdown(config.shutdown_timeout()).await {
        tracing::warn!(%error, "Shutdown did not complete cleanly");
    }

    Ok(())
}
