//! The product fetch service consumed by the view model on `ViewReady`.

use std::time::Duration;
use async_trait::async_trait;
use tracing::{debug, info, instrument};
use crate::domain::Product;

/// Source of the product catalog.
///
/// Modeled as infallible: a fetch always completes with some (possibly empty) list.
#[async_trait]
pub trait ProductService: Send + Sync + 'static {
    async fn fetch_products(&self) -> Vec<Product>;
}

/// Serves a fixed product list after an artificial delay.
#[derive(Debug, Clone)]
pub struct DelayedCatalog {
    delay: Duration,
    products: Vec<Product>,
}

impl DelayedCatalog {
    /// Serves [`Product::collection`] after `delay`.
    pub fn new(delay: Duration) -> Self {
        Self::with_products(delay, Product::collection())
    }

    pub fn with_products(delay: Duration, products: Vec<Product>) -> Self {
        Self { delay, products }
    }

    /// The delay in whole milliseconds, saturating for delays beyond `u64`.
    pub fn delay_ms(&self) -> u64 {
        u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX)
    }
}

#[async_trait]
impl ProductService for DelayedCatalog {
    #[instrument(skip(self))]
    async fn fetch_products(&self) -> Vec<Product> {
        debug!(delay_ms = self.delay_ms(), "Simulating catalog fetch");
        tokio::time::sleep(self.delay).await;
        info!(product_count = self.products.len(), "Catalog fetched");
        self.products.clone()
    }
}
