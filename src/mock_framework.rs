//! # Mock Framework
//!
//! Utilities for testing the view model in isolation.
//!
//! Use [`MockProductService`] to control what the catalog fetch returns and when.
//! Then use helpers like [`expect_catalog_loaded`] or [`expect_view_state`] to
//! assert on the event stream without hanging forever when an event never arrives.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use crate::catalog::ProductService;
use crate::clients::ShopClient;
use crate::domain::{Product, ViewState};
use crate::shop_actor::{EventStream, ShopViewModel, ViewEvent};

const EVENT_TIMEOUT: Duration = Duration::from_secs(1);

/// Product service double that counts fetches and can hold them until released.
///
/// # Testing Strategy
/// A gated mock keeps the view model in its loading phase for as long as the test
/// needs, so intents sent in the meantime can be checked for queueing. Call
/// `notify_one` on the returned gate to let the fetch complete.
pub struct MockProductService {
    products: Vec<Product>,
    fetches: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl MockProductService {
    pub fn new(products: Vec<Product>) -> Arc<Self> {
        Arc::new(Self {
            products,
            fetches: AtomicUsize::new(0),
            gate: None,
        })
    }

    pub fn gated(products: Vec<Product>) -> (Arc<Self>, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let service = Arc::new(Self {
            products,
            fetches: AtomicUsize::new(0),
            gate: Some(gate.clone()),
        });
        (service, gate)
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductService for MockProductService {
    async fn fetch_products(&self) -> Vec<Product> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.products.clone()
    }
}

/// Two-item catalog: Apple (id 1, $10) and Orange (id 2, $20).
pub fn fruit_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Apple", "apple.fill", 10),
        Product::new(2, "Orange", "orange.fill", 20),
    ]
}

/// Spawns a view model over `service` and returns its client, events and task handle.
pub fn spawn_view_model(service: Arc<dyn ProductService>) -> (ShopClient, EventStream, JoinHandle<()>) {
    let (view_model, client, events) = ShopViewModel::new(16, service);
    let handle = tokio::spawn(view_model.run());
    (client, events, handle)
}

/// Waits for the next event, panicking on timeout or a closed stream.
pub async fn expect_event(events: &mut EventStream) -> ViewEvent {
    match tokio::time::timeout(EVENT_TIMEOUT, events.recv()).await {
        Ok(Some(event)) => event,
        Ok(None) => panic!("event stream closed"),
        Err(_) => panic!("timed out waiting for an event"),
    }
}

/// Helper to verify that the next event is a CatalogLoaded
pub async fn expect_catalog_loaded(events: &mut EventStream) -> Vec<Product> {
    match expect_event(events).await {
        ViewEvent::CatalogLoaded { products } => products,
        other => panic!("expected CatalogLoaded, got {:?}", other),
    }
}

/// Helper to verify that the next event is a ViewStateUpdated
pub async fn expect_view_state(events: &mut EventStream) -> ViewState {
    match expect_event(events).await {
        ViewEvent::ViewStateUpdated(state) => state,
        other => panic!("expected ViewStateUpdated, got {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_gated_mock_holds_fetch_until_released() {
        let (service, gate) = MockProductService::gated(fruit_catalog());

        let fetcher = service.clone();
        let fetch = tokio::spawn(async move { fetcher.fetch_products().await });

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(service.fetch_count(), 1);
        assert!(!fetch.is_finished());

        gate.notify_one();
        let products = tokio::time::timeout(EVENT_TIMEOUT, fetch).await.unwrap().unwrap();
        assert_eq!(products, fruit_catalog());
    }
}
