use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, info_span, instrument, warn, Instrument};
use crate::cart_store::CartStore;
use crate::catalog::ProductService;
use crate::clients::ShopClient;
use crate::domain::Product;
use super::{EventStream, Intent, ShopError, ViewEvent};

/// Lifecycle of a [`ShopViewModel`] with respect to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No `ViewReady` yet. Mutations apply immediately.
    Uninitialized,
    /// Catalog fetch in flight. Mutations are queued until it resolves.
    Loading,
    /// Catalog delivered. Every intent yields one view-state event.
    Active,
}

/// The view model actor.
///
/// Owns the [`CartStore`], the catalog snapshot and the event sender. Intents are
/// processed one at a time off a single channel, so every emitted [`ViewState`]
/// is derived from a fully applied mutation.
///
/// [`ViewState`]: crate::domain::ViewState
pub struct ShopViewModel {
    receiver: mpsc::Receiver<Intent>,
    events: mpsc::UnboundedSender<ViewEvent>,
    product_service: Arc<dyn ProductService>,
    store: CartStore,
    catalog: Vec<Product>,
    phase: Phase,
    pending: VecDeque<Intent>,
    fetch: Option<oneshot::Receiver<Vec<Product>>>,
}

impl ShopViewModel {
    /// Builds the actor along with its intent sink and its one event stream.
    ///
    /// Intents are bounded by `buffer_size`; events are unbounded so the actor
    /// never waits on its subscriber while holding the intent receiver.
    pub fn new(
        buffer_size: usize,
        product_service: Arc<dyn ProductService>,
    ) -> (Self, ShopClient, EventStream) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (events, event_stream) = mpsc::unbounded_channel();
        let actor = Self {
            receiver,
            events,
            product_service,
            store: CartStore::new(),
            catalog: Vec::new(),
            phase: Phase::Uninitialized,
            pending: VecDeque::new(),
            fetch: None,
        };
        (actor, ShopClient::new(sender), event_stream)
    }

    /// Main actor loop.
    ///
    /// Runs until every client is dropped or the event subscriber goes away.
    #[instrument(name = "shop_view_model", skip(self))]
    pub async fn run(mut self) {
        info!("ShopViewModel starting");

        loop {
            let outcome = tokio::select! {
                biased;
                loaded = wait_for_catalog(&mut self.fetch) => {
                    self.fetch = None;
                    match loaded {
                        Ok(products) => self.handle_catalog_loaded(products),
                        Err(_) => self.handle_catalog_lost(),
                    }
                }
                msg = self.receiver.recv() => match msg {
                    Some(intent) => self.handle_intent(intent),
                    None => {
                        info!("All clients dropped");
                        break;
                    }
                },
            };

            if let Err(e) = outcome {
                warn!(error = %e, "ShopViewModel shutting down");
                break;
            }
        }

        info!("ShopViewModel stopped");
    }

    fn handle_intent(&mut self, intent: Intent) -> Result<(), ShopError> {
        match (self.phase, intent) {
            (Phase::Uninitialized, Intent::ViewReady) => {
                self.handle_view_ready();
                Ok(())
            }
            (phase, Intent::ViewReady) => {
                warn!(?phase, "Catalog already requested, ignoring view_ready");
                Ok(())
            }
            (Phase::Loading, intent) => {
                debug!(intent = intent.kind(), queued = self.pending.len() + 1, "Catalog loading, queueing intent");
                self.pending.push_back(intent);
                Ok(())
            }
            (_, intent) => self.apply(intent),
        }
    }

    /// Applies one mutating intent and publishes the resulting view state.
    fn apply(&mut self, intent: Intent) -> Result<(), ShopError> {
        match intent {
            Intent::QuantityChanged { product, quantity } => {
                self.handle_quantity_changed(product, quantity)
            }
            Intent::LikeToggled { product } => self.handle_like_toggled(product),
            Intent::ResetRequested => self.handle_reset(),
            Intent::ViewReady => {
                debug!("view_ready carries no mutation");
                return Ok(());
            }
        }
        self.publish_view_state()
    }

    /// Starts the catalog fetch on a background task.
    ///
    /// The task owns the oneshot sender; the run loop picks up the result.
    #[instrument(skip(self))]
    fn handle_view_ready(&mut self) {
        info!("View ready, fetching catalog");

        let (respond_to, response) = oneshot::channel();
        let service = Arc::clone(&self.product_service);
        tokio::spawn(
            async move {
                let products = service.fetch_products().await;
                let _ = respond_to.send(products);
            }
            .instrument(info_span!("catalog_fetch")),
        );

        self.fetch = Some(response);
        self.phase = Phase::Loading;
    }

    #[instrument(fields(product_count = products.len()), skip(self, products))]
    fn handle_catalog_loaded(&mut self, products: Vec<Product>) -> Result<(), ShopError> {
        info!("Catalog loaded");
        self.catalog = products;
        self.phase = Phase::Active;

        self.emit(ViewEvent::CatalogLoaded { products: self.catalog.clone() })?;
        self.publish_view_state()?;
        self.replay_pending()
    }

    /// The fetch task went away without a result. Back to `Uninitialized`
    /// (a later `ViewReady` fetches again) and release the queued intents.
    fn handle_catalog_lost(&mut self) -> Result<(), ShopError> {
        error!(queued = self.pending.len(), "Catalog fetch ended without a result");
        self.phase = Phase::Uninitialized;
        self.replay_pending()
    }

    fn replay_pending(&mut self) -> Result<(), ShopError> {
        if !self.pending.is_empty() {
            debug!(queued = self.pending.len(), "Replaying queued intents");
        }
        while let Some(intent) = self.pending.pop_front() {
            self.apply(intent)?;
        }
        Ok(())
    }

    #[instrument(fields(product_id = product.id), skip(self, product))]
    fn handle_quantity_changed(&mut self, product: Product, quantity: u32) {
        debug!("Processing quantity_changed intent");
        self.store.set_quantity(product, quantity);
        debug!(cart = ?self.store.cart_lines(), "Cart changed");
    }

    #[instrument(fields(product_id = product.id), skip(self, product))]
    fn handle_like_toggled(&mut self, product: Product) {
        debug!("Processing like_toggled intent");
        let liked = self.store.toggle_like(product);
        debug!(liked, liked_products = ?self.store.liked_names(), "Likes changed");
    }

    #[instrument(skip(self))]
    fn handle_reset(&mut self) {
        info!(item_count = self.store.item_count(), "Resetting cart and likes");
        self.store.reset();
    }

    fn publish_view_state(&self) -> Result<(), ShopError> {
        let state = self.store.view_state();
        debug!(
            item_count = state.item_count,
            total_cost = state.total_cost,
            liked = state.liked_ids.len(),
            "Publishing view state"
        );
        self.emit(ViewEvent::ViewStateUpdated(state))
    }

    fn emit(&self, event: ViewEvent) -> Result<(), ShopError> {
        self.events
            .send(event)
            .map_err(|_| ShopError::SubscriberGone)
    }
}

/// Resolves with the catalog once a fetch is in flight; never resolves otherwise.
async fn wait_for_catalog(
    fetch: &mut Option<oneshot::Receiver<Vec<Product>>>,
) -> Result<Vec<Product>, oneshot::error::RecvError> {
    match fetch {
        Some(response) => response.await,
        None => std::future::pending().await,
    }
}
