use tokio::sync::mpsc;
use tracing::debug;
use crate::domain::Product;
use crate::shop_actor::{Intent, ShopError};

/// Client for sending intents to the [`ShopViewModel`](crate::shop_actor::ShopViewModel).
///
/// Cloning yields another handle onto the same ordered intent stream.
#[derive(Clone)]
pub struct ShopClient {
    sender: mpsc::Sender<Intent>,
}

impl ShopClient {
    pub fn new(sender: mpsc::Sender<Intent>) -> Self {
        Self { sender }
    }

    /// Queues an intent. Fails only once the view model has stopped.
    pub async fn send(&self, intent: Intent) -> Result<(), ShopError> {
        debug!(intent = intent.kind(), "Sending intent");
        self.sender
            .send(intent)
            .await
            .map_err(|_| ShopError::ActorCommunicationError("View model closed".to_string()))
    }
}

intent_method!(ShopClient => fn view_ready() as Intent::ViewReady);
intent_method!(ShopClient => fn change_quantity(product: Product, quantity: u32) as Intent::QuantityChanged);
intent_method!(ShopClient => fn toggle_like(product: Product) as Intent::LikeToggled);
intent_method!(ShopClient => fn reset() as Intent::ResetRequested);
