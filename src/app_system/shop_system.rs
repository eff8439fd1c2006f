use std::sync::Arc;
use tracing::{error, info};
use crate::catalog::{DelayedCatalog, ProductService};
use crate::clients::ShopClient;
use crate::shop_actor::{EventStream, ShopViewModel};
use super::{AppConfig, SystemError};

/// Owns the running view model and hands out its two ends.
///
/// Responsible for starting the actor, wiring in the product service, and shutdown.
pub struct ShopSystem {
    pub client: ShopClient,
    handle: tokio::task::JoinHandle<()>,
}

impl ShopSystem {
    /// Starts the view model backed by a [`DelayedCatalog`] using the configured delay.
    ///
    /// The returned [`EventStream`] is the only subscription the view model will ever have.
    pub fn new(config: &AppConfig) -> (Self, EventStream) {
        Self::with_service(config, Arc::new(DelayedCatalog::new(config.fetch_delay)))
    }

    pub fn with_service(config: &AppConfig, product_service: Arc<dyn ProductService>) -> (Self, EventStream) {
        info!(channel_buffer = config.channel_buffer, "Starting shop system");
        let (view_model, client, events) = ShopViewModel::new(config.channel_buffer, product_service);
        let handle = tokio::spawn(view_model.run());
        (Self { client, handle }, events)
    }

    /// Drops the client (closing the intent channel) and waits for the actor to finish.
    ///
    /// Any clones of the client still alive elsewhere keep the actor running.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down shop system...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(SystemError::ActorTaskFailed(e));
        }

        info!("Shop system shutdown complete.");
        Ok(())
    }
}
