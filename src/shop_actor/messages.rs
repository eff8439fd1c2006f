use tokio::sync::mpsc;
use crate::domain::{Product, ViewState};

/// User-originated actions fed into the view model.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// The view is on screen; triggers the one-time catalog fetch.
    ViewReady,
    QuantityChanged {
        product: Product,
        quantity: u32,
    },
    LikeToggled {
        product: Product,
    },
    ResetRequested,
}

impl Intent {
    /// Short name used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Intent::ViewReady => "view_ready",
            Intent::QuantityChanged { .. } => "quantity_changed",
            Intent::LikeToggled { .. } => "like_toggled",
            Intent::ResetRequested => "reset_requested",
        }
    }
}

/// Notifications emitted by the view model, in the order their intents were received.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    CatalogLoaded { products: Vec<Product> },
    ViewStateUpdated(ViewState),
}

/// The single consumer-facing end of the view model.
pub type EventStream = mpsc::UnboundedReceiver<ViewEvent>;
