mod domain;
mod cart_store;
mod catalog;
mod clients;
mod shop_actor;
mod view_binder;

mod app_system;

#[cfg(test)]
mod mock_framework;

use tracing::{info, Instrument};
use crate::app_system::{setup_tracing, AppConfig, ShopSystem, SystemError};
use crate::shop_actor::EventStream;
use crate::view_binder::{RowGesture, TableBinder};

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    let config = AppConfig::from_env();
    setup_tracing(&config);

    info!(?config, "Starting shop binding demo");

    let (system, mut events) = ShopSystem::new(&config);
    let mut binder = TableBinder::new();

    // The view appears; the catalog arrives after the simulated fetch delay
    let span = tracing::info_span!("catalog_load");
    async {
        info!("Waiting for catalog");
        system.client.view_ready().await?;
        pump(&mut events, &mut binder, "catalog").await?;
        pump(&mut events, &mut binder, "initial view state").await?;
        Ok::<_, SystemError>(())
    }
    .instrument(span)
    .await?;
    log_table(&binder);

    // Simulated row gestures, each forwarded as an intent and re-rendered
    let gestures = [
        (0, RowGesture::QuantityDidChange(2)),
        (3, RowGesture::QuantityDidChange(1)),
        (3, RowGesture::HeartDidTap),
        (4, RowGesture::QuantityDidChange(3)),
        (0, RowGesture::HeartDidTap),
    ];

    let span = tracing::info_span!("shopping_session");
    async {
        for (index, gesture) in gestures {
            if let Some(intent) = binder.intent_for(index, gesture) {
                info!(row = index, ?gesture, "Row gesture");
                system.client.send(intent).await?;
                pump(&mut events, &mut binder, "view state").await?;
            }
        }
        Ok::<_, SystemError>(())
    }
    .instrument(span)
    .await?;
    log_table(&binder);

    info!("Reset tapped");
    system.client.send(binder.reset_tapped()).await?;
    pump(&mut events, &mut binder, "reset view state").await?;
    log_table(&binder);

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

async fn pump(events: &mut EventStream, binder: &mut TableBinder, waiting_for: &'static str) -> Result<(), SystemError> {
    let event = events
        .recv()
        .await
        .ok_or(SystemError::EventStreamClosed(waiting_for))?;
    binder.apply(event);
    Ok(())
}

fn log_table(binder: &TableBinder) {
    for line in binder.render() {
        info!("{}", line);
    }
}
