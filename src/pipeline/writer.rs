use tokio::sync::mpsc;
use tracing::{info, warn};

use super::tally::Tally;
use crate::codec::StoreItem;
use crate::store::KvStore;

/// One shard writer, exclusively bound to one store instance
///
/// Drains its shard queue until it is closed and empty, writing each item
/// to the store. A failed write is logged and counted; it is never retried
/// and never stops the worker. Exactly one tally is emitted on exit.
pub async fn write_shard<S: KvStore>(
    device_type: String,
    items: async_channel::Receiver<StoreItem>,
    mut store: S,
    results: mpsc::Sender<Tally>,
) {
    let mut tally = Tally::default();

    while let Ok(item) = items.recv().await {
        match store.set(&item.key, &item.payload).await {
            Ok(()) => tally.processed += 1,
            Err(e) => {
                warn!(device_type = %device_type, key = %item.key, error = %e, "write failed");
                tally.errors += 1;
            }
        }
    }

    info!(
        device_type = %device_type,
        processed = tally.processed,
        errors = tally.errors,
        "shard writer finished"
    );
    let _ = results.send(tally).await;
}
