use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::router::ShardTable;
use super::tally::Tally;
use crate::codec::encode_record;
use crate::io::parse_line;

/// One parse-and-route worker
///
/// Drains the shared line queue until it is closed and empty. Each line is
/// decoded, encoded, and pushed onto the shard queue for its device type;
/// every failure along the way is counted locally and the line dropped.
/// Exactly one tally (processed = 0, the accumulated error count) is
/// emitted on exit.
pub async fn parse_and_route(
    lines: async_channel::Receiver<String>,
    shards: Arc<ShardTable>,
    results: mpsc::Sender<Tally>,
) {
    let mut errors: u64 = 0;

    while let Ok(line) = lines.recv().await {
        let record = match parse_line(&line) {
            Ok(record) => record,
            Err(e) => {
                debug!(error = %e, "dropping malformed line");
                errors += 1;
                continue;
            }
        };

        let item = match encode_record(&record) {
            Ok(item) => item,
            Err(e) => {
                warn!(key = %record.store_key(), error = %e, "dropping unencodable record");
                errors += 1;
                continue;
            }
        };

        match shards.route(&record.device_type) {
            Some(queue) => {
                // Blocking when the shard queue is full is the
                // backpressure that keeps memory bounded.
                if queue.send(item).await.is_err() {
                    errors += 1;
                }
            }
            None => {
                warn!(device_type = %record.device_type, "unknown device type");
                errors += 1;
            }
        }
    }

    let _ = results.send(Tally::errors_only(errors)).await;
}
