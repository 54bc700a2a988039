use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use super::error::PipelineError;
use super::router::ShardTable;
use super::tally::{LoadSummary, NORMAL_ERR_RATE, Tally};
use super::worker::parse_and_route;
use super::writer::write_shard;
use crate::config::{LoaderConfig, ShardSpec};
use crate::io::feed_lines;
use crate::store::KvStore;

/// Run one complete load
///
/// Spawns every shard writer and every parse worker before the first line
/// is read, feeds all matched files through the line queue, then drives the
/// two-phase shutdown: close the line queue, collect one tally per parse
/// worker, close the shard queues, collect one tally per writer.
///
/// `bind_store` maps each configured shard to the store instance its
/// writer will exclusively own; production binds memcached clients, tests
/// bind in-memory stores.
///
/// The returned summary's verdict is advisory: it is logged here, and a
/// degraded run is still `Ok`.
pub async fn load<S, F>(config: &LoaderConfig, mut bind_store: F) -> Result<LoadSummary, PipelineError>
where
    S: KvStore + Send + 'static,
    F: FnMut(&ShardSpec) -> S,
{
    config.validate()?;

    let files = discover_files(&config.pattern)?;
    info!(
        files = files.len(),
        workers = config.workers,
        shards = config.shards.len(),
        "starting load"
    );

    let (result_tx, mut result_rx) =
        mpsc::channel::<Tally>(config.workers + config.shards.len());
    let mut handles = Vec::with_capacity(config.workers + config.shards.len());

    // Writers first, then the parse pool: every item produced downstream
    // must already have a consumer.
    let mut queues = HashMap::new();
    for spec in &config.shards {
        let (tx, rx) = async_channel::bounded(config.buffer);
        queues.insert(spec.device_type.clone(), tx);
        handles.push(tokio::spawn(write_shard(
            spec.device_type.clone(),
            rx,
            bind_store(spec),
            result_tx.clone(),
        )));
    }
    let shards = Arc::new(ShardTable::new(queues));

    let (line_tx, line_rx) = async_channel::bounded(config.buffer);
    for _ in 0..config.workers {
        handles.push(tokio::spawn(parse_and_route(
            line_rx.clone(),
            Arc::clone(&shards),
            result_tx.clone(),
        )));
    }
    drop(result_tx);

    // The line source does synchronous file IO; run it on a blocking
    // thread, sequenced by this task.
    let feeder_tx = line_tx.clone();
    let feeder = tokio::task::spawn_blocking(move || feed_lines(&files, &feeder_tx));
    let fed = feeder.await.map_err(|_| PipelineError::SourceFailed)?;

    // First shutdown signal: parse workers drain what is queued and exit.
    line_tx.close();

    let mut summary = LoadSummary::default();
    collect_tallies(&mut result_rx, config.workers, &mut summary).await;

    // Every line is now routed or counted; second shutdown signal.
    shards.close_all();
    collect_tallies(&mut result_rx, config.shards.len(), &mut summary).await;

    for result in join_all(handles).await {
        if result.is_err() {
            warn!("pipeline task panicked");
        }
    }

    info!(
        lines = fed,
        processed = summary.processed,
        errors = summary.errors,
        "load finished"
    );
    if summary.is_acceptable() {
        info!(rate = summary.error_rate(), "acceptable error rate, successful load");
    } else {
        error!(
            rate = summary.error_rate(),
            threshold = NORMAL_ERR_RATE,
            "high error rate, failed load"
        );
    }

    Ok(summary)
}

/// Match the glob pattern and sort the results for deterministic file order
fn discover_files(pattern: &str) -> Result<Vec<PathBuf>, PipelineError> {
    let mut files: Vec<PathBuf> = glob::glob(pattern)?.filter_map(Result::ok).collect();
    files.sort();
    Ok(files)
}

async fn collect_tallies(
    results: &mut mpsc::Receiver<Tally>,
    count: usize,
    summary: &mut LoadSummary,
) {
    for _ in 0..count {
        match results.recv().await {
            Some(tally) => summary.absorb(tally),
            // A worker died without reporting; its join handle logs it.
            None => break,
        }
    }
}
