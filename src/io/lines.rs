use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use tracing::{info, warn};

use super::error::IoError;

/// Feed every non-empty line of every readable file into the line queue
///
/// Files are processed strictly sequentially, in the order given. A file
/// that cannot be opened or gunzipped is logged and skipped; the run
/// continues with the next one. The queue is NOT closed here; the
/// orchestrator owns queue lifetimes.
///
/// Sends block once the queue is full, so a slow consumer throttles file
/// reading. Runs synchronous IO and is meant to be driven from
/// `tokio::task::spawn_blocking`.
///
/// Returns the number of lines fed.
pub fn feed_lines(files: &[PathBuf], queue: &async_channel::Sender<String>) -> u64 {
    let mut fed = 0;
    for path in files {
        match feed_file(path, queue) {
            Ok(count) => fed += count,
            Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable file"),
        }
    }
    fed
}

/// Stream one gzip file into the queue, trimming and dropping empty lines
fn feed_file(path: &Path, queue: &async_channel::Sender<String>) -> Result<u64, IoError> {
    info!(path = %path.display(), "processing file");

    let file = File::open(path)?;
    let reader = BufReader::new(GzDecoder::new(file));

    let mut fed = 0;
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if queue.send_blocking(line.to_string()).is_err() {
            // Queue closed under us; nothing downstream wants more lines.
            break;
        }
        fed += 1;
    }

    Ok(fed)
}
