use clap::Parser;
use tracing::info;

use memcload::prelude::*;

#[tokio::main]
async fn main() {
    let config = Cli::parse().into_config();

    if let Err(e) = init_logging(config.logfile.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    info!(?config, "memcload starting");

    CliApp::new("memcload")
        .run(|| run_loader(config))
        .await
}

/// Run one load against the configured memcached shards
///
/// The error-rate verdict is advisory and already logged by the loader; a
/// degraded run still exits 0.
async fn run_loader(config: LoaderConfig) -> Result<(), AppError> {
    load(&config, |spec| MemcacheStore::new(spec.addr.clone())).await?;
    Ok(())
}
