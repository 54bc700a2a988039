use std::future::Future;
use std::path::PathBuf;

use clap::Parser;

use super::error::AppError;
use crate::config::{LoaderConfig, ShardSpec};

/// Command-line options
///
/// One memcached address per known device type; the four flags together
/// define the shard table for the run.
#[derive(Parser, Debug)]
#[command(name = "memcload", version)]
#[command(about = "Bulk-load gzip TSV app-install logs into memcached")]
pub struct Cli {
    /// Glob pattern selecting input files
    #[arg(long, default_value = "/data/*.tsv.gz")]
    pub pattern: String,

    /// Number of parse workers
    #[arg(long, default_value_t = 4)]
    pub workers: usize,

    /// Capacity of each bounded queue
    #[arg(long, default_value_t = 100)]
    pub buffer: usize,

    /// memcached address for idfa devices
    #[arg(long, default_value = "127.0.0.1:33013")]
    pub idfa: String,

    /// memcached address for gaid devices
    #[arg(long, default_value = "127.0.0.1:33014")]
    pub gaid: String,

    /// memcached address for adid devices
    #[arg(long, default_value = "127.0.0.1:33015")]
    pub adid: String,

    /// memcached address for dvid devices
    #[arg(long, default_value = "127.0.0.1:33016")]
    pub dvid: String,

    /// Append log output to this file instead of stderr
    #[arg(long)]
    pub log: Option<PathBuf>,
}

impl Cli {
    /// Freeze the parsed options into the run configuration
    pub fn into_config(self) -> LoaderConfig {
        LoaderConfig {
            pattern: self.pattern,
            workers: self.workers,
            buffer: self.buffer,
            shards: vec![
                ShardSpec::new("idfa", self.idfa),
                ShardSpec::new("gaid", self.gaid),
                ShardSpec::new("adid", self.adid),
                ShardSpec::new("dvid", self.dvid),
            ],
            logfile: self.log,
        }
    }
}

/// Reusable CLI application runner that handles:
/// - Signal handling (SIGINT, SIGTERM, SIGHUP)
/// - Exit codes (0 = success, 1 = error, 130 = SIGINT, 143 = SIGTERM)
pub struct CliApp {
    _name: String,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            _name: name.to_string(),
        }
    }

    /// Run the application future, racing it against signal reception
    ///
    /// This function never returns - it calls std::process::exit with the
    /// appropriate code
    pub async fn run<F, Fut>(self, main_fn: F) -> !
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        let signal_fut = self.wait_for_signal();

        tokio::select! {
            result = main_fn() => {
                match result {
                    Ok(()) => std::process::exit(0),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            signal_code = signal_fut => {
                std::process::exit(signal_code);
            }
        }
    }

    /// Wait for any Unix signal (SIGINT, SIGTERM, SIGHUP) or Ctrl+C
    /// Returns the exit code to use (130 for SIGINT, 143 for SIGTERM, etc.)
    async fn wait_for_signal(&self) -> i32 {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{SignalKind, signal};

            let mut sigterm =
                signal(SignalKind::terminate()).expect("Failed to setup SIGTERM handler");
            let mut sigint =
                signal(SignalKind::interrupt()).expect("Failed to setup SIGINT handler");
            let mut sighup = signal(SignalKind::hangup()).expect("Failed to setup SIGHUP handler");

            tokio::select! {
                _ = sigterm.recv() => {
                    eprintln!("Received SIGTERM");
                    143 // 128 + 15
                }
                _ = sigint.recv() => {
                    eprintln!("Received SIGINT");
                    130 // 128 + 2
                }
                _ = sighup.recv() => {
                    eprintln!("Received SIGHUP");
                    129 // 128 + 1
                }
            }
        }

        #[cfg(not(unix))]
        {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to setup Ctrl+C handler");
            eprintln!("Received Ctrl+C");
            130
        }
    }
}
