//! Concurrent bulk loader for device app-install logs
//!
//! Reads gzip-compressed tab-separated log files, decodes installed-apps
//! records, and writes them to per-device-type memcached instances through
//! a pipeline of bounded queues: one line queue feeding a pool of
//! parse-and-route workers, one queue per shard feeding a dedicated
//! writer. Every record-level failure is counted rather than fatal; the
//! run ends with a single error-rate verdict.

pub mod app;
pub mod codec;
pub mod config;
pub mod domain;
pub mod io;
pub mod pipeline;
pub mod prelude;
pub mod store;
