//! Prelude module for convenient imports
//!
//! Import everything you need with: `use memcload::prelude::*;`

// Domain types
pub use crate::domain::DeviceApps;

// Configuration
pub use crate::config::{ConfigError, LoaderConfig, ShardSpec};

// IO types
pub use crate::io::{IoError, feed_lines, parse_line};

// Codec types
pub use crate::codec::{CodecError, Payload, StoreItem, decode_payload, encode_record};

// Store types
pub use crate::store::{KvStore, MemcacheStore, MemoryStore, StoreError};

// Pipeline types
pub use crate::pipeline::{
    LoadSummary, NORMAL_ERR_RATE, PipelineError, ShardTable, Tally, load,
};

// App types
pub use crate::app::{AppError, Cli, CliApp, init_logging};
