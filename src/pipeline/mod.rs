pub mod error;
pub mod loader;
pub mod router;
pub mod tally;
pub mod worker;
pub mod writer;

// Re-export commonly used types
pub use error::PipelineError;
pub use loader::load;
pub use router::ShardTable;
pub use tally::{LoadSummary, NORMAL_ERR_RATE, Tally};
pub use worker::parse_and_route;
pub use writer::write_shard;
