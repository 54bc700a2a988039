use std::collections::HashSet;
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors caught before the pipeline starts
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("worker count must be at least 1")]
    NoWorkers,

    #[error("queue capacity must be at least 1")]
    NoCapacity,

    #[error("at least one shard must be configured")]
    NoShards,

    #[error("duplicate shard for device type: {0}")]
    DuplicateShard(String),
}

/// One store shard: a device type and the address serving it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardSpec {
    pub device_type: String,
    pub addr: String,
}

impl ShardSpec {
    pub fn new(device_type: impl Into<String>, addr: impl Into<String>) -> Self {
        Self {
            device_type: device_type.into(),
            addr: addr.into(),
        }
    }
}

/// Immutable configuration for one load run
///
/// Built once at startup and passed by reference into every component.
/// The shard table is the single source of truth for the device-type set:
/// it drives both writer construction and router lookup.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Glob pattern selecting input files
    pub pattern: String,
    /// Number of parse-and-route workers
    pub workers: usize,
    /// Capacity of the line queue and of each shard queue
    pub buffer: usize,
    /// One store shard per known device type
    pub shards: Vec<ShardSpec>,
    /// Append log output to this file instead of stderr
    pub logfile: Option<PathBuf>,
}

impl LoaderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        if self.buffer == 0 {
            return Err(ConfigError::NoCapacity);
        }
        if self.shards.is_empty() {
            return Err(ConfigError::NoShards);
        }

        let mut seen = HashSet::new();
        for spec in &self.shards {
            if !seen.insert(spec.device_type.as_str()) {
                return Err(ConfigError::DuplicateShard(spec.device_type.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> LoaderConfig {
        LoaderConfig {
            pattern: "/tmp/*.tsv.gz".to_string(),
            workers: 4,
            buffer: 100,
            shards: vec![
                ShardSpec::new("idfa", "127.0.0.1:33013"),
                ShardSpec::new("gaid", "127.0.0.1:33014"),
            ],
            logfile: None,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn zero_workers_rejected() {
        let config = LoaderConfig {
            workers: 0,
            ..valid_config()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoWorkers)));
    }

    #[test]
    fn zero_buffer_rejected() {
        let config = LoaderConfig {
            buffer: 0,
            ..valid_config()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoCapacity)));
    }

    #[test]
    fn empty_shards_rejected() {
        let config = LoaderConfig {
            shards: vec![],
            ..valid_config()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoShards)));
    }

    #[test]
    fn duplicate_device_type_rejected() {
        let config = LoaderConfig {
            shards: vec![
                ShardSpec::new("idfa", "127.0.0.1:33013"),
                ShardSpec::new("idfa", "127.0.0.1:33014"),
            ],
            ..valid_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateShard(t)) if t == "idfa"
        ));
    }
}
