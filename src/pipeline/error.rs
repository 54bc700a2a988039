use thiserror::Error;

use crate::config::ConfigError;

/// Errors that abort a load before or while the pipeline runs
///
/// Record-level failures never surface here; they are counted into the
/// tallies instead.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("line source task failed")]
    SourceFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_conversion() {
        let err = PipelineError::from(ConfigError::NoWorkers);
        match err {
            PipelineError::Config(ConfigError::NoWorkers) => {}
            _ => panic!("Expected Config error variant"),
        }
    }

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            PipelineError::SourceFailed.to_string(),
            "line source task failed"
        );
    }
}
