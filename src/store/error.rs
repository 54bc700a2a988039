use std::io;
use thiserror::Error;

/// Errors from talking to a key-value store instance
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid store key: {0}")]
    InvalidKey(String),

    #[error("store rejected write: {0}")]
    Rejected(String),

    #[error("store closed the connection")]
    Disconnected,
}
