use async_trait::async_trait;

use super::error::StoreError;

/// Write access to one key-value store instance
///
/// Each shard writer owns its store exclusively, so methods take `&mut
/// self` and implementations need no internal locking.
#[async_trait]
pub trait KvStore: Send {
    /// Store `value` under `key`, overwriting any existing value
    async fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}
