use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use super::error::StoreError;
use super::traits::KvStore;

/// In-memory store backend for tests and local runs
///
/// Clones share the same underlying map, so a test can keep one handle for
/// inspection while the pipeline owns another.
#[derive(Clone, Default)]
pub struct MemoryStore {
    data: Arc<DashMap<String, Bytes>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.data.get(key).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn keys(&self) -> Vec<String> {
        self.data.iter().map(|entry| entry.key().clone()).collect()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.data
            .insert(key.to_string(), Bytes::copy_from_slice(value));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get() {
        let mut store = MemoryStore::new();
        store.set("idfa:abc", b"payload").await.unwrap();

        assert_eq!(store.get("idfa:abc").unwrap(), Bytes::from_static(b"payload"));
        assert!(store.get("idfa:other").is_none());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn set_overwrites() {
        let mut store = MemoryStore::new();
        store.set("k", b"old").await.unwrap();
        store.set("k", b"new").await.unwrap();

        assert_eq!(store.get("k").unwrap(), Bytes::from_static(b"new"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn clones_share_data() {
        let store = MemoryStore::new();
        let mut writer = store.clone();
        writer.set("k", b"v").await.unwrap();

        assert!(!store.is_empty());
        assert_eq!(store.keys(), vec!["k".to_string()]);
    }
}
