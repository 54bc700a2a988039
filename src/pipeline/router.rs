use std::collections::HashMap;

use crate::codec::StoreItem;

/// Routing table from device type to its shard queue
///
/// Built once at startup from the configured shards and read-only for the
/// rest of the run. Closing the queues is the second shutdown signal of
/// the load protocol and happens exactly once, driven by the orchestrator.
pub struct ShardTable {
    queues: HashMap<String, async_channel::Sender<StoreItem>>,
}

impl ShardTable {
    pub fn new(queues: HashMap<String, async_channel::Sender<StoreItem>>) -> Self {
        Self { queues }
    }

    /// Queue for a device type, or None for an unknown type
    pub fn route(&self, device_type: &str) -> Option<&async_channel::Sender<StoreItem>> {
        self.queues.get(device_type)
    }

    pub fn len(&self) -> usize {
        self.queues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }

    /// Close every shard queue; writers drain what remains and exit
    pub fn close_all(&self) {
        for queue in self.queues.values() {
            queue.close();
        }
    }
}
