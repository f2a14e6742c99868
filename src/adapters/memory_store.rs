use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Process-local store for ephemeral sessions and tests.
///
/// Clones share the same slots, so a second `CartStore` opened on a clone
/// sees what the first one saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<Mutex<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set` calls so far.
    pub async fn write_count(&self) -> usize {
        *self.writes.lock().await
    }

    pub async fn raw(&self, key: &str) -> Option<String> {
        self.slots.lock().await.get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.lock().await;
        Ok(slots.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.lock().await;
        slots.insert(key.to_string(), value.to_string());
        *self.writes.lock().await += 1;
        Ok(())
    }
}
