use crate::error::StoreError;
use crate::store::RecordStore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory record store: order_id -> detail text
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    detail_field_present: bool,
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            detail_field_present: true,
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// A store whose provisioning-details field was never set up.
    pub fn without_detail_field() -> Self {
        Self {
            detail_field_present: false,
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl RecordStore for MemoryStore {
    async fn detail_field_exists(&self) -> Result<bool, StoreError> {
        Ok(self.detail_field_present)
    }

    async fn write_detail(&self, order_id: &str, detail: &str) -> Result<(), StoreError> {
        let mut map = self.inner.write().await;
        map.insert(order_id.to_string(), detail.to_string());
        Ok(())
    }

    async fn read_detail(&self, order_id: &str) -> Result<Option<String>, StoreError> {
        let map = self.inner.read().await;
        Ok(map.get(order_id).cloned())
    }
}
