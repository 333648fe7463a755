use crate::error::StoreError;
use crate::store::RecordStore;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// File-backed record store: one detail file per order id under a
/// configured directory. The directory must exist up front; its absence
/// is the misconfigured-schema case surfaced during validation.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn detail_path(&self, order_id: &str) -> PathBuf {
        self.dir.join(order_id)
    }
}

impl RecordStore for FileStore {
    async fn detail_field_exists(&self) -> Result<bool, StoreError> {
        match fs::metadata(&self.dir).await {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    async fn write_detail(&self, order_id: &str, detail: &str) -> Result<(), StoreError> {
        let path = self.detail_path(order_id);
        info!("order '{}' details write, path '{}'", order_id, path.display());
        match fs::write(&path, detail.as_bytes()).await {
            Ok(()) => Ok(()),
            // store directory disappeared after validation
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StoreError::RecordMissing(order_id.to_string()))
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    async fn read_detail(&self, order_id: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.detail_path(order_id)).await {
            Ok(detail) => Ok(Some(detail)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}
