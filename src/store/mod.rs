//! Order record store collaborators.
//!
//! The workflow owns no long-lived state; provisioning details live in
//! an external per-order record keyed by order id. Updates are
//! last-writer-wins per order; records are never deleted here (their
//! lifecycle belongs to the surrounding order-management system).

use crate::error::StoreError;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

pub trait RecordStore {
    /// Whether the provisioning-details field was set up at all. Checked
    /// during request validation, before any network call.
    fn detail_field_exists(
        &self,
    ) -> impl std::future::Future<Output = Result<bool, StoreError>> + Send;

    /// Write (or overwrite) the detail text for an order.
    fn write_detail(
        &self,
        order_id: &str,
        detail: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Read the detail text for an order, if one was recorded.
    fn read_detail(
        &self,
        order_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, StoreError>> + Send;
}
