//! Item store adapter: the primitive operations of the backing table.
//!
//! Adapters carry no authorization logic, no retries and no caching. Every
//! call is a single round-trip; anything other than a failed condition is
//! reported as-is.

mod condition;
mod file;
mod memory;
mod table;

pub use condition::{Attribute, Condition};
pub use file::FileItemStore;
pub use memory::InMemoryItemStore;

use crate::config::{StoreBackend, StoreConfig};
use crate::item::core::Item;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Conditional check failed")]
    ConditionFailed,
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Attribute values to merge into a record. `None` leaves the stored value
/// as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFields {
    pub owner_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Primitive operations of the item table.
#[async_trait]
pub trait ItemStore: Send + Sync + fmt::Debug {
    /// Point lookup by primary key. A miss is `Ok(None)`.
    async fn get_by_id(&self, id: &str) -> Result<Option<Item>, StoreError>;

    /// Lookup through the owner index. Order is not guaranteed.
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Item>, StoreError>;

    /// Merge `fields` into the record at `key` (creating it when absent) if
    /// `condition` holds for the current record, atomically. Returns the
    /// post-write image.
    async fn conditional_write(
        &self,
        key: &str,
        fields: ItemFields,
        condition: &Condition,
    ) -> Result<Item, StoreError>;

    /// Delete the record at `key` if `condition` holds, atomically.
    async fn conditional_delete(&self, key: &str, condition: &Condition)
        -> Result<(), StoreError>;
}

/// Open the store selected by the configuration.
pub async fn open_store(config: &StoreConfig) -> Result<Arc<dyn ItemStore>, StoreError> {
    match config.backend {
        StoreBackend::Memory => Ok(Arc::new(InMemoryItemStore::new())),
        StoreBackend::File => {
            let path = config.table_path();
            Ok(Arc::new(FileItemStore::open(path).await?))
        }
    }
}
