use super::table::ItemTable;
use super::{Condition, ItemFields, ItemStore, StoreError};
use crate::item::core::Item;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

/// Item table held in process memory.
///
/// Reads share the lock; each conditional write or delete evaluates its
/// condition and applies the change under one exclusive guard.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    table: RwLock<ItemTable>,
}

impl InMemoryItemStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn get_by_id(&self, id: &str) -> Result<Option<Item>, StoreError> {
        Ok(self.table.read().await.get(id).cloned())
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Item>, StoreError> {
        Ok(self.table.read().await.list_by_owner(owner_id))
    }

    async fn conditional_write(
        &self,
        key: &str,
        fields: ItemFields,
        condition: &Condition,
    ) -> Result<Item, StoreError> {
        debug!(key, %condition, "memory store: conditional write");
        self.table.write().await.write(key, fields, condition, Utc::now())
    }

    async fn conditional_delete(
        &self,
        key: &str,
        condition: &Condition,
    ) -> Result<(), StoreError> {
        debug!(key, %condition, "memory store: conditional delete");
        self.table.write().await.delete(key, condition).map(|_| ())
    }
}
