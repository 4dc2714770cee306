//! In-process item table with an owner index. Shared by the memory and
//! file adapters; callers provide the locking.

use super::condition::Condition;
use super::{ItemFields, StoreError};
use crate::item::core::Item;
use chrono::{DateTime, Utc};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Default)]
pub(crate) struct ItemTable {
    items: HashMap<String, Item>,
    by_owner: HashMap<String, BTreeSet<String>>,
}

impl ItemTable {
    pub(crate) fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut table = Self::default();
        for item in items {
            table.insert(item);
        }
        table
    }

    pub(crate) fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub(crate) fn list_by_owner(&self, owner_id: &str) -> Vec<Item> {
        self.by_owner
            .get(owner_id)
            .map(|ids| ids.iter().filter_map(|id| self.items.get(id)).cloned().collect())
            .unwrap_or_default()
    }

    /// All items ordered by id, for persistence.
    pub(crate) fn snapshot(&self) -> Vec<Item> {
        let mut items: Vec<Item> = self.items.values().cloned().collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        items
    }

    /// Merge `fields` into the record at `key` if `condition` holds,
    /// creating the record when absent. Returns the post-write image.
    pub(crate) fn write(
        &mut self,
        key: &str,
        fields: ItemFields,
        condition: &Condition,
        now: DateTime<Utc>,
    ) -> Result<Item, StoreError> {
        let current = self.items.get(key);
        if !condition.evaluate(current) {
            return Err(StoreError::ConditionFailed);
        }

        let next = match current {
            Some(existing) => {
                let mut next = existing.clone();
                if let Some(owner_id) = fields.owner_id {
                    next.owner_id = owner_id;
                }
                if fields.name.is_some() {
                    next.name = fields.name;
                }
                if fields.description.is_some() {
                    next.description = fields.description;
                }
                next.updated_at = now;
                next
            }
            None => {
                let owner_id = fields
                    .owner_id
                    .ok_or_else(|| StoreError::Validation("ownerId is required".to_string()))?;
                Item {
                    id: key.to_string(),
                    owner_id,
                    name: fields.name,
                    description: fields.description,
                    created_at: now,
                    updated_at: now,
                }
            }
        };

        self.remove(key);
        self.insert(next.clone());
        Ok(next)
    }

    /// Delete the record at `key` if `condition` holds. Deleting an absent
    /// key under a passing condition is a no-op.
    pub(crate) fn delete(
        &mut self,
        key: &str,
        condition: &Condition,
    ) -> Result<Option<Item>, StoreError> {
        if !condition.evaluate(self.items.get(key)) {
            return Err(StoreError::ConditionFailed);
        }
        Ok(self.remove(key))
    }

    fn insert(&mut self, item: Item) {
        self.by_owner
            .entry(item.owner_id.clone())
            .or_default()
            .insert(item.id.clone());
        self.items.insert(item.id.clone(), item);
    }

    fn remove(&mut self, key: &str) -> Option<Item> {
        let removed = self.items.remove(key)?;
        if let Some(ids) = self.by_owner.get_mut(&removed.owner_id) {
            ids.remove(key);
            if ids.is_empty() {
                self.by_owner.remove(&removed.owner_id);
            }
        }
        Some(removed)
    }
}
