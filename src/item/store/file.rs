//! Item table persisted as a JSON document on local disk.

use super::table::ItemTable;
use super::{Condition, ItemFields, ItemStore, StoreError};
use crate::item::core::Item;
use crate::utils::atomic_write;
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Version of the on-disk table document.
const TABLE_SCHEMA_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TableFile {
    schema_version: u32,
    items: Vec<Item>,
}

/// Item table stored in a single JSON file.
///
/// The whole table is held in memory and the file is rewritten atomically
/// (temp file + rename) on every mutation, while the table lock is held. A
/// mutation is applied to a copy of the table and only becomes visible once
/// the file write has succeeded, so a failed write leaves both the file and
/// the in-memory table unchanged.
#[derive(Debug)]
pub struct FileItemStore {
    path: PathBuf,
    table: Mutex<ItemTable>,
}

impl FileItemStore {
    /// Open the table at `path`, creating parent directories as needed. A
    /// missing file is an empty table.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let items = if fs::try_exists(&path).await? {
            let content = fs::read_to_string(&path).await?;
            let file: TableFile = serde_json::from_str(&content)?;
            if file.schema_version > TABLE_SCHEMA_VERSION {
                return Err(StoreError::Validation(format!(
                    "table schema version {} is newer than supported version {TABLE_SCHEMA_VERSION}",
                    file.schema_version
                )));
            }
            file.items
        } else {
            Vec::new()
        };

        info!(path = %path.display(), count = items.len(), "Opened item table");
        Ok(Self {
            path,
            table: Mutex::new(ItemTable::from_items(items)),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, table: &ItemTable) -> Result<(), StoreError> {
        let file = TableFile {
            schema_version: TABLE_SCHEMA_VERSION,
            items: table.snapshot(),
        };
        let content = serde_json::to_string_pretty(&file)?;
        atomic_write(&self.path, &content).await?;
        Ok(())
    }
}

#[async_trait]
impl ItemStore for FileItemStore {
    async fn get_by_id(&self, id: &str) -> Result<Option<Item>, StoreError> {
        Ok(self.table.lock().await.get(id).cloned())
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Item>, StoreError> {
        Ok(self.table.lock().await.list_by_owner(owner_id))
    }

    async fn conditional_write(
        &self,
        key: &str,
        fields: ItemFields,
        condition: &Condition,
    ) -> Result<Item, StoreError> {
        debug!(key, %condition, "file store: conditional write");
        let mut guard = self.table.lock().await;
        let mut next = guard.clone();
        let item = next.write(key, fields, condition, Utc::now())?;
        self.persist(&next).await?;
        *guard = next;
        Ok(item)
    }

    async fn conditional_delete(
        &self,
        key: &str,
        condition: &Condition,
    ) -> Result<(), StoreError> {
        debug!(key, %condition, "file store: conditional delete");
        let mut guard = self.table.lock().await;
        let mut next = guard.clone();
        if next.delete(key, condition)?.is_some() {
            self.persist(&next).await?;
            *guard = next;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::store::Attribute;
    use tempfile::tempdir;

    fn owned_by(owner: &str) -> ItemFields {
        ItemFields {
            owner_id: Some(owner.to_string()),
            name: Some("Niner".to_string()),
            description: Some("My favorite number".to_string()),
        }
    }

    #[tokio::test]
    async fn test_open_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileItemStore::open(dir.path().join("nested").join("items.json"))
            .await
            .unwrap();
        assert!(store.list_by_owner("anyone").await.unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_writes_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");

        let store = FileItemStore::open(&path).await.unwrap();
        let created = store
            .conditional_write("niner", owned_by("yourself"), &Condition::not_exists(Attribute::Id))
            .await
            .unwrap();
        drop(store);

        let reopened = FileItemStore::open(&path).await.unwrap();
        assert_eq!(reopened.get_by_id("niner").await.unwrap(), Some(created));
        assert_eq!(reopened.list_by_owner("yourself").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_is_persisted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        let store = FileItemStore::open(&path).await.unwrap();
        store.conditional_write("niner", owned_by("yourself"), &Condition::Always).await.unwrap();
        store
            .conditional_delete("niner", &Condition::equals(Attribute::OwnerId, "yourself"))
            .await
            .unwrap();

        let reopened = FileItemStore::open(&path).await.unwrap();
        assert!(reopened.get_by_id("niner").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_condition_does_not_touch_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        let store = FileItemStore::open(&path).await.unwrap();
        store.conditional_write("niner", owned_by("yourself"), &Condition::Always).await.unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let result = store
            .conditional_delete("niner", &Condition::equals(Attribute::OwnerId, "someone-else"))
            .await;
        assert!(matches!(result, Err(StoreError::ConditionFailed)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[tokio::test]
    async fn test_failed_persist_leaves_table_unchanged() {
        let dir = tempdir().unwrap();
        let table_dir = dir.path().join("data");
        let store = FileItemStore::open(table_dir.join("items.json")).await.unwrap();
        let original = store
            .conditional_write("niner", owned_by("yourself"), &Condition::not_exists(Attribute::Id))
            .await
            .unwrap();

        // A regular file where the table directory was makes every write fail.
        std::fs::remove_dir_all(&table_dir).unwrap();
        std::fs::write(&table_dir, "not a directory").unwrap();

        let patch = ItemFields {
            description: Some("updated".to_string()),
            ..ItemFields::default()
        };
        let owned = Condition::equals(Attribute::OwnerId, "yourself");
        let write = store
            .conditional_write("niner", patch, &owned.clone().and(Condition::exists(Attribute::Id)))
            .await;
        assert!(matches!(write, Err(StoreError::Io(_))));

        let delete = store.conditional_delete("niner", &owned).await;
        assert!(matches!(delete, Err(StoreError::Io(_))));

        assert_eq!(store.get_by_id("niner").await.unwrap(), Some(original.clone()));
        assert_eq!(store.list_by_owner("yourself").await.unwrap(), vec![original]);
    }

    #[tokio::test]
    async fn test_rejects_newer_schema_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, r#"{"schemaVersion": 99, "items": []}"#).unwrap();
        let result = FileItemStore::open(&path).await;
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, "not json").unwrap();
        let result = FileItemStore::open(&path).await;
        assert!(matches!(result, Err(StoreError::Json(_))));
    }
}
