//! Ownership-enforcing CRUD policy over the item store.
//!
//! Authorization checks that depend on stored state are never done with a
//! read followed by a write. They are expressed as conditions the store
//! evaluates atomically with the write:
//!
//! | Operation | Condition |
//! |-----------|-----------|
//! | create | `attribute_not_exists(id)` |
//! | update | `ownerId = caller AND attribute_exists(id)` |
//! | remove | `ownerId = caller` |
//!
//! The controller keeps no state of its own and never retries.

use crate::item::core::{
    Affirmative, CreateItemInput, IdGenerator, Item, ItemError, OwnerId, UpdateItemInput,
    UuidIdGenerator,
};
use crate::item::store::{Attribute, Condition, ItemFields, ItemStore, StoreError};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ItemController {
    store: Arc<dyn ItemStore>,
    ids: Arc<dyn IdGenerator>,
}

impl ItemController {
    /// Controller over `store`, minting random UUID ids.
    #[must_use]
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self::with_id_generator(store, Arc::new(UuidIdGenerator))
    }

    #[must_use]
    pub fn with_id_generator(store: Arc<dyn ItemStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    /// Any caller may read any item by id. A missing id is `Ok(None)`.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Item>, ItemError> {
        Ok(self.store.get_by_id(id).await?)
    }

    /// Items of `owner_id`, through the owner index. Listing another owner's
    /// items is allowed.
    pub async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Item>, ItemError> {
        Ok(self.store.list_by_owner(owner_id).await?)
    }

    /// Create an item owned by `owner_id` under a freshly generated id.
    ///
    /// Any id in `input` is ignored. Without an owner nothing is written.
    pub async fn create(
        &self,
        input: CreateItemInput,
        owner_id: Option<&OwnerId>,
    ) -> Result<Item, ItemError> {
        let owner_id = owner_id.ok_or(ItemError::Unauthorized)?;
        let CreateItemInput {
            id: _,
            name,
            description,
        } = input;

        let id = self.ids.next_id();
        let fields = ItemFields {
            owner_id: Some(owner_id.to_string()),
            name,
            description,
        };
        let condition = Condition::not_exists(Attribute::Id);

        match self.store.conditional_write(&id, fields, &condition).await {
            Ok(item) => Ok(item),
            Err(StoreError::ConditionFailed) => Err(ItemError::AlreadyExists(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Update the mutable fields of an item the caller owns.
    ///
    /// Any `owner_id` in `input` is replaced by the caller's identity. A
    /// missing item and an item owned by someone else fail the same way.
    pub async fn update(
        &self,
        input: UpdateItemInput,
        owner_id: Option<&OwnerId>,
    ) -> Result<Item, ItemError> {
        let owner_id = owner_id.ok_or(ItemError::Unauthorized)?;
        let UpdateItemInput {
            id,
            owner_id: _,
            name,
            description,
        } = input;

        let fields = ItemFields {
            owner_id: Some(owner_id.to_string()),
            name,
            description,
        };
        let condition = Condition::equals(Attribute::OwnerId, owner_id.as_str())
            .and(Condition::exists(Attribute::Id));

        match self.store.conditional_write(&id, fields, &condition).await {
            Ok(item) => Ok(item),
            Err(StoreError::ConditionFailed) => Err(ItemError::OwnershipConflict),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete an item the caller owns.
    pub async fn remove(
        &self,
        id: &str,
        owner_id: Option<&OwnerId>,
    ) -> Result<Affirmative, ItemError> {
        let owner_id = owner_id.ok_or(ItemError::Unauthorized)?;
        let condition = Condition::equals(Attribute::OwnerId, owner_id.as_str());

        match self.store.conditional_delete(id, &condition).await {
            Ok(()) => Ok(Affirmative::yes()),
            Err(StoreError::ConditionFailed) => Err(ItemError::DeleteConflict),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
