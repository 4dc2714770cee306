//! Query and mutation entry points over a per-request context.
//!
//! Each resolver is a thin call into [`ItemController`]. The transport builds
//! the [`RequestContext`]; resolvers only read the caller's identity from it.

use crate::item::context::RequestContext;
use crate::item::controller::ItemController;
use crate::item::core::{
    Affirmative, CreateItemInput, Item, ItemError, ItemQuery, ItemReference, UpdateItemInput,
};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ItemResolvers {
    controller: Arc<ItemController>,
}

impl ItemResolvers {
    #[must_use]
    pub fn new(controller: Arc<ItemController>) -> Self {
        Self { controller }
    }

    /// `item(id)`: any caller may read any item.
    pub async fn item(&self, ctx: &RequestContext, id: &str) -> Result<Option<Item>, ItemError> {
        debug!(request_id = %ctx.event().request_id, id, "resolving item");
        self.controller.get_by_id(id).await
    }

    /// `items(query)`: the items of `query.owner_id`. A query without an
    /// owner matches nothing.
    pub async fn items(
        &self,
        ctx: &RequestContext,
        query: ItemQuery,
    ) -> Result<Vec<Item>, ItemError> {
        debug!(request_id = %ctx.event().request_id, owner_id = ?query.owner_id, "resolving items");
        match query.owner_id.as_deref().map(str::trim) {
            Some(owner_id) if !owner_id.is_empty() => {
                self.controller.list_by_owner(owner_id).await
            }
            _ => Ok(Vec::new()),
        }
    }

    pub async fn create_item(
        &self,
        ctx: &RequestContext,
        input: CreateItemInput,
    ) -> Result<Item, ItemError> {
        self.controller.create(input, ctx.owner_id()).await
    }

    pub async fn update_item(
        &self,
        ctx: &RequestContext,
        input: UpdateItemInput,
    ) -> Result<Item, ItemError> {
        self.controller.update(input, ctx.owner_id()).await
    }

    pub async fn delete_item(
        &self,
        ctx: &RequestContext,
        id: &str,
    ) -> Result<Affirmative, ItemError> {
        self.controller.remove(id, ctx.owner_id()).await
    }

    /// Entity reference resolution: another subgraph holds `{id}` and wants
    /// the full record.
    pub async fn resolve_reference(
        &self,
        ctx: &RequestContext,
        reference: ItemReference,
    ) -> Result<Option<Item>, ItemError> {
        debug!(request_id = %ctx.event().request_id, id = %reference.id, "resolving item reference");
        self.controller.get_by_id(&reference.id).await
    }
}
