//! Conversions between domain types and their protobuf messages.

use crate::item::core::{CreateItemInput, Item, ItemQuery, ItemReference, UpdateItemInput};
use crate::server::proto;

pub fn item_to_proto(item: &Item) -> proto::Item {
    proto::Item {
        id: item.id.clone(),
        owner_id: item.owner_id.clone(),
        name: item.name.clone(),
        description: item.description.clone(),
        created_at: item.created_at.to_rfc3339(),
        updated_at: item.updated_at.to_rfc3339(),
    }
}

pub fn create_input_from_proto(req: proto::CreateItemRequest) -> CreateItemInput {
    CreateItemInput {
        id: None,
        name: req.name,
        description: req.description,
    }
}

/// A request without an `input` message targets the empty id, which never
/// exists, so the update fails its condition.
pub fn update_input_from_proto(req: proto::UpdateItemRequest) -> UpdateItemInput {
    let input = req.input.unwrap_or_default();
    UpdateItemInput {
        id: input.id,
        owner_id: None,
        name: input.name,
        description: input.description,
    }
}

pub fn query_from_proto(req: proto::ListItemsRequest) -> ItemQuery {
    ItemQuery {
        owner_id: req.query.and_then(|q| q.owner_id),
    }
}

pub fn reference_from_proto(reference: proto::ItemReference) -> ItemReference {
    ItemReference { id: reference.id }
}
