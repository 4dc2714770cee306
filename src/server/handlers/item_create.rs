use crate::item::context::RequestContext;
use crate::item::resolvers::ItemResolvers;
use crate::server::convert::{create_input_from_proto, item_to_proto};
use crate::server::error_mapping::item_error_to_status;
use crate::server::proto::{CreateItemRequest, Item};
use tonic::{Response, Status};
use tracing::info;

pub async fn create_item(
    resolvers: &ItemResolvers,
    ctx: &RequestContext,
    req: CreateItemRequest,
) -> Result<Response<Item>, Status> {
    match resolvers.create_item(ctx, create_input_from_proto(req)).await {
        Ok(item) => {
            info!(
                request_id = %ctx.event().request_id,
                item_id = %item.id,
                owner_id = %item.owner_id,
                "Item created"
            );
            Ok(Response::new(item_to_proto(&item)))
        }
        Err(e) => Err(item_error_to_status(
            &ctx.event().operation,
            &ctx.event().request_id.to_string(),
            &e,
        )),
    }
}
