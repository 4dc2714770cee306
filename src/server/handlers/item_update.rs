use crate::item::context::RequestContext;
use crate::item::resolvers::ItemResolvers;
use crate::server::convert::{item_to_proto, update_input_from_proto};
use crate::server::error_mapping::item_error_to_status;
use crate::server::proto::{Item, UpdateItemRequest};
use tonic::{Response, Status};
use tracing::info;

pub async fn update_item(
    resolvers: &ItemResolvers,
    ctx: &RequestContext,
    req: UpdateItemRequest,
) -> Result<Response<Item>, Status> {
    match resolvers.update_item(ctx, update_input_from_proto(req)).await {
        Ok(item) => {
            info!(
                request_id = %ctx.event().request_id,
                item_id = %item.id,
                "Item updated"
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
