use crate::item::context::RequestContext;
use crate::item::resolvers::ItemResolvers;
use crate::server::error_mapping::item_error_to_status;
use crate::server::proto::{Affirmative, DeleteItemRequest};
use tonic::{Response, Status};
use tracing::info;

pub async fn delete_item(
    resolvers: &ItemResolvers,
    ctx: &RequestContext,
    req: DeleteItemRequest,
) -> Result<Response<Affirmative>, Status> {
    let DeleteItemRequest { id } = req;
    match resolvers.delete_item(ctx, &id).await {
        Ok(ack) => {
            info!(request_id = %ctx.event().request_id, item_id = %id, "Item deleted");
            Ok(Response::new(Affirmative { ok: ack.ok }))
        }
        Err(e) => Err(item_error_to_status(
            &ctx.event().operation,
            &ctx.event().request_id.to_string(),
            &e,
        )),
    }
}
