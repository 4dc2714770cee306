use crate::item::context::RequestContext;
use crate::item::resolvers::ItemResolvers;
use crate::server::convert::item_to_proto;
use crate::server::error_mapping::item_error_to_status;
use crate::server::proto::{GetItemRequest, GetItemResponse};
use tonic::{Response, Status};

pub async fn get_item(
    resolvers: &ItemResolvers,
    ctx: &RequestContext,
    req: GetItemRequest,
) -> Result<Response<GetItemResponse>, Status> {
    let GetItemRequest { id } = req;
    match resolvers.item(ctx, &id).await {
        Ok(item) => Ok(Response::new(GetItemResponse {
            item: item.as_ref().map(item_to_proto),
        })),
        Err(e) => Err(item_error_to_status(
            &ctx.event().operation,
            &ctx.event().request_id.to_string(),
            &e,
        )),
    }
}
