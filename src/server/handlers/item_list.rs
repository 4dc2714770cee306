use crate::item::context::RequestContext;
use crate::item::resolvers::ItemResolvers;
use crate::server::convert::{item_to_proto, query_from_proto};
use crate::server::error_mapping::item_error_to_status;
use crate::server::proto::{ListItemsRequest, ListItemsResponse};
use tonic::{Response, Status};

pub async fn list_items(
    resolvers: &ItemResolvers,
    ctx: &RequestContext,
    req: ListItemsRequest,
) -> Result<Response<ListItemsResponse>, Status> {
    match resolvers.items(ctx, query_from_proto(req)).await {
        Ok(items) => Ok(Response::new(ListItemsResponse {
            items: items.iter().map(item_to_proto).collect(),
        })),
        Err(e) => Err(item_error_to_status(
            &ctx.event().operation,
            &ctx.event().request_id.to_string(),
            &e,
        )),
    }
}
