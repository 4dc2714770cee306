use crate::item::context::RequestContext;
use crate::item::resolvers::ItemResolvers;
use crate::server::convert::{item_to_proto, reference_from_proto};
use crate::server::error_mapping::item_error_to_status;
use crate::server::proto::{GetItemResponse, ItemReference};
use tonic::{Response, Status};

pub async fn resolve_item_reference(
    resolvers: &ItemResolvers,
    ctx: &RequestContext,
    reference: ItemReference,
) -> Result<Response<GetItemResponse>, Status> {
    match resolvers
        .resolve_reference(ctx, reference_from_proto(reference))
        .await
    {
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
