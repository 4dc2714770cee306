use tonic::{Request, Response, Status};
use tracing::instrument;

use super::context::request_context;
use super::handlers;
use super::proto::items_service_server::ItemsService;
use super::proto::{
    Affirmative, CreateItemRequest, DeleteItemRequest, GetItemRequest, GetItemResponse, Item,
    ItemReference, ListItemsRequest, ListItemsResponse, UpdateItemRequest,
};
use super::ItemsGrpcService;

#[tonic::async_trait]
impl ItemsService for ItemsGrpcService {
    #[instrument(name = "grpc.get_item", skip(self, request))]
    async fn get_item(
        &self,
        request: Request<GetItemRequest>,
    ) -> Result<Response<GetItemResponse>, Status> {
        let ctx = request_context(&request, &self.owner_header, "GetItem");
        handlers::item_get::get_item(&self.resolvers, &ctx, request.into_inner()).await
    }

    #[instrument(name = "grpc.list_items", skip(self, request))]
    async fn list_items(
        &self,
        request: Request<ListItemsRequest>,
    ) -> Result<Response<ListItemsResponse>, Status> {
        let ctx = request_context(&request, &self.owner_header, "ListItems");
        handlers::item_list::list_items(&self.resolvers, &ctx, request.into_inner()).await
    }

    #[instrument(name = "grpc.create_item", skip(self, request))]
    async fn create_item(
        &self,
        request: Request<CreateItemRequest>,
    ) -> Result<Response<Item>, Status> {
        let ctx = request_context(&request, &self.owner_header, "CreateItem");
        handlers::item_create::create_item(&self.resolvers, &ctx, request.into_inner()).await
    }

    #[instrument(name = "grpc.update_item", skip(self, request))]
    async fn update_item(
        &self,
        request: Request<UpdateItemRequest>,
    ) -> Result<Response<Item>, Status> {
        let ctx = request_context(&request, &self.owner_header, "UpdateItem");
        handlers::item_update::update_item(&self.resolvers, &ctx, request.into_inner()).await
    }

    #[instrument(name = "grpc.delete_item", skip(self, request))]
    async fn delete_item(
        &self,
        request: Request<DeleteItemRequest>,
    ) -> Result<Response<Affirmative>, Status> {
        let ctx = request_context(&request, &self.owner_header, "DeleteItem");
        handlers::item_delete::delete_item(&self.resolvers, &ctx, request.into_inner()).await
    }

    #[instrument(name = "grpc.resolve_item_reference", skip(self, request))]
    async fn resolve_item_reference(
        &self,
        request: Request<ItemReference>,
    ) -> Result<Response<GetItemResponse>, Status> {
        let ctx = request_context(&request, &self.owner_header, "ResolveItemReference");
        handlers::item_reference::resolve_item_reference(
            &self.resolvers,
            &ctx,
            request.into_inner(),
        )
        .await
    }
}
