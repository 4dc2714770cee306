//! gRPC transport for the item resolvers.

pub mod context;
pub mod convert;
pub mod error_mapping;
pub mod handlers;
pub mod structured_error;
mod trait_impl;

use crate::config::AuthConfig;
use crate::item::resolvers::ItemResolvers;

// Import generated protobuf types
pub mod proto {
    #![allow(clippy::pedantic)]
    #![allow(clippy::all)]
    tonic::include_proto!("items.v1");
}

/// Encoded descriptor set for gRPC server reflection.
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("items_descriptor");

pub use proto::items_service_server::ItemsServiceServer;

/// `items.v1.ItemsService` over a set of resolvers.
#[derive(Debug, Clone)]
pub struct ItemsGrpcService {
    resolvers: ItemResolvers,
    owner_header: String,
}

impl ItemsGrpcService {
    /// `owner_header` names the metadata entry holding the caller's identity.
    /// Metadata keys are case-insensitive on the wire and stored lowercase.
    #[must_use]
    pub fn new(resolvers: ItemResolvers, owner_header: &str) -> Self {
        Self {
            resolvers,
            owner_header: owner_header.to_ascii_lowercase(),
        }
    }

    #[must_use]
    pub fn from_auth_config(resolvers: ItemResolvers, auth: &AuthConfig) -> Self {
        Self::new(resolvers, &auth.owner_header)
    }

    #[must_use]
    pub fn owner_header(&self) -> &str {
        &self.owner_header
    }

    #[must_use]
    pub fn into_server(self) -> ItemsServiceServer<Self> {
        ItemsServiceServer::new(self)
    }
}
