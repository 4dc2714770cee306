//! Common test utilities

#![allow(dead_code)]

use items_service::item::{
    CreateItemInput, InMemoryItemStore, ItemController, ItemResolvers, ItemStore,
};
use items_service::server::ItemsGrpcService;
use std::sync::Arc;
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Resolvers over `store` with random ids.
pub fn resolvers_over(store: Arc<dyn ItemStore>) -> ItemResolvers {
    ItemResolvers::new(Arc::new(ItemController::new(store)))
}

/// Resolvers over a fresh in-memory table.
pub fn memory_resolvers() -> ItemResolvers {
    resolvers_over(Arc::new(InMemoryItemStore::new()))
}

/// gRPC service over a fresh in-memory table, reading identity from `id`.
pub fn memory_service() -> ItemsGrpcService {
    ItemsGrpcService::new(memory_resolvers(), "id")
}

/// The item used throughout the scenarios.
pub fn niner() -> CreateItemInput {
    CreateItemInput {
        id: None,
        name: Some("Niner".to_string()),
        description: Some("My favorite number".to_string()),
    }
}
