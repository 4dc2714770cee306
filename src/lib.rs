//! Ownership-enforcing CRUD service for items.
//!
//! Items live in a key-value table with an owner index. Reads are open to any
//! caller; creates require an identity, and updates and deletes only succeed
//! for the item's owner. Ownership checks are conditions the store evaluates
//! atomically with the write.

// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::indexing_slicing
    )
)]

pub mod app;
pub mod config;
pub mod cors;
pub mod grpc_logging;
pub mod item;
pub mod logging;
pub mod server;
pub mod utils;

// Re-export commonly used types
pub use config::{load_config, ConfigError, ServiceConfig, StoreBackend, StoreConfig};
pub use item::{
    open_store, Affirmative, CreateItemInput, FileItemStore, InMemoryItemStore, Item,
    ItemController, ItemError, ItemQuery, ItemReference, ItemResolvers, ItemStore, OwnerId,
    RequestContext, RequestEvent, StoreError, UpdateItemInput,
};
pub use server::ItemsGrpcService;
