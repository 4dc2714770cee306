//! The item domain: typed records, the ownership-enforcing controller, the
//! query/mutation resolvers and the storage adapters behind them.

pub mod context;
pub mod controller;
pub mod core;
pub mod resolvers;
pub mod store;

pub use context::{RequestContext, RequestEvent};
pub use controller::ItemController;
pub use self::core::{
    Affirmative, CreateItemInput, Item, ItemError, ItemQuery, ItemReference, OwnerId,
    UpdateItemInput,
};
pub use resolvers::ItemResolvers;
pub use store::{open_store, FileItemStore, InMemoryItemStore, ItemStore, StoreError};
