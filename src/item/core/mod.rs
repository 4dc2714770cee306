pub mod error;
pub mod id;
pub mod types;

pub use error::{ItemError, OWNERSHIP_CONFLICT_MESSAGE};
pub use id::{new_item_id, IdGenerator, UuidIdGenerator};
pub use types::{
    Affirmative, CreateItemInput, Item, ItemQuery, ItemReference, OwnerId, UpdateItemInput,
};
