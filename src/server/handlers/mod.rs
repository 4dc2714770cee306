pub mod item_create;
pub mod item_delete;
pub mod item_get;
pub mod item_list;
pub mod item_reference;
pub mod item_update;
