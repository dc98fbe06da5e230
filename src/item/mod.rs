//! Item management: the catalog's records and their endpoints.

mod create;
mod db;
mod domain;
mod get;
mod list;
mod search;

pub use create::create_item_endpoint;
pub use db::{
    ItemFilter, create_item, create_item_table, get_all_items, get_item_at_position, search_items,
};
pub use domain::{Item, ItemId, ItemName, ItemsResponse};
pub use get::get_item_endpoint;
pub use list::list_items_endpoint;
pub use search::search_items_endpoint;
