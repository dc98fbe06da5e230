//! Category management for grouping items.

mod db;
mod domain;

pub use db::{create_category_table, resolve_category};
pub use domain::{Category, CategoryId};
