//! Core category domain types.

use serde::{Deserialize, Serialize};

/// Database identifier for a category.
pub type CategoryId = i64;

/// A deduplicated label grouping items (e.g., 'Fashion', 'Books').
///
/// Category names are stored independently of items so the string is not
/// repeated per item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}
