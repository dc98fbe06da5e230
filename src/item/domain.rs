//! Core item domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A validated, non-empty item name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct ItemName(String);

impl ItemName {
    /// Create an item name.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyItemName] if `name` is an empty string.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyItemName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create an item name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ItemName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemName::new(s)
    }
}

impl Display for ItemName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Database identifier for an item.
pub type ItemId = i64;

/// A catalog record with a name, a category, and an associated image.
///
/// `category` carries the joined category name; the category row itself is
/// referenced via a foreign key in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Item {
    pub id: ItemId,
    pub name: ItemName,
    pub category: String,
    pub image_name: String,
}

/// The response envelope shared by every item endpoint.
///
/// All reads and the create endpoint reply with `{ "items": [...] }`, empty
/// when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
}
