//! Database operations for items.

use rusqlite::{Connection, OptionalExtension, Row, ToSql};

use crate::{
    Error,
    category::Category,
    item::{Item, ItemId, ItemName},
};

/// Insert an item referencing `category` and return it with its generated ID.
///
/// IDs are SQLite rowids, so later inserts always get larger IDs and listing
/// by ID reproduces insertion order.
///
/// # Errors
/// Returns an [Error::SqlError] if `category` does not refer to an existing
/// row or there is some other SQL error.
pub fn create_item(
    name: ItemName,
    category: &Category,
    image_name: String,
    connection: &Connection,
) -> Result<Item, Error> {
    connection.execute(
        "INSERT INTO item (name, category_id, image_name) VALUES (?1, ?2, ?3);",
        (name.as_ref(), category.id, &image_name),
    )?;

    Ok(Item {
        id: connection.last_insert_rowid(),
        name,
        category: category.name.clone(),
        image_name,
    })
}

/// Retrieve all items joined with their category name, in insertion order.
pub fn get_all_items(connection: &Connection) -> Result<Vec<Item>, Error> {
    connection
        .prepare(
            "SELECT item.id, item.name, category.name, item.image_name
             FROM item INNER JOIN category ON item.category_id = category.id
             ORDER BY item.id ASC;",
        )?
        .query_map([], map_row)?
        .map(|maybe_item| maybe_item.map_err(|error| error.into()))
        .collect()
}

/// Retrieve the item at a 1-based `position` in insertion order.
///
/// Returns `None` when `position` is out of range, including positions
/// below 1.
pub fn get_item_at_position(
    position: i64,
    connection: &Connection,
) -> Result<Option<Item>, Error> {
    if position < 1 {
        return Ok(None);
    }

    connection
        .prepare(
            "SELECT item.id, item.name, category.name, item.image_name
             FROM item INNER JOIN category ON item.category_id = category.id
             ORDER BY item.id ASC
             LIMIT 1 OFFSET :offset;",
        )?
        .query_row(&[(":offset", &(position - 1))], map_row)
        .optional()
        .map_err(|error| error.into())
}

/// Optional search filters, combined with logical AND when present.
///
/// `id` is an exact match; `name` and `category` are case-sensitive
/// substring matches. With no filters set the search is equivalent to
/// [get_all_items].
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ItemFilter {
    /// Match the item ID exactly.
    pub id: Option<ItemId>,
    /// Match items whose name contains this string.
    pub name: Option<String>,
    /// Match items whose category name contains this string.
    pub category: Option<String>,
}

/// Retrieve the items matching `filter`, in insertion order.
pub fn search_items(filter: &ItemFilter, connection: &Connection) -> Result<Vec<Item>, Error> {
    let mut predicates: Vec<&str> = Vec::new();
    let mut params: Vec<(&str, &dyn ToSql)> = Vec::new();

    if let Some(ref id) = filter.id {
        predicates.push("item.id = :id");
        params.push((":id", id));
    }

    if let Some(ref name) = filter.name {
        predicates.push("item.name LIKE '%' || :name || '%'");
        params.push((":name", name));
    }

    if let Some(ref category) = filter.category {
        predicates.push("category.name LIKE '%' || :category || '%'");
        params.push((":category", category));
    }

    let mut query = "SELECT item.id, item.name, category.name, item.image_name
         FROM item INNER JOIN category ON item.category_id = category.id"
        .to_owned();

    if !predicates.is_empty() {
        query.push_str(" WHERE ");
        query.push_str(&predicates.join(" AND "));
    }

    query.push_str(" ORDER BY item.id ASC;");

    connection
        .prepare(&query)?
        .query_map(params.as_slice(), map_row)?
        .map(|maybe_item| maybe_item.map_err(|error| error.into()))
        .collect()
}

/// Initialize the item table.
pub fn create_item_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS item (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            category_id INTEGER NOT NULL,
            image_name TEXT NOT NULL,
            FOREIGN KEY(category_id) REFERENCES category(id)
        );

        CREATE INDEX IF NOT EXISTS idx_item_category_id ON item(category_id);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Item, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let name = ItemName::new_unchecked(&raw_name);
    let category = row.get(2)?;
    let image_name = row.get(3)?;

    Ok(Item {
        id,
        name,
        category,
        image_name,
    })
}
