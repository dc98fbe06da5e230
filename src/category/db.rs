//! Database operations for categories.

use rusqlite::{Connection, OptionalExtension};

use crate::{
    Error,
    category::{Category, CategoryId},
};

/// Look up a category by exact name, creating it if it does not exist.
///
/// Two items added with the same category string end up referencing the
/// same category row.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an unexpected SQL error.
pub fn resolve_category(name: &str, connection: &Connection) -> Result<Category, Error> {
    let existing_id: Option<CategoryId> = connection
        .prepare("SELECT id FROM category WHERE name = :name;")?
        .query_row(&[(":name", name)], |row| row.get(0))
        .optional()?;

    if let Some(id) = existing_id {
        return Ok(Category {
            id,
            name: name.to_owned(),
        });
    }

    connection.execute("INSERT INTO category (name) VALUES (?1);", (name,))?;

    Ok(Category {
        id: connection.last_insert_rowid(),
        name: name.to_owned(),
    })
}

/// Initialize the category table.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE
        );",
    )?;

    Ok(())
}

#[cfg(test)]
mod category_query_tests {
    use rusqlite::Connection;

    use super::{create_category_table, resolve_category};

    fn get_test_db_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        create_category_table(&connection).expect("Could not create category table");
        connection
    }

    #[test]
    fn resolve_creates_missing_category() {
        let connection = get_test_db_connection();

        let category =
            resolve_category("Fashion", &connection).expect("Could not resolve category");

        assert!(category.id > 0);
        assert_eq!(category.name, "Fashion");
    }

    #[test]
    fn resolve_reuses_existing_category() {
        let connection = get_test_db_connection();
        let first = resolve_category("Fashion", &connection).expect("Could not resolve category");

        let second = resolve_category("Fashion", &connection).expect("Could not resolve category");

        assert_eq!(first, second);

        let row_count: i64 = connection
            .prepare("SELECT COUNT(*) FROM category;")
            .unwrap()
            .query_row([], |row| row.get(0))
            .unwrap();
        assert_eq!(row_count, 1);
    }

    #[test]
    fn resolve_is_case_sensitive_on_names() {
        let connection = get_test_db_connection();
        let lower = resolve_category("fashion", &connection).expect("Could not resolve category");

        let upper = resolve_category("Fashion", &connection).expect("Could not resolve category");

        assert_ne!(lower.id, upper.id);
    }
}
