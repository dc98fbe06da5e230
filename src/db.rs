//! Schema initialization for the application's database.

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{Error, category::create_category_table, item::create_item_table};

/// Create the application's tables and set the per-connection pragmas.
///
/// SQLite's `LIKE` is case-insensitive for ASCII by default; search promises
/// case-sensitive substring matches, so `case_sensitive_like` is switched on
/// here. Pragmas apply per connection and must be set again for any new
/// connection to the same database file.
///
/// # Errors
/// Returns an error if the tables cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.pragma_update(None, "foreign_keys", true)?;
    connection.pragma_update(None, "case_sensitive_like", true)?;

    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_category_table(&transaction)?;
    create_item_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
