//! Endpoint for listing the full catalog.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    item::{ItemsResponse, get_all_items},
};

/// The state needed for listing items.
#[derive(Debug, Clone)]
pub struct ListItemsState {
    /// The database connection for reading items.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListItemsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle GET requests for the full item list.
///
/// Replies with every item joined with its category name, in insertion
/// order.
pub async fn list_items_endpoint(
    State(state): State<ListItemsState>,
) -> Result<Json<ItemsResponse>, Error> {
    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let items = get_all_items(&connection)?;

    Ok(Json(ItemsResponse { items }))
}
