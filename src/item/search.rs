//! Endpoint for searching items by id, name, or category.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    item::{ItemFilter, ItemsResponse, search_items},
};

/// The state needed for searching items.
#[derive(Debug, Clone)]
pub struct SearchItemsState {
    /// The database connection for reading items.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for SearchItemsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle GET requests for searching the catalog.
///
/// The query parameters `id`, `name`, and `category` are all optional and
/// combined with logical AND. Without any parameters the response matches
/// the full item list.
pub async fn search_items_endpoint(
    State(state): State<SearchItemsState>,
    Query(filter): Query<ItemFilter>,
) -> Result<Json<ItemsResponse>, Error> {
    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let items = search_items(&filter, &connection)?;

    Ok(Json(ItemsResponse { items }))
}
