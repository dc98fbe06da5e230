//! Endpoint for fetching a single item by its 1-based position.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    item::{ItemsResponse, get_item_at_position},
};

/// The state needed for the positional item lookup.
#[derive(Debug, Clone)]
pub struct GetItemState {
    /// The database connection for reading items.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for GetItemState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle GET requests for the item at a 1-based position in insertion order.
///
/// An out-of-range position replies with an empty item list rather than a
/// 404, so every read endpoint shares the same response envelope.
pub async fn get_item_endpoint(
    State(state): State<GetItemState>,
    Path(position): Path<i64>,
) -> Result<Json<ItemsResponse>, Error> {
    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let items = get_item_at_position(position, &connection)?
        .into_iter()
        .collect();

    Ok(Json(ItemsResponse { items }))
}
