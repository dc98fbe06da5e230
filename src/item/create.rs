//! Endpoint for adding a new item with an uploaded image.

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use axum::{
    Json,
    body::Bytes,
    extract::{FromRef, Multipart, State},
    http::StatusCode,
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    category::resolve_category,
    image::derive_image_name,
    item::{ItemName, ItemsResponse, create_item},
};

/// The state needed for creating an item.
#[derive(Debug, Clone)]
pub struct CreateItemState {
    /// The database connection for managing items and categories.
    pub db_connection: Arc<Mutex<Connection>>,

    /// The directory where uploaded item images are stored.
    pub image_dir: PathBuf,
}

impl FromRef<AppState> for CreateItemState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            image_dir: state.image_dir.clone(),
        }
    }
}

/// The fields parsed from the item creation form.
struct ItemForm {
    name: String,
    category: String,
    image_file_name: String,
    image_bytes: Bytes,
}

/// Handle POST requests for creating an item.
///
/// Expects a multipart form with the text fields `name` and `category` and
/// an `image` file. The uploaded image is stored under a name derived from
/// its original file name, the category is resolved to an existing row or
/// created, and the new item is inserted.
///
/// Replies `201 Created` with the new item in the usual `{ "items": [...] }`
/// envelope, or 400 when a field is missing or the name is empty.
pub async fn create_item_endpoint(
    State(state): State<CreateItemState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ItemsResponse>), Error> {
    let form = parse_item_form(multipart).await?;

    let name = ItemName::new(&form.name)?;
    let image_name = derive_image_name(&form.image_file_name);

    let image_path = state.image_dir.join(&image_name);
    tokio::fs::write(&image_path, &form.image_bytes)
        .await
        .map_err(|error| {
            tracing::error!("could not write image {}: {error}", image_path.display());
            Error::IoError(error.to_string())
        })?;

    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let category = resolve_category(&form.category, &connection)?;
    let item = create_item(name, &category, image_name, &connection)?;

    tracing::debug!("Created item {} in category {}", item.id, category.id);

    Ok((
        StatusCode::CREATED,
        Json(ItemsResponse { items: vec![item] }),
    ))
}

async fn parse_item_form(mut multipart: Multipart) -> Result<ItemForm, Error> {
    let mut name = None;
    let mut category = None;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|error| Error::MultipartError(error.to_string()))?
    {
        match field.name() {
            Some("name") => {
                name = Some(read_text_field(field).await?);
            }
            Some("category") => {
                category = Some(read_text_field(field).await?);
            }
            Some("image") => {
                let file_name = field
                    .file_name()
                    .ok_or_else(|| {
                        Error::MultipartError(
                            "could not get file name from the image field".to_owned(),
                        )
                    })?
                    .to_owned();

                let bytes = field.bytes().await.map_err(|error| {
                    tracing::error!("Could not read data from multipart form field: {error}");
                    Error::MultipartError(
                        "could not read data from the image field".to_owned(),
                    )
                })?;

                tracing::debug!("Received file '{}' that is {} bytes", file_name, bytes.len());

                image = Some((file_name, bytes));
            }
            _ => {}
        }
    }

    let name = name.ok_or_else(|| Error::MissingField("name".to_owned()))?;
    let category = category.ok_or_else(|| Error::MissingField("category".to_owned()))?;
    let (image_file_name, image_bytes) =
        image.ok_or_else(|| Error::MissingField("image".to_owned()))?;

    Ok(ItemForm {
        name,
        category,
        image_file_name,
        image_bytes,
    })
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, Error> {
    field.text().await.map_err(|error| {
        tracing::error!("Could not read text from multipart form field: {error}");
        Error::MultipartError("could not read text from a form field".to_owned())
    })
}
