//! Storing and serving item images.

use std::path::PathBuf;

use axum::{
    extract::{FromRef, Path, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use sha2::{Digest, Sha256};

use crate::{AppState, Error};

/// The image served when a requested image does not exist on disk.
pub const DEFAULT_IMAGE_NAME: &str = "default.jpg";

/// Derive the stored image name from the name of the uploaded file.
///
/// The hash input is the file *name*, not the image bytes: two uploads that
/// share a file name collide on the same stored image regardless of content.
/// Clients observe the derived names, so changing this scheme would be a
/// breaking change.
pub fn derive_image_name(original_file_name: &str) -> String {
    let digest = Sha256::digest(original_file_name.as_bytes());

    format!("{}.jpg", hex::encode(digest))
}

/// The state needed for serving images.
#[derive(Debug, Clone)]
pub struct GetImageState {
    /// The directory where uploaded item images are stored.
    pub image_dir: PathBuf,
}

impl FromRef<AppState> for GetImageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            image_dir: state.image_dir.clone(),
        }
    }
}

/// Handle GET requests for a stored image.
///
/// The requested name must end in `.jpg`. A well-formed name that does not
/// exist on disk is answered with the default placeholder image instead of
/// an error.
pub async fn get_image_endpoint(
    State(state): State<GetImageState>,
    Path(image_name): Path<String>,
) -> Result<Response, Error> {
    if !image_name.ends_with(".jpg") {
        return Err(Error::InvalidImageExtension);
    }

    let mut image_path = state.image_dir.join(&image_name);

    if !image_path.exists() {
        tracing::debug!("Image not found: {}", image_path.display());
        image_path = state.image_dir.join(DEFAULT_IMAGE_NAME);
    }

    let image_bytes = tokio::fs::read(&image_path).await.map_err(|error| {
        tracing::error!("could not read image {}: {error}", image_path.display());
        Error::IoError(error.to_string())
    })?;

    Ok(([(CONTENT_TYPE, "image/jpeg")], image_bytes).into_response())
}
