//! Implements a struct that holds the state of the REST server.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use rusqlite::Connection;

use crate::{Error, db::initialize};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,

    /// The directory where uploaded item images are stored.
    pub image_dir: PathBuf,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for
    /// the domain models, and create `image_dir` if it does not exist yet.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized or the image
    /// directory cannot be created.
    pub fn new(db_connection: Connection, image_dir: &Path) -> Result<Self, Error> {
        initialize(&db_connection)?;
        fs::create_dir_all(image_dir)?;

        Ok(Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
            image_dir: image_dir.to_path_buf(),
        })
    }
}
