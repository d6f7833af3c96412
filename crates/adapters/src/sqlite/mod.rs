mod queries;

use std::fs;
use std::path::PathBuf;

use launchpad_application::{ApplicationError, CatalogRepository};
use launchpad_domain::{AppId, ApplicationRecord, NewApplication};
use rusqlite::Connection;
use tracing::debug;

use crate::migrations::MIGRATIONS;

/// Catalog store backed by a single SQLite file. Every operation opens its own
/// connection and closes it when it returns.
#[derive(Debug, Clone)]
pub struct SqliteCatalogRepository {
    path: PathBuf,
}

impl SqliteCatalogRepository {
    pub fn new(path: String) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    fn open_connection(&self) -> Result<Connection, ApplicationError> {
        Connection::open(&self.path)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}

impl CatalogRepository for SqliteCatalogRepository {
    fn initialize(&self) -> Result<(), ApplicationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "catalog path must not be empty".to_string(),
            ));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|error| ApplicationError::Io(error.to_string()))?;
            }
        }

        let conn = self.open_connection()?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;

        for migration in MIGRATIONS {
            conn.execute_batch(migration)
                .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        }

        debug!(path = %self.path.display(), "catalog ready");
        Ok(())
    }

    fn insert_application(&self, app: &NewApplication) -> Result<AppId, ApplicationError> {
        let conn = self.open_connection()?;
        let id_value = queries::insert_application(&conn, app)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        Ok(AppId::new(id_value)?)
    }

    fn update_application(&self, id: AppId, app: &NewApplication) -> Result<(), ApplicationError> {
        let conn = self.open_connection()?;
        let changed = queries::update_application(&conn, id.get(), app)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        if changed == 0 {
            return Err(ApplicationError::NotFound(format!(
                "application id={}",
                id.get()
            )));
        }
        Ok(())
    }

    fn find_application_by_id(
        &self,
        id: AppId,
    ) -> Result<Option<ApplicationRecord>, ApplicationError> {
        let conn = self.open_connection()?;
        queries::find_application_by_id(&conn, id.get())
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }

    fn count_applications(&self) -> Result<usize, ApplicationError> {
        let conn = self.open_connection()?;
        let count = queries::count_applications(&conn)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        usize::try_from(count).map_err(|error| ApplicationError::Persistence(error.to_string()))
    }

    fn list_applications(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<ApplicationRecord>, ApplicationError> {
        let offset = i64::try_from(offset)
            .map_err(|error| ApplicationError::InvalidInput(error.to_string()))?;
        let limit = i64::try_from(limit)
            .map_err(|error| ApplicationError::InvalidInput(error.to_string()))?;
        let conn = self.open_connection()?;
        queries::list_applications(&conn, offset, limit)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}
