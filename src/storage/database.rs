//! `SQLite` database connection and key-value access.
//!
//! The database lives at `~/.stint/stint.db` and holds a single `kv_store`
//! table. Each row is one named entry, mirroring a browser's local storage.

use rusqlite::{params, Connection, OptionalExtension};

use crate::config::Paths;
use crate::error::StintError;

use super::migrations;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database under the given data directory.
    ///
    /// The directory must already exist (see [`Paths::ensure_dirs`]). Creates
    /// the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open(paths: &Paths) -> Result<Self, StintError> {
        Self::open_at(&paths.database)
    }

    /// Open the database at a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &std::path::Path) -> Result<Self, StintError> {
        let conn = Connection::open(path).map_err(|e| {
            StintError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;

        let db = Self { conn };
        db.migrate()?;

        tracing::debug!(path = %path.display(), "opened session database");
        Ok(db)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, StintError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            StintError::Database(format!("Failed to open in-memory database: {e}"))
        })?;

        let db = Self { conn };
        db.migrate()?;

        Ok(db)
    }

    /// Run database migrations.
    fn migrate(&self) -> Result<(), StintError> {
        migrations::run(&self.conn)
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, StintError> {
        migrations::get_version(&self.conn)
    }

    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_value(&self, key: &str) -> Result<Option<String>, StintError> {
        self.conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| StintError::Database(format!("Failed to read '{key}': {e}")))
    }

    /// Insert or replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn put_value(&self, key: &str, value: &str) -> Result<(), StintError> {
        self.conn
            .execute(
                r"INSERT INTO kv_store (key, value, updated_at)
                  VALUES (?1, ?2, datetime('now'))
                  ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
                params![key, value],
            )
            .map_err(|e| StintError::Database(format!("Failed to write '{key}': {e}")))?;
        Ok(())
    }

    /// Remove the entry stored under `key`.
    ///
    /// Returns whether an entry existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_value(&self, key: &str) -> Result<bool, StintError> {
        let rows = self
            .conn
            .execute("DELETE FROM kv_store WHERE key = ?1", [key])
            .map_err(|e| StintError::Database(format!("Failed to delete '{key}': {e}")))?;
        Ok(rows > 0)
    }
}
