//! Focus session persistence.
//!
//! The full session list is stored as one JSON array under a single named
//! key, newest first. [`Repository`] is the seam the session store talks
//! to; [`SqliteRepository`] is the on-disk backend and [`MemoryRepository`]
//! keeps everything in process.

use std::cell::RefCell;
use std::rc::Rc;

use super::session::Session;
use crate::error::StintError;
use crate::storage::Database;

/// Default storage key for the session list.
pub const DEFAULT_SESSIONS_KEY: &str = "focusSessions";

/// Load/save/clear access to the persisted session list.
#[cfg_attr(test, mockall::automock)]
pub trait Repository {
    /// Read the stored list. `Ok(None)` means nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be read or the data is corrupt.
    fn load(&self) -> Result<Option<Vec<Session>>, StintError>;

    /// Replace the stored list.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save(&self, sessions: &[Session]) -> Result<(), StintError>;

    /// Remove the stored list entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    fn clear(&self) -> Result<(), StintError>;
}

/// Session list stored in the `SQLite` key-value table.
pub struct SqliteRepository {
    db: Database,
    key: String,
}

impl SqliteRepository {
    /// Store sessions under `key` in `db`.
    #[must_use]
    pub fn new(db: Database, key: impl Into<String>) -> Self {
        Self {
            db,
            key: key.into(),
        }
    }

    /// Store sessions under the default key.
    #[must_use]
    pub fn with_database(db: Database) -> Self {
        Self::new(db, DEFAULT_SESSIONS_KEY)
    }
}

impl Repository for SqliteRepository {
    fn load(&self) -> Result<Option<Vec<Session>>, StintError> {
        self.db
            .get_value(&self.key)?
            .map(|raw| decode(&raw))
            .transpose()
    }

    fn save(&self, sessions: &[Session]) -> Result<(), StintError> {
        let raw = serde_json::to_string(sessions)?;
        self.db.put_value(&self.key, &raw)
    }

    fn clear(&self) -> Result<(), StintError> {
        self.db.delete_value(&self.key)?;
        Ok(())
    }
}

/// In-process session storage.
///
/// Holds the serialized JSON so the same encoding path is exercised as on
/// disk. Clones share one slot, which lets a second store instance "reload"
/// what the first one saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the stored payload with arbitrary text.
    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.slot.borrow_mut() = Some(raw.into());
    }

    /// The stored payload, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl Repository for MemoryRepository {
    fn load(&self) -> Result<Option<Vec<Session>>, StintError> {
        self.slot.borrow().as_deref().map(decode).transpose()
    }

    fn save(&self, sessions: &[Session]) -> Result<(), StintError> {
        let raw = serde_json::to_string(sessions)?;
        *self.slot.borrow_mut() = Some(raw);
        Ok(())
    }

    fn clear(&self) -> Result<(), StintError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

fn decode(raw: &str) -> Result<Vec<Session>, StintError> {
    serde_json::from_str(raw)
        .map_err(|e| StintError::Parse(format!("Stored sessions are unreadable: {e}")))
}
