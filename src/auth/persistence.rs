//! Durable storage for the session record.
//!
//! The [`SessionStore`](crate::auth::SessionStore) writes through a
//! [`PersistenceAdapter`] on every mutation and reads from it once at
//! construction. Two adapters are provided:
//!
//! - [`MemoryPersistence`]: keeps the serialized record in memory (tests,
//!   short-lived processes)
//! - [`FilePersistence`]: keeps the record as a JSON file on disk

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use crate::auth::Session;

/// Fixed key the session record is stored under.
pub const SESSION_STORAGE_KEY: &str = "tripkit-session";

/// Errors raised by a persistence adapter.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Reading or writing the backing storage failed.
    #[error("Session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The stored record could not be encoded or decoded.
    #[error("Session record is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Load/save/clear capability for the persisted session record.
///
/// Implementations must be `Send + Sync`; the store calls them while
/// holding its own lock, so they are never invoked concurrently by the
/// same store.
pub trait PersistenceAdapter: Send + Sync + fmt::Debug {
    /// Reads the stored session, or `None` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the record exists but cannot be read.
    fn load(&self) -> Result<Option<Session>, PersistenceError>;

    /// Replaces the stored session.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the record cannot be written.
    fn save(&self, session: &Session) -> Result<(), PersistenceError>;

    /// Removes the stored session. Removing a missing record succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the record exists but cannot be removed.
    fn clear(&self) -> Result<(), PersistenceError>;
}

/// In-memory adapter holding the serialized JSON record.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    record: Mutex<Option<String>>,
}

impl MemoryPersistence {
    /// Creates an empty in-memory adapter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an adapter that already holds `session`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Serialization`] if the session cannot be encoded.
    pub fn with_session(session: &Session) -> Result<Self, PersistenceError> {
        Ok(Self {
            record: Mutex::new(Some(serde_json::to_string(session)?)),
        })
    }

    /// Returns the raw stored record, if any.
    #[must_use]
    pub fn raw_record(&self) -> Option<String> {
        self.record
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl PersistenceAdapter for MemoryPersistence {
    fn load(&self) -> Result<Option<Session>, PersistenceError> {
        let record = self.record.lock().unwrap_or_else(PoisonError::into_inner);
        match record.as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, session: &Session) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(session)?;
        *self.record.lock().unwrap_or_else(PoisonError::into_inner) = Some(json);
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        *self.record.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// File adapter storing the record as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct FilePersistence {
    path: PathBuf,
}

impl FilePersistence {
    /// Stores the record as `<dir>/tripkit-session.json`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{SESSION_STORAGE_KEY}.json")),
        }
    }

    /// Stores the record at an explicit file path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the record file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistenceAdapter for FilePersistence {
    fn load(&self) -> Result<Option<Session>, PersistenceError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn save(&self, session: &Session) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::UserProfile;

    fn session() -> Session {
        Session::new("A1", "R1", UserProfile::new("u1", "Ada", "ada@example.com"))
    }

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tripkit-persistence-{name}-{}", std::process::id()))
    }

    #[test]
    fn test_memory_round_trip_and_clear() {
        let adapter = MemoryPersistence::new();
        assert!(adapter.load().unwrap().is_none());

        adapter.save(&session()).unwrap();
        assert_eq!(adapter.load().unwrap(), Some(session()));
        assert!(adapter.raw_record().unwrap().contains("\"accessToken\":\"A1\""));

        adapter.clear().unwrap();
        assert!(adapter.load().unwrap().is_none());
        adapter.clear().unwrap();
    }

    #[test]
    fn test_memory_corrupt_record_is_an_error() {
        let adapter = MemoryPersistence::new();
        *adapter.record.lock().unwrap() = Some("{not json".to_string());

        assert!(matches!(
            adapter.load(),
            Err(PersistenceError::Serialization(_))
        ));
    }

    #[test]
    fn test_file_adapter_uses_storage_key_as_file_name() {
        let adapter = FilePersistence::in_dir("/var/lib/app");
        assert_eq!(
            adapter.path(),
            Path::new("/var/lib/app/tripkit-session.json")
        );
    }

    #[test]
    fn test_file_round_trip_and_clear() {
        let dir = scratch_dir("round-trip");
        let adapter = FilePersistence::in_dir(&dir);

        assert!(adapter.load().unwrap().is_none());
        adapter.save(&session()).unwrap();
        assert_eq!(adapter.load().unwrap(), Some(session()));

        adapter.clear().unwrap();
        assert!(!adapter.path().exists());
        // Clearing twice is fine
        adapter.clear().unwrap();

        let _ = std::fs::remove_dir_all(dir);
    }
}
