//! Storage backends for the search-history slot.
//!
//! History lives in a single named slot of a key-value-style store. The
//! backend is an injected capability so the store's logic can run against a
//! real file on disk, an in-memory map in tests, or nothing at all in
//! contexts without persistent storage.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Name of the slot holding the serialized history list.
pub const HISTORY_SLOT_KEY: &str = "lenjoy_search_history";

/// Errors a storage backend can report.
///
/// These never escape the history store; they exist so backends can say
/// *why* an operation failed before the store degrades to a no-op.
#[derive(Debug)]
pub enum StorageError {
    /// Underlying I/O failure (permissions, quota, missing directory).
    Io(std::io::Error),

    /// The backend cannot be used in this execution context.
    Unavailable(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(err) => write!(f, "storage I/O error: {}", err),
            StorageError::Unavailable(msg) => write!(f, "storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(err) => Some(err),
            StorageError::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err)
    }
}

/// A single named slot of persistent string storage.
///
/// Implementations must be safe to call from multiple threads; the store
/// performs whole-slot read-modify-write cycles and accepts last-writer-wins
/// between concurrent contexts.
pub trait HistoryStorage: Send + Sync {
    /// Reads the raw slot contents. `Ok(None)` means the slot has never
    /// been written (or was cleared).
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replaces the slot contents.
    fn write(&self, contents: &str) -> Result<(), StorageError>;

    /// Removes the slot entirely. Deleting a missing slot succeeds.
    fn delete(&self) -> Result<(), StorageError>;
}

/// File-backed slot under the user's config directory.
///
/// The default location is `~/.config/lenjoy/lenjoy_search_history.json` on
/// Unix-like systems, or the equivalent under `AppData\Roaming` on Windows.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates a backend over an explicit slot file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates a backend at the default slot location, creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if no home directory can be
    /// determined, or `StorageError::Io` if the config directory cannot be
    /// created.
    pub fn open_default() -> Result<Self, StorageError> {
        let config_dir = if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home).join(".config")
        } else if let Some(user_profile) = std::env::var_os("USERPROFILE") {
            PathBuf::from(user_profile).join("AppData").join("Roaming")
        } else {
            return Err(StorageError::Unavailable(
                "could not determine home directory".to_string(),
            ));
        };

        let slot_dir = config_dir.join("lenjoy");
        if !slot_dir.exists() {
            fs::create_dir_all(&slot_dir)?;
        }

        Ok(Self::new(
            slot_dir.join(format!("{}.json", HISTORY_SLOT_KEY)),
        ))
    }

    /// Path of the slot file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl HistoryStorage for FileStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        // Write to a temporary file first, then rename into place so a
        // crash mid-write cannot leave a half-written slot.
        let temp_path = self.path.with_extension("json.tmp");
        let mut temp_file = fs::File::create(&temp_path)?;
        temp_file.write_all(contents.as_bytes())?;
        temp_file.flush()?;
        drop(temp_file);

        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    fn delete(&self) -> Result<(), StorageError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory slot, for tests and for contexts without persistent storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-populated with raw contents. Handy for seeding
    /// corrupt data in tests.
    pub fn with_contents(contents: &str) -> Self {
        Self {
            slot: Mutex::new(Some(contents.to_string())),
        }
    }
}

impl HistoryStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| StorageError::Unavailable("poisoned slot lock".to_string()))?;
        Ok(slot.clone())
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| StorageError::Unavailable("poisoned slot lock".to_string()))?;
        *slot = Some(contents.to_string());
        Ok(())
    }

    fn delete(&self) -> Result<(), StorageError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| StorageError::Unavailable("poisoned slot lock".to_string()))?;
        *slot = None;
        Ok(())
    }
}
