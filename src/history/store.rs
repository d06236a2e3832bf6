//! The bounded, recency-ordered search-history store.
//!
//! `SearchHistory` keeps the most recent search keywords, most-recent first,
//! de-duplicated by exact keyword and capped at the configured limit. Every
//! operation is a whole-slot read-modify-write; between concurrent contexts
//! the accepted consistency model is last-writer-wins.
//!
//! History is best-effort by contract: a missing, unreadable, or corrupt
//! slot reads as empty, a failed write degrades to a no-op, and storage
//! problems are logged but never surface to the caller.

use super::models::{HistoryEntry, DEFAULT_MAX_HISTORY_ENTRIES};
use super::storage::{FileStorage, HistoryStorage, MemoryStorage};
use crate::config::get_config;

/// Local search-history store over an injected storage backend.
pub struct SearchHistory {
    storage: Box<dyn HistoryStorage>,
    max_entries: usize,
}

impl SearchHistory {
    /// Creates a store over `storage`, capped at the configured
    /// `historyLimit` (default 10).
    pub fn new(storage: Box<dyn HistoryStorage>) -> Self {
        let limit = get_config().history_limit;
        Self::with_capacity(storage, limit.max(1))
    }

    /// Creates a store with an explicit entry cap.
    pub fn with_capacity(storage: Box<dyn HistoryStorage>, max_entries: usize) -> Self {
        Self {
            storage,
            max_entries,
        }
    }

    /// Opens the store at the default on-disk location.
    ///
    /// If the file backend cannot be set up (no home directory, unwritable
    /// config dir), history silently degrades to an in-memory slot for the
    /// lifetime of the process.
    pub fn open_default() -> Self {
        match FileStorage::open_default() {
            Ok(storage) => Self::new(Box::new(storage)),
            Err(err) => {
                eprintln!(
                    "Warning: search history storage unavailable ({}), keeping history in memory",
                    err
                );
                Self::new(Box::new(MemoryStorage::new()))
            }
        }
    }

    /// Returns all entries, most-recent first.
    ///
    /// A missing slot, an unreadable backend, or contents that fail to
    /// deserialize all yield an empty list; corruption never propagates as
    /// an error to UI code.
    pub fn list(&self) -> Vec<HistoryEntry> {
        let raw = match self.storage.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                eprintln!("Warning: failed to read search history: {}", err);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                eprintln!("Warning: discarding corrupt search history: {}", err);
                Vec::new()
            }
        }
    }

    /// Records a search for `keyword`.
    ///
    /// The keyword is trimmed; an empty result is ignored. Any existing
    /// entry with the same keyword is removed before the new entry is
    /// prepended, so repeated adds never grow the list, and the list is
    /// truncated to the cap with the oldest entry evicted.
    pub fn add(&self, keyword: &str) {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return;
        }

        let mut entries = self.list();
        entries.retain(|entry| entry.keyword != keyword);
        entries.insert(0, HistoryEntry::new(keyword));
        entries.truncate(self.max_entries);

        self.persist(&entries);
    }

    /// Removes every entry matching `keyword` exactly.
    ///
    /// Removing a keyword that is not present is a no-op that still
    /// succeeds.
    pub fn remove(&self, keyword: &str) {
        let mut entries = self.list();
        let len_before = entries.len();
        entries.retain(|entry| entry.keyword != keyword);

        if entries.len() != len_before {
            self.persist(&entries);
        }
    }

    /// Deletes the entire history slot.
    pub fn clear(&self) {
        if let Err(err) = self.storage.delete() {
            eprintln!("Warning: failed to clear search history: {}", err);
        }
    }

    /// Maximum number of entries this store retains.
    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    fn persist(&self, entries: &[HistoryEntry]) {
        let raw = match serde_json::to_string(entries) {
            Ok(raw) => raw,
            Err(err) => {
                eprintln!("Warning: failed to serialize search history: {}", err);
                return;
            }
        };
        if let Err(err) = self.storage.write(&raw) {
            eprintln!("Warning: failed to save search history: {}", err);
        }
    }
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::open_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::storage::StorageError;
    use proptest::prelude::*;

    fn memory_store() -> SearchHistory {
        SearchHistory::with_capacity(
            Box::new(MemoryStorage::new()),
            DEFAULT_MAX_HISTORY_ENTRIES,
        )
    }

    /// Backend where every operation fails, simulating disabled storage.
    struct BrokenStorage;

    impl HistoryStorage for BrokenStorage {
        fn read(&self) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("storage disabled".to_string()))
        }
        fn write(&self, _contents: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("storage disabled".to_string()))
        }
        fn delete(&self) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("storage disabled".to_string()))
        }
    }

    #[test]
    fn test_list_on_empty_slot() {
        let history = memory_store();
        assert!(history.list().is_empty());
    }

    #[test]
    fn test_add_then_list() {
        let history = memory_store();
        history.add("rust");

        let entries = history.list();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].keyword, "rust");
    }

    #[test]
    fn test_add_trims_keyword() {
        let history = memory_store();
        history.add("  rust  ");

        let entries = history.list();
        assert_eq!(entries[0].keyword, "rust");
    }

    #[test]
    fn test_add_empty_keyword_is_ignored() {
        let history = memory_store();
        history.add("");
        history.add("   ");
        assert!(history.list().is_empty());
    }

    #[test]
    fn test_add_deduplicates_and_refreshes_timestamp() {
        let history = memory_store();
        history.add("rust");
        let first_ts = history.list()[0].timestamp;

        history.add("rust");
        let entries = history.list();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].keyword, "rust");
        assert!(entries[0].timestamp >= first_ts);
    }

    #[test]
    fn test_most_recent_first_ordering() {
        let history = memory_store();
        history.add("vue");
        history.add("react");
        history.add("vue");

        let entries = history.list();
        let keywords: Vec<&str> = entries.iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["vue", "react"]);
    }

    #[test]
    fn test_bound_evicts_oldest() {
        let history = memory_store();
        for i in 0..11 {
            history.add(&format!("keyword-{}", i));
        }

        let entries = history.list();
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0].keyword, "keyword-10");
        assert_eq!(entries[9].keyword, "keyword-1");
        assert!(!entries.iter().any(|e| e.keyword == "keyword-0"));
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let history = memory_store();
        history.add("Rust");
        history.add("rust");

        let entries = history.list();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].keyword, "rust");
        assert_eq!(entries[1].keyword, "Rust");
    }

    #[test]
    fn test_remove_existing_keyword() {
        let history = memory_store();
        history.add("vue");
        history.add("react");

        history.remove("vue");
        let entries = history.list();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].keyword, "react");
    }

    #[test]
    fn test_remove_missing_keyword_is_noop() {
        let history = memory_store();
        history.add("vue");

        history.remove("angular");
        assert_eq!(history.list().len(), 1);
    }

    #[test]
    fn test_clear_then_list_is_empty() {
        let history = memory_store();
        history.add("vue");
        history.add("react");

        history.clear();
        assert!(history.list().is_empty());
    }

    #[test]
    fn test_corrupt_slot_reads_as_empty() {
        let storage = MemoryStorage::with_contents("definitely {not} json [");
        let history =
            SearchHistory::with_capacity(Box::new(storage), DEFAULT_MAX_HISTORY_ENTRIES);
        assert!(history.list().is_empty());
    }

    #[test]
    fn test_add_after_corruption_starts_fresh() {
        let storage = MemoryStorage::with_contents("garbage");
        let history =
            SearchHistory::with_capacity(Box::new(storage), DEFAULT_MAX_HISTORY_ENTRIES);

        history.add("rust");
        let entries = history.list();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].keyword, "rust");
    }

    #[test]
    fn test_broken_storage_never_panics() {
        let history =
            SearchHistory::with_capacity(Box::new(BrokenStorage), DEFAULT_MAX_HISTORY_ENTRIES);

        assert!(history.list().is_empty());
        history.add("rust");
        history.remove("rust");
        history.clear();
        assert!(history.list().is_empty());
    }

    #[test]
    fn test_file_backed_store_persists_across_instances() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("history.json");

        let first = SearchHistory::with_capacity(
            Box::new(FileStorage::new(path.clone())),
            DEFAULT_MAX_HISTORY_ENTRIES,
        );
        first.add("rust");
        first.add("tokio");

        let second = SearchHistory::with_capacity(
            Box::new(FileStorage::new(path)),
            DEFAULT_MAX_HISTORY_ENTRIES,
        );
        let keywords: Vec<String> = second.list().into_iter().map(|e| e.keyword).collect();
        assert_eq!(keywords, vec!["tokio".to_string(), "rust".to_string()]);
    }

    proptest! {
        /// Any sequence of adds keeps the list bounded, unique, and headed
        /// by the last non-empty keyword added.
        #[test]
        fn prop_add_preserves_invariants(keywords in proptest::collection::vec("[a-z]{1,8}", 1..40)) {
            let history = memory_store();
            for keyword in &keywords {
                history.add(keyword);
            }

            let entries = history.list();
            prop_assert!(entries.len() <= DEFAULT_MAX_HISTORY_ENTRIES);

            let mut seen = std::collections::HashSet::new();
            for entry in &entries {
                prop_assert!(seen.insert(entry.keyword.clone()), "duplicate keyword {}", entry.keyword);
            }

            prop_assert_eq!(&entries[0].keyword, keywords.last().unwrap());
        }
    }
}
