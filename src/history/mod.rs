//! Local search-history tracking.
//!
//! This module keeps the visitor's recent search keywords in a bounded,
//! recency-ordered, de-duplicated list persisted in a single storage slot.
//!
//! # Features
//!
//! - Most-recent-first ordering with idempotent de-duplication
//! - Bounded length with oldest-entry eviction
//! - Pluggable storage backend (file-backed by default, in-memory for tests)
//! - Storage failures and corruption degrade silently; the caller never
//!   sees an error
//!
//! # Example
//!
//! ```no_run
//! use lenjoy_client::history::SearchHistory;
//!
//! let history = SearchHistory::open_default();
//! history.add("rust");
//! for entry in history.list() {
//!     println!("{} ({})", entry.keyword, entry.timestamp);
//! }
//! ```

pub mod models;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use models::{HistoryEntry, DEFAULT_MAX_HISTORY_ENTRIES};
pub use storage::{FileStorage, HistoryStorage, MemoryStorage, StorageError, HISTORY_SLOT_KEY};
pub use store::SearchHistory;
