//! Data models for local search history.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Default maximum number of keywords to retain.
///
/// Used as a fallback if global config is unavailable.
pub const DEFAULT_MAX_HISTORY_ENTRIES: usize = 10;

/// One remembered search keyword.
///
/// Entries are stored most-recent first; the stored keyword is always
/// non-empty and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The search keyword, trimmed.
    pub keyword: String,

    /// Last-used time, in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl HistoryEntry {
    /// Creates an entry for `keyword` stamped with the current time.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_carries_current_timestamp() {
        let before = Utc::now().timestamp_millis();
        let entry = HistoryEntry::new("rust");
        let after = Utc::now().timestamp_millis();

        assert_eq!(entry.keyword, "rust");
        assert!(entry.timestamp >= before && entry.timestamp <= after);
    }

    #[test]
    fn test_serialization_round_trip() {
        let entry = HistoryEntry {
            keyword: "vue".to_string(),
            timestamp: 1_736_900_000_000,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"keyword\":\"vue\""));
        assert!(json.contains("1736900000000"));

        let decoded: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, entry);
    }
}
