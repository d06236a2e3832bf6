//! Wire envelope and pagination shapes.
//!
//! Every response from the Lenjoy API is wrapped in a uniform envelope, and
//! every list endpoint returns a page block inside that envelope. These two
//! shapes are the only response framing the rest of the crate ever sees.

use serde::{Deserialize, Serialize};

/// The uniform `{data, message?, error?}` wrapper used by every API response.
///
/// The backend additionally emits a `success` flag; it is decoded for
/// completeness, but callers should rely on the HTTP status code and the
/// presence of `data` instead.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// The payload. Present on every well-formed success response.
    pub data: Option<T>,

    /// Human-readable status message, e.g. `"success"`.
    pub message: Option<String>,

    /// Error description on failure responses.
    pub error: Option<String>,

    /// Backend success flag. Informational only.
    pub success: Option<bool>,
}

/// One page of a paginated collection.
///
/// Matches the backend's pagination block field-for-field:
/// `total_pages` is always `ceil(count / page_size)`, and `next`/`previous`
/// are `null` exactly at the last and first page respectively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub results: Vec<T>,

    /// Total number of items across all pages.
    pub count: u64,

    /// Absolute URL of the next page, or `None` on the last page.
    pub next: Option<String>,

    /// Absolute URL of the previous page, or `None` on the first page.
    pub previous: Option<String>,

    /// Current page number (1-based).
    pub page: u32,

    /// Number of items per page.
    pub page_size: u32,

    /// Total number of pages.
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Returns `true` when this is the first page.
    pub fn is_first(&self) -> bool {
        self.previous.is_none()
    }

    /// Returns `true` when this is the last page.
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }

    /// Computes the page count implied by `count` and `page_size`.
    ///
    /// Useful for sanity-checking a page received from the backend.
    pub fn expected_total_pages(count: u64, page_size: u32) -> u32 {
        if page_size == 0 {
            return 0;
        }
        count.div_ceil(page_size as u64) as u32
    }

    /// Converts the items on this page, keeping the pagination metadata.
    ///
    /// This is the seam the API wrappers use to turn a page of wire records
    /// into a page of normalized records.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            results: self.results.into_iter().map(f).collect(),
            count: self.count,
            next: self.next,
            previous: self.previous,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}
