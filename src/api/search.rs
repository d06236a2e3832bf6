//! Search endpoints.
//!
//! Searching is delegated entirely to the backend; this module only shapes
//! the request and normalizes the results. The local search-history
//! subsystem lives in [`crate::history`] and is deliberately independent of
//! these calls.

use crate::client::{ApiClient, ApiError, FetchOptions};
use crate::models::{wire, ArticleSummary, Page, TrendingKeyword};

/// Default number of results per search page.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Default number of trending keywords to request.
pub const DEFAULT_TRENDING_LIMIT: u32 = 10;

/// Parameters for a keyword search.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// The search keyword. Required by the backend.
    pub q: String,
    /// Page number, 1-based. Defaults to 1.
    pub page: Option<u32>,
    /// Page size. Defaults to [`DEFAULT_PAGE_SIZE`].
    pub page_size: Option<u32>,
}

impl SearchParams {
    /// Builds parameters for the first page of results for `q`.
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            page: None,
            page_size: None,
        }
    }
}

/// Searches articles by keyword, returning one page of summaries.
pub async fn search_articles(
    client: &ApiClient,
    params: &SearchParams,
) -> Result<Page<ArticleSummary>, ApiError> {
    let options = FetchOptions::new()
        .query("q", params.q.as_str())
        .query("page", params.page.unwrap_or(1))
        .query("page_size", params.page_size.unwrap_or(DEFAULT_PAGE_SIZE))
        .revalidate(30);

    let page: Page<wire::ArticleSummary> = client.fetch("/search/articles/", options).await?;
    Ok(page.map(ArticleSummary::from))
}

/// Fetches the backend-ranked trending keywords.
///
/// Pages with zero search results fall back to these as suggestions.
pub async fn trending_keywords(
    client: &ApiClient,
    limit: u32,
) -> Result<Vec<TrendingKeyword>, ApiError> {
    let raw: Vec<wire::TrendingKeyword> = client
        .fetch(
            "/search/trending/",
            FetchOptions::new().query("limit", limit).revalidate(300),
        )
        .await?;
    Ok(raw.into_iter().map(TrendingKeyword::from).collect())
}
