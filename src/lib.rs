//! Client library for the Lenjoy content-browsing site.
//!
//! Lenjoy serves articles, curated external-resource links, and search over
//! a REST API with a uniform `{data, message?, error?}` envelope. This crate
//! provides the two client-side building blocks every page uses, plus typed
//! wrappers for the endpoints themselves.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - **client**: the request gateway - URL construction, envelope
//!   unwrapping, the uniform success/failure contract
//! - **api**: one typed wrapper per endpoint (articles, categories, tags,
//!   resource websites, search, stats)
//! - **models**: envelope/pagination shapes, raw wire records, and the
//!   normalized types application code consumes
//! - **history**: the bounded, recency-ordered local search-history store
//! - **config**: global client configuration (base URL, timeout, history
//!   limit)
//!
//! The gateway and the history store are independent; nothing is shared
//! between them except usage from page-level code.
//!
//! # Fetching content
//!
//! ```no_run
//! use lenjoy_client::api::{list_articles, ListArticlesParams};
//! use lenjoy_client::client::ApiClient;
//!
//! # async fn run() -> Result<(), lenjoy_client::client::ApiError> {
//! let client = ApiClient::new()?;
//! let page = list_articles(&client, &ListArticlesParams::default()).await?;
//! for article in &page.results {
//!     println!("{} ({} views)", article.title, article.view_count);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Calls are independent futures: pages that fan out (say, related plus
//! popular articles) join them and handle each result on its own, so one
//! failing section degrades to empty instead of failing the page.
//!
//! # Search history
//!
//! ```no_run
//! use lenjoy_client::history::SearchHistory;
//!
//! let history = SearchHistory::open_default();
//! history.add("rust");
//! history.add("vue");
//! assert!(history.list().len() <= history.capacity());
//! ```
//!
//! History is best-effort: storage failures and corrupt slot contents are
//! logged and degrade to an empty list or a no-op, never an error.

pub mod api;
pub mod client;
pub mod config;
pub mod history;
pub mod models;

pub use client::{ApiClient, ApiError, FailureObserver, FetchOptions};
pub use history::{HistoryEntry, SearchHistory};
pub use models::{Article, ArticleSummary, Page, SiteStats, TrendingKeyword, Website};
