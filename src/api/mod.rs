//! Typed wrappers for the Lenjoy API endpoints.
//!
//! One thin function per endpoint, each built on
//! [`ApiClient::fetch`](crate::client::ApiClient::fetch): it sets the
//! endpoint's query parameters and freshness hints, then converts the wire
//! records to the normalized types in [`crate::models`]. Nothing here holds
//! state; callers pass the client in.

pub mod articles;
pub mod search;
pub mod stats;
pub mod websites;

pub use articles::{
    get_article, increment_article_view, latest_articles, list_articles, list_categories,
    list_tags, popular_articles, related_articles, ListArticlesParams,
};
pub use search::{search_articles, trending_keywords, SearchParams};
pub use stats::site_stats;
pub use websites::{
    increment_website_visit, list_website_categories, list_websites, popular_websites,
    ListWebsitesParams,
};
