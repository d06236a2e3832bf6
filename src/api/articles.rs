//! Article, category, and tag endpoints.

use crate::client::{ApiClient, ApiError, FetchOptions};
use crate::models::{wire, Article, ArticleSummary, Category, Page, Tag};

/// Default number of articles per listing page.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Default listing order: newest first.
pub const DEFAULT_ORDERING: &str = "-created_time";

/// Filters for the article listing endpoint.
#[derive(Debug, Clone, Default)]
pub struct ListArticlesParams {
    /// Page number, 1-based. Defaults to 1.
    pub page: Option<u32>,
    /// Page size. Defaults to [`DEFAULT_PAGE_SIZE`].
    pub page_size: Option<u32>,
    /// Restrict to one category.
    pub category_id: Option<u64>,
    /// Comma-separated tag ids.
    pub tags: Option<String>,
    /// Sort order. Defaults to [`DEFAULT_ORDERING`].
    pub ordering: Option<String>,
}

/// Fetches one page of article summaries.
pub async fn list_articles(
    client: &ApiClient,
    params: &ListArticlesParams,
) -> Result<Page<ArticleSummary>, ApiError> {
    let options = FetchOptions::new()
        .query("page", params.page.unwrap_or(1))
        .query("page_size", params.page_size.unwrap_or(DEFAULT_PAGE_SIZE))
        .query("category_id", params.category_id)
        .query("tags", params.tags.as_deref())
        .query(
            "ordering",
            params.ordering.as_deref().unwrap_or(DEFAULT_ORDERING),
        )
        .revalidate(60);

    let page: Page<wire::ArticleSummary> = client.fetch("/articles/", options).await?;
    Ok(page.map(ArticleSummary::from))
}

/// Fetches one article in full.
pub async fn get_article(client: &ApiClient, id: u64) -> Result<Article, ApiError> {
    let raw: wire::Article = client
        .fetch(
            &format!("/articles/{}/", id),
            FetchOptions::new().revalidate(300),
        )
        .await?;
    Ok(raw.into())
}

/// Records one view of an article and returns the updated counter.
pub async fn increment_article_view(client: &ApiClient, id: u64) -> Result<u64, ApiError> {
    let counter: wire::ViewCount = client
        .post(&format!("/articles/{}/increment-view/", id))
        .await?;
    Ok(counter.view_count)
}

/// Fetches articles related to `id`.
pub async fn related_articles(
    client: &ApiClient,
    id: u64,
    limit: u32,
) -> Result<Vec<ArticleSummary>, ApiError> {
    let raw: Vec<wire::ArticleSummary> = client
        .fetch(
            &format!("/articles/{}/related/", id),
            FetchOptions::new().query("limit", limit).revalidate(300),
        )
        .await?;
    Ok(raw.into_iter().map(ArticleSummary::from).collect())
}

/// Fetches the most-viewed articles.
pub async fn popular_articles(
    client: &ApiClient,
    limit: u32,
) -> Result<Vec<ArticleSummary>, ApiError> {
    let raw: Vec<wire::ArticleSummary> = client
        .fetch(
            "/articles/hot/",
            FetchOptions::new().query("limit", limit).revalidate(300),
        )
        .await?;
    Ok(raw.into_iter().map(ArticleSummary::from).collect())
}

/// Fetches the newest articles via the listing endpoint.
pub async fn latest_articles(
    client: &ApiClient,
    limit: u32,
) -> Result<Vec<ArticleSummary>, ApiError> {
    let params = ListArticlesParams {
        page_size: Some(limit),
        ..Default::default()
    };
    let page = list_articles(client, &params).await?;
    Ok(page.results)
}

/// Fetches all article categories.
pub async fn list_categories(client: &ApiClient) -> Result<Vec<Category>, ApiError> {
    let raw: Vec<wire::ArticleCategory> = client
        .fetch("/categories/", FetchOptions::new().revalidate(300))
        .await?;
    Ok(raw.into_iter().map(Category::from).collect())
}

/// Fetches tags, optionally limited to one category.
pub async fn list_tags(
    client: &ApiClient,
    category_id: Option<u64>,
) -> Result<Vec<Tag>, ApiError> {
    let raw: Vec<wire::Tag> = client
        .fetch(
            "/tags/",
            FetchOptions::new()
                .query("category", category_id)
                .revalidate(300),
        )
        .await?;
    Ok(raw.into_iter().map(Tag::from).collect())
}
