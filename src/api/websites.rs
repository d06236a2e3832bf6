//! Resource-website endpoints.
//!
//! All routes live under the `/resource-websites/` family; the listing is
//! not paginated, the backend returns the full ordered set.

use crate::client::{ApiClient, ApiError, FetchOptions};
use crate::models::{wire, Website, WebsiteCategory};

/// Default listing order: featured sites first, then by popularity, then
/// newest.
pub const DEFAULT_ORDERING: &str = "-is_featured,-visit_count,-created_time";

/// Filters for the website listing endpoint.
#[derive(Debug, Clone, Default)]
pub struct ListWebsitesParams {
    /// Restrict to one category.
    pub category_id: Option<u64>,
    /// Sort order. Defaults to [`DEFAULT_ORDERING`].
    pub ordering: Option<String>,
}

/// Fetches the curated website list.
pub async fn list_websites(
    client: &ApiClient,
    params: &ListWebsitesParams,
) -> Result<Vec<Website>, ApiError> {
    let options = FetchOptions::new()
        .query("category_id", params.category_id)
        .query(
            "ordering",
            params.ordering.as_deref().unwrap_or(DEFAULT_ORDERING),
        )
        .revalidate(120);

    let raw: Vec<wire::Website> = client.fetch("/resource-websites/websites/", options).await?;
    Ok(raw.into_iter().map(Website::from).collect())
}

/// Records one outbound visit and returns the updated counter.
pub async fn increment_website_visit(client: &ApiClient, id: u64) -> Result<u64, ApiError> {
    let counter: wire::VisitCount = client
        .post(&format!(
            "/resource-websites/websites/{}/increment-visit/",
            id
        ))
        .await?;
    Ok(counter.visit_count)
}

/// Fetches the most-visited websites.
pub async fn popular_websites(client: &ApiClient, limit: u32) -> Result<Vec<Website>, ApiError> {
    let raw: Vec<wire::Website> = client
        .fetch(
            "/resource-websites/websites/popular/",
            FetchOptions::new().query("limit", limit).revalidate(300),
        )
        .await?;
    Ok(raw.into_iter().map(Website::from).collect())
}

/// Fetches all website categories.
pub async fn list_website_categories(
    client: &ApiClient,
) -> Result<Vec<WebsiteCategory>, ApiError> {
    let raw: Vec<wire::WebsiteCategory> = client
        .fetch(
            "/resource-websites/categories/",
            FetchOptions::new().revalidate(300),
        )
        .await?;
    Ok(raw.into_iter().map(WebsiteCategory::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ordering_puts_featured_first() {
        assert!(DEFAULT_ORDERING.starts_with("-is_featured"));
    }

    #[test]
    fn test_list_params_default_is_unfiltered() {
        let params = ListWebsitesParams::default();
        assert!(params.category_id.is_none());
        assert!(params.ordering.is_none());
    }
}
