//! Site statistics endpoint.

use crate::client::{ApiClient, ApiError, FetchOptions};
use crate::models::{wire, SiteStats};

/// Fetches the site-wide content counters.
pub async fn site_stats(client: &ApiClient) -> Result<SiteStats, ApiError> {
    let raw: wire::SiteStats = client
        .fetch("/setting/stats/", FetchOptions::new().revalidate(300))
        .await?;
    Ok(raw.into())
}
