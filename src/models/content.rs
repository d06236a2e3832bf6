//! Normalized content types.
//!
//! These are the shapes the rest of the application consumes. Wire records
//! use the backend's field names (`name` for a title, `cover_img`,
//! `created_time`); the conversions in this module rename them once so
//! backend schema drift never leaks past the `models` boundary.

use crate::models::wire;
use serde::{Deserialize, Serialize};

/// Publication state shared by articles and resource websites.
///
/// Articles use 0/1/3 (pending, published, retired); websites use 0/1/2
/// (pending, published, disabled). Unknown codes are preserved rather than
/// rejected so a new backend state cannot break list rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublishStatus {
    /// Awaiting review, not publicly visible.
    Pending,
    /// Published and visible.
    Published,
    /// Disabled by an operator (resource websites).
    Disabled,
    /// Taken down after publication (articles).
    Retired,
    /// A status code this client version does not know.
    Other(i32),
}

impl PublishStatus {
    /// Maps a backend status code to a state.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => PublishStatus::Pending,
            1 => PublishStatus::Published,
            2 => PublishStatus::Disabled,
            3 => PublishStatus::Retired,
            other => PublishStatus::Other(other),
        }
    }

    /// Returns `true` for content that should be shown to visitors.
    pub fn is_published(&self) -> bool {
        matches!(self, PublishStatus::Published)
    }
}

/// Article category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    /// Display ordering weight.
    pub order: i32,
    /// Number of published articles, when the endpoint computes it.
    pub article_count: Option<u64>,
}

/// Article tag, with the synonyms the search backend matches against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    pub synonyms: Vec<String>,
    pub article_count: Option<u64>,
}

/// Article as shown on listing pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: u64,
    /// Display title. The backend stores this as `name`.
    pub title: String,
    pub cover_image: Option<String>,
    pub view_count: u64,
    pub category: Category,
    pub tags: Vec<Tag>,
    /// Publication timestamp, as formatted by the backend.
    pub published_at: String,
    pub status: PublishStatus,
}

/// Full article as shown on the detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub cover_image: Option<String>,
    pub view_count: u64,
    pub category: Category,
    pub tags: Vec<Tag>,
    pub published_at: String,
    pub status: PublishStatus,
    /// Rich-text body.
    pub content: String,
    /// Attribution for republished content.
    pub source: String,
    pub remark: String,
    pub updated_at: String,
}

/// Resource-website category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteCategory {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub order: i32,
    pub icon: Option<String>,
    pub website_count: Option<u64>,
}

/// A curated external-resource website.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Website {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub url: String,
    pub logo: Option<String>,
    pub category: WebsiteCategory,
    pub visit_count: u64,
    /// Editorially recommended; featured sites sort first.
    pub featured: bool,
    pub status: PublishStatus,
    pub remark: String,
    pub created_at: String,
    pub updated_at: String,
}

/// One backend-ranked trending search keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingKeyword {
    pub id: u64,
    pub keyword: String,
    pub search_count: Option<u64>,
}

/// Site-wide counters rendered on the about page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteStats {
    pub article_count: u64,
    pub website_count: u64,
    pub category_count: u64,
    pub website_category_count: u64,
    pub tag_count: u64,
}

impl From<wire::ArticleCategory> for Category {
    fn from(raw: wire::ArticleCategory) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            order: raw.order,
            article_count: raw.article_count,
        }
    }
}

impl From<wire::Tag> for Tag {
    fn from(raw: wire::Tag) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            synonyms: raw.synonyms,
            article_count: raw.article_count,
        }
    }
}

impl From<wire::ArticleSummary> for ArticleSummary {
    fn from(raw: wire::ArticleSummary) -> Self {
        Self {
            id: raw.id,
            title: raw.name,
            cover_image: raw.cover_img,
            view_count: raw.view_count,
            category: raw.category.into(),
            tags: raw.tags.into_iter().map(Tag::from).collect(),
            published_at: raw.created_time,
            status: PublishStatus::from_code(raw.status),
        }
    }
}

impl From<wire::Article> for Article {
    fn from(raw: wire::Article) -> Self {
        Self {
            id: raw.id,
            title: raw.name,
            cover_image: raw.cover_img,
            view_count: raw.view_count,
            category: raw.category.into(),
            tags: raw.tags.into_iter().map(Tag::from).collect(),
            published_at: raw.created_time,
            status: PublishStatus::from_code(raw.status),
            content: raw.content,
            source: raw.source,
            remark: raw.remark,
            updated_at: raw.update_time,
        }
    }
}

impl From<wire::WebsiteCategory> for WebsiteCategory {
    fn from(raw: wire::WebsiteCategory) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            order: raw.order,
            icon: raw.icon,
            website_count: raw.resource_count,
        }
    }
}

impl From<wire::Website> for Website {
    fn from(raw: wire::Website) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            url: raw.url,
            logo: raw.logo,
            category: raw.category.into(),
            visit_count: raw.visit_count,
            featured: raw.is_featured,
            status: PublishStatus::from_code(raw.status),
            remark: raw.remark,
            created_at: raw.created_time,
            updated_at: raw.update_time,
        }
    }
}

impl From<wire::TrendingKeyword> for TrendingKeyword {
    fn from(raw: wire::TrendingKeyword) -> Self {
        Self {
            id: raw.id,
            keyword: raw.keyword,
            search_count: raw.search_count,
        }
    }
}

impl From<wire::SiteStats> for SiteStats {
    fn from(raw: wire::SiteStats) -> Self {
        Self {
            article_count: raw.article_count,
            website_count: raw.resource_count,
            category_count: raw.category_count,
            website_category_count: raw.resource_category_count,
            tag_count: raw.tag_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_status_from_code() {
        assert_eq!(PublishStatus::from_code(0), PublishStatus::Pending);
        assert_eq!(PublishStatus::from_code(1), PublishStatus::Published);
        assert_eq!(PublishStatus::from_code(2), PublishStatus::Disabled);
        assert_eq!(PublishStatus::from_code(3), PublishStatus::Retired);
        assert_eq!(PublishStatus::from_code(9), PublishStatus::Other(9));
        assert!(PublishStatus::Published.is_published());
        assert!(!PublishStatus::Pending.is_published());
    }

    #[test]
    fn test_article_summary_normalization() {
        let json = r#"{
            "id": 7,
            "name": "Learn Rust",
            "cover_img": "https://cdn.example.com/rust.png",
            "view_count": 42,
            "category": {"id": 1, "name": "Programming", "order": 1},
            "tags": [{"id": 3, "name": "rust"}],
            "created_time": "2025-01-15 09:30:00",
            "status": 1
        }"#;
        let raw: wire::ArticleSummary = serde_json::from_str(json).unwrap();
        let summary = ArticleSummary::from(raw);

        assert_eq!(summary.title, "Learn Rust");
        assert_eq!(
            summary.cover_image.as_deref(),
            Some("https://cdn.example.com/rust.png")
        );
        assert_eq!(summary.published_at, "2025-01-15 09:30:00");
        assert_eq!(summary.status, PublishStatus::Published);
        assert_eq!(summary.tags[0].name, "rust");
    }

    #[test]
    fn test_website_normalization() {
        let json = r#"{
            "id": 2,
            "name": "MDN",
            "description": "Web docs",
            "url": "https://developer.mozilla.org",
            "category": {"id": 5, "name": "Docs", "order": 2, "resource_count": 8},
            "visit_count": 100,
            "is_featured": true,
            "status": 2,
            "created_time": "2025-01-01 00:00:00",
            "update_time": "2025-02-01 00:00:00"
        }"#;
        let raw: wire::Website = serde_json::from_str(json).unwrap();
        let site = Website::from(raw);

        assert!(site.featured);
        assert_eq!(site.status, PublishStatus::Disabled);
        assert_eq!(site.category.website_count, Some(8));
    }

    #[test]
    fn test_site_stats_normalization() {
        let raw = wire::SiteStats {
            article_count: 120,
            resource_count: 45,
            category_count: 8,
            resource_category_count: 6,
            tag_count: 30,
        };
        let stats = SiteStats::from(raw);
        assert_eq!(stats.website_count, 45);
        assert_eq!(stats.website_category_count, 6);
    }
}
