//! Raw backend record shapes.
//!
//! Field names here mirror the backend JSON exactly (`name`, `cover_img`,
//! `created_time`, ...). Nothing outside `models` should touch these types:
//! the API wrappers deserialize into them and immediately convert to the
//! normalized types in [`crate::models::content`], so a backend field rename
//! only ever touches this file and the matching `From` impl.

use serde::Deserialize;

/// Article category as the backend sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleCategory {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
    pub article_count: Option<u64>,
}

/// Tag as the backend sends it. Tags apply to articles only.
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    pub article_count: Option<u64>,
}

/// Article list record. The backend calls the title `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleSummary {
    pub id: u64,
    pub name: String,
    pub cover_img: Option<String>,
    pub view_count: u64,
    pub category: ArticleCategory,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub created_time: String,
    pub status: i32,
}

/// Article detail record: the summary fields plus the body and provenance.
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub id: u64,
    pub name: String,
    pub cover_img: Option<String>,
    pub view_count: u64,
    pub category: ArticleCategory,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub created_time: String,
    pub status: i32,
    pub content: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub remark: String,
    pub update_time: String,
}

/// Resource-website category as the backend sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct WebsiteCategory {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
    pub icon: Option<String>,
    pub resource_count: Option<u64>,
}

/// Curated external-resource website record. Websites carry no tags.
#[derive(Debug, Clone, Deserialize)]
pub struct Website {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub url: String,
    pub logo: Option<String>,
    pub category: WebsiteCategory,
    pub visit_count: u64,
    pub is_featured: bool,
    pub status: i32,
    #[serde(default)]
    pub remark: String,
    pub created_time: String,
    pub update_time: String,
}

/// One backend-ranked trending search keyword.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingKeyword {
    pub id: u64,
    pub keyword: String,
    pub search_count: Option<u64>,
}

/// Site-wide counter block from the stats endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteStats {
    pub article_count: u64,
    pub resource_count: u64,
    pub category_count: u64,
    pub resource_category_count: u64,
    pub tag_count: u64,
}

/// Counter returned by `increment-view`.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewCount {
    pub view_count: u64,
}

/// Counter returned by `increment-visit`.
#[derive(Debug, Clone, Deserialize)]
pub struct VisitCount {
    pub visit_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_summary_deserializes_backend_names() {
        let json = r#"{
            "id": 7,
            "name": "Learn Rust",
            "cover_img": "https://cdn.example.com/rust.png",
            "view_count": 42,
            "category": {"id": 1, "name": "Programming", "order": 1},
            "tags": [{"id": 3, "name": "rust", "synonyms": ["rustlang"]}],
            "created_time": "2025-01-15 09:30:00",
            "status": 1
        }"#;
        let summary: ArticleSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.name, "Learn Rust");
        assert_eq!(summary.category.name, "Programming");
        assert_eq!(summary.tags[0].synonyms, vec!["rustlang".to_string()]);
    }

    #[test]
    fn test_website_without_optional_fields() {
        let json = r#"{
            "id": 2,
            "name": "MDN",
            "description": "Web docs",
            "url": "https://developer.mozilla.org",
            "category": {"id": 5, "name": "Docs", "order": 2},
            "visit_count": 100,
            "is_featured": true,
            "status": 1,
            "created_time": "2025-01-01 00:00:00",
            "update_time": "2025-02-01 00:00:00"
        }"#;
        let site: Website = serde_json::from_str(json).unwrap();
        assert!(site.logo.is_none());
        assert!(site.remark.is_empty());
        assert!(site.is_featured);
    }

    #[test]
    fn test_trending_keyword_count_optional() {
        let json = r#"{"id": 1, "keyword": "rust"}"#;
        let keyword: TrendingKeyword = serde_json::from_str(json).unwrap();
        assert_eq!(keyword.keyword, "rust");
        assert!(keyword.search_count.is_none());
    }
}
