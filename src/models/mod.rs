//! Data models for the Lenjoy API.
//!
//! Split into three layers:
//!
//! - **envelope**: the uniform response wrapper and pagination block
//! - **wire**: raw records exactly as the backend serializes them
//! - **content**: normalized records consumed by application code
//!
//! The `wire` -> `content` conversion is the single place where backend
//! field names are translated (e.g. `name` -> `title`, `cover_img` ->
//! `cover_image`).

pub mod content;
pub mod envelope;
pub mod wire;

pub use content::{
    Article, ArticleSummary, Category, PublishStatus, SiteStats, Tag, TrendingKeyword, Website,
    WebsiteCategory,
};
pub use envelope::{Envelope, Page};
