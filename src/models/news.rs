//! News article model

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};

use super::deserialize_id;

/// News article (list item, or detail when `content` is present)
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Slug used in article URLs
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub category: String,
    /// Publication date (ISO 8601)
    #[serde(rename = "publishedAt", alias = "published_at", default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    /// `;`-separated tag list
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub number: Option<i64>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Category entry returned by `/news/categories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsCategory {
    #[serde(alias = "value", alias = "slug")]
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub count: Option<u32>,
}

/// Query parameters for `/news`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub featured: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}
