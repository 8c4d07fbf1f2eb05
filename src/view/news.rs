//! News view-model

use crate::{
    format::date::format_date,
    labels,
    models::news::NewsItem,
};

use super::asset_url;

#[derive(Debug, Clone, PartialEq)]
pub struct NewsView {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub category_label: String,
    pub date_display: String,
    pub featured: bool,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub url: String,
}

impl NewsView {
    pub fn derive(item: &NewsItem, static_root: &str) -> Self {
        let category = labels::normalize_news_category(&item.category).to_string();
        let tags = item
            .tags
            .as_deref()
            .map(|tags| {
                tags.split(';')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            excerpt: item.excerpt.clone(),
            category_label: labels::news_category_label(&category).to_string(),
            category,
            date_display: format_date(item.published_at.as_deref()),
            featured: item.featured,
            image_url: item.image_url.as_deref().map(|p| asset_url(static_root, p)),
            author: item.author_name.clone(),
            tags,
            url: format!("/news/{}", item.id),
        }
    }
}

/// Full article page: the card fields plus the body
#[derive(Debug, Clone, PartialEq)]
pub struct NewsArticleView {
    pub summary: NewsView,
    pub number: Option<i64>,
    /// Body split on blank lines; falls back to the excerpt
    pub paragraphs: Vec<String>,
}

impl NewsArticleView {
    pub fn derive(item: &NewsItem, static_root: &str) -> Self {
        let summary = NewsView::derive(item, static_root);
        let body = item
            .content
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(summary.excerpt.as_str())
            .replace("\r\n", "\n");
        let paragraphs = body
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect();

        Self {
            number: item.number,
            paragraphs,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_derive_news_view() {
        let item: NewsItem = serde_json::from_value(json!({
            "id": "novyny-1",
            "title": "Перемога на турнірі",
            "excerpt": "Коротко",
            "category": "results",
            "publishedAt": "2024-03-05",
            "image_url": "news/1.jpg",
            "tags": "дзюдо; збірна ;;"
        }))
        .unwrap();

        let view = NewsView::derive(&item, "/static");
        assert_eq!(view.category, "competitions");
        assert_eq!(view.category_label, "Змагання");
        assert_eq!(view.date_display, "5 березня 2024");
        assert_eq!(view.image_url.as_deref(), Some("/static/news/1.jpg"));
        assert_eq!(view.tags, vec!["дзюдо".to_string(), "збірна".to_string()]);
        assert_eq!(view.url, "/news/novyny-1");
    }

    #[test]
    fn test_unknown_category_passes_through() {
        let item: NewsItem = serde_json::from_value(json!({
            "id": 3,
            "title": "x",
            "category": "archive"
        }))
        .unwrap();
        let view = NewsView::derive(&item, "/static");
        assert_eq!(view.category_label, "archive");
        assert_eq!(view.date_display, "Дата невідома");
    }

    #[test]
    fn test_article_paragraphs() {
        let item: NewsItem = serde_json::from_value(json!({
            "id": "zbory",
            "title": "Збори",
            "excerpt": "Анонс",
            "category": "federation",
            "number": 42,
            "content": "Перший абзац.\r\n\r\nДругий\nрядок.\n\n\n"
        }))
        .unwrap();

        let article = NewsArticleView::derive(&item, "/static");
        assert_eq!(article.number, Some(42));
        assert_eq!(
            article.paragraphs,
            vec!["Перший абзац.".to_string(), "Другий\nрядок.".to_string()]
        );

        let without_body: NewsItem =
            serde_json::from_value(json!({ "id": 1, "title": "x", "excerpt": "Лише анонс", "content": " " }))
                .unwrap();
        assert_eq!(NewsArticleView::derive(&without_body, "/static").paragraphs, vec!["Лише анонс".to_string()]);
    }
}
