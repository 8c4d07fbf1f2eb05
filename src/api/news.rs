//! News endpoints

use crate::{
    error::AppResult,
    models::{
        news::{NewsCategory, NewsItem, NewsQuery},
        ListPayload, PageMeta,
    },
};

use super::{ApiClient, QueryParams};

impl ApiClient {
    /// `/news` with filters and offset pagination
    pub async fn list_news(&self, query: &NewsQuery) -> AppResult<(Vec<NewsItem>, Option<PageMeta>)> {
        let payload: ListPayload<NewsItem> =
            self.get_json(&["news"], &QueryParams::from(query)).await?;
        Ok(payload.into_parts())
    }

    pub async fn latest_news(&self, limit: u32) -> AppResult<Vec<NewsItem>> {
        let mut params = QueryParams::new();
        params.push("limit", limit);
        let payload: ListPayload<NewsItem> = self.get_json(&["news", "latest"], &params).await?;
        Ok(payload.into_items())
    }

    pub async fn featured_news(&self, limit: u32) -> AppResult<Vec<NewsItem>> {
        let mut params = QueryParams::new();
        params.push("limit", limit);
        let payload: ListPayload<NewsItem> = self.get_json(&["news", "featured"], &params).await?;
        Ok(payload.into_items())
    }

    pub async fn news_by_slug(&self, slug: &str) -> AppResult<NewsItem> {
        self.get_json(&["news", "slug", slug], &QueryParams::new()).await
    }

    pub async fn news_categories(&self) -> AppResult<Vec<NewsCategory>> {
        let payload: ListPayload<NewsCategory> =
            self.get_json(&["news", "categories"], &QueryParams::new()).await?;
        Ok(payload.into_items())
    }
}
