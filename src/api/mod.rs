//! HTTP client for the federation JSON API and server-rendered pages

pub mod events;
pub mod news;
pub mod query;
pub mod team;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    config::AppConfig,
    error::{AppError, AppResult},
    models::{Event, NewsItem, NewsQuery, TeamMember, PageMeta},
};

pub use events::CalendarPageQuery;
pub use query::QueryParams;

/// Thin request layer over `reqwest`
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_base: Url,
    site_base: Url,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_seconds))
            .user_agent(concat!("fdu-site/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_base: Url::parse(&config.api.base_url)?,
            site_base: Url::parse(&config.site.base_url)?,
        })
    }

    /// Absolute URL for `segments` under `base`, with an optional query string
    fn build_url(base: &Url, segments: &[&str], query: &QueryParams) -> AppResult<Url> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        if query.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&query.encode()));
        }
        Ok(url)
    }

    pub fn api_url(&self, segments: &[&str], query: &QueryParams) -> AppResult<Url> {
        Self::build_url(&self.api_base, segments, query)
    }

    pub fn site_url(&self, segments: &[&str], query: &QueryParams) -> AppResult<Url> {
        Self::build_url(&self.site_base, segments, query)
    }

    /// GET a JSON resource; non-2xx responses become `AppError::Http`
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &QueryParams,
    ) -> AppResult<T> {
        let url = self.api_url(segments, query)?;
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GET {} failed with {}", url, status);
            return Err(AppError::from_status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// GET a server-rendered HTML page
    pub async fn get_page(&self, url: &str) -> AppResult<String> {
        tracing::debug!("GET {} (page)", url);

        let response = self
            .http
            .get(url)
            .header("X-Requested-With", "XMLHttpRequest")
            .header(ACCEPT, HeaderValue::from_static("text/html"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GET {} failed with {}", url, status);
            return Err(AppError::from_status(status));
        }

        Ok(response.text().await?)
    }
}

/// Calendar data used by the calendar page
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventsSource: Send + Sync {
    async fn events_by_month(&self, year: i32, month: u32) -> AppResult<Vec<Event>>;

    async fn event(&self, id: &str) -> AppResult<Event>;

    fn calendar_page_url(&self, query: &CalendarPageQuery) -> AppResult<String>;

    async fn fetch_page(&self, url: &str) -> AppResult<String>;
}

/// News data used by the news page
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn news_page(&self, query: &NewsQuery) -> AppResult<(Vec<NewsItem>, Option<PageMeta>)>;

    async fn featured(&self, limit: u32) -> AppResult<Vec<NewsItem>>;

    async fn latest(&self, limit: u32) -> AppResult<Vec<NewsItem>>;

    async fn article(&self, slug: &str) -> AppResult<NewsItem>;
}

/// Roster data used by the team page
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamSource: Send + Sync {
    async fn team(&self, category: Option<String>) -> AppResult<Vec<TeamMember>>;
}

#[async_trait]
impl EventsSource for ApiClient {
    async fn events_by_month(&self, year: i32, month: u32) -> AppResult<Vec<Event>> {
        ApiClient::events_by_month(self, year, month).await
    }

    async fn event(&self, id: &str) -> AppResult<Event> {
        self.event_by_id(id).await
    }

    fn calendar_page_url(&self, query: &CalendarPageQuery) -> AppResult<String> {
        ApiClient::calendar_page_url(self, query)
    }

    async fn fetch_page(&self, url: &str) -> AppResult<String> {
        self.get_page(url).await
    }
}

#[async_trait]
impl NewsSource for ApiClient {
    async fn news_page(&self, query: &NewsQuery) -> AppResult<(Vec<NewsItem>, Option<PageMeta>)> {
        self.list_news(query).await
    }

    async fn featured(&self, limit: u32) -> AppResult<Vec<NewsItem>> {
        self.featured_news(limit).await
    }

    async fn latest(&self, limit: u32) -> AppResult<Vec<NewsItem>> {
        self.latest_news(limit).await
    }

    async fn article(&self, slug: &str) -> AppResult<NewsItem> {
        self.news_by_slug(slug).await
    }
}

#[async_trait]
impl TeamSource for ApiClient {
    async fn team(&self, category: Option<String>) -> AppResult<Vec<TeamMember>> {
        self.list_team(category.as_deref()).await
    }
}
