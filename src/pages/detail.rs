//! Detail pages: a single event and a single news article

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    api::{EventsSource, NewsSource},
    config::AppConfig,
    document::Document,
    format::html::{error_placeholder, loading_placeholder},
    render::{events as event_markup, news as news_markup},
    view::{
        event::EventView,
        news::{NewsArticleView, NewsView},
    },
};

use super::{Clock, LoadState, RequestSequence};

pub const EVENT_DETAIL_CONTAINER: &str = "event-detail";
pub const ARTICLE_CONTAINER: &str = "news-article";
pub const ARTICLE_LATEST_CONTAINER: &str = "article-latest";

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

#[derive(Debug, Default)]
struct EventDetailState {
    load: LoadState,
    event: Option<EventView>,
}

struct EventInner {
    source: Arc<dyn EventsSource>,
    document: Arc<dyn Document>,
    static_root: String,
    clock: Clock,
    id: String,
    sequence: RequestSequence,
    state: Mutex<EventDetailState>,
}

/// Handle to a mounted event page
#[derive(Clone)]
pub struct EventDetailPage {
    inner: Arc<EventInner>,
}

impl EventDetailPage {
    pub async fn mount(
        source: Arc<dyn EventsSource>,
        document: Arc<dyn Document>,
        config: &AppConfig,
        clock: Clock,
        id: &str,
    ) -> Self {
        let page = Self {
            inner: Arc::new(EventInner {
                source,
                document,
                static_root: config.site.static_root.clone(),
                clock,
                id: id.to_string(),
                sequence: RequestSequence::default(),
                state: Mutex::new(EventDetailState::default()),
            }),
        };
        page.reload().await;
        page
    }

    pub fn load_state(&self) -> LoadState {
        lock(&self.inner.state).load.clone()
    }

    pub fn event(&self) -> Option<EventView> {
        lock(&self.inner.state).event.clone()
    }

    pub async fn reload(&self) {
        let inner = &self.inner;
        lock(&inner.state).load = LoadState::Loading;
        let token = inner.sequence.issue();
        inner
            .document
            .set_html(EVENT_DETAIL_CONTAINER, &loading_placeholder("Завантаження події..."));

        let result = inner.source.event(&inner.id).await;
        if !inner.sequence.is_latest(token) {
            tracing::warn!("Discarding stale response for event {}", inner.id);
            return;
        }

        match result {
            Ok(event) => {
                let today = (inner.clock)();
                let view = EventView::derive(&event, today, &inner.static_root);
                inner.document.set_html(
                    EVENT_DETAIL_CONTAINER,
                    &event_markup::event_detail(&view, view.days_until(today)),
                );
                tracing::info!("Loaded event {}", inner.id);
                let mut state = lock(&inner.state);
                state.event = Some(view);
                state.load = LoadState::Loaded;
            }
            Err(e) => {
                tracing::error!("Failed to load event {}: {}", inner.id, e);
                lock(&inner.state).load = LoadState::Error(e.to_string());
                inner
                    .document
                    .set_html(EVENT_DETAIL_CONTAINER, &error_placeholder(e.user_message()));
            }
        }
    }
}

#[derive(Debug, Default)]
struct ArticleState {
    load: LoadState,
    latest: LoadState,
    article: Option<NewsArticleView>,
    latest_items: Vec<NewsView>,
}

struct ArticleInner {
    source: Arc<dyn NewsSource>,
    document: Arc<dyn Document>,
    static_root: String,
    latest_limit: u32,
    slug: String,
    sequence: RequestSequence,
    state: Mutex<ArticleState>,
}

/// Handle to a mounted news article page
///
/// The latest-news column is loaded alongside the article and never shows
/// the article itself. Its failure does not affect the article.
#[derive(Clone)]
pub struct NewsArticlePage {
    inner: Arc<ArticleInner>,
}

impl NewsArticlePage {
    pub async fn mount(
        source: Arc<dyn NewsSource>,
        document: Arc<dyn Document>,
        config: &AppConfig,
        slug: &str,
    ) -> Self {
        let page = Self {
            inner: Arc::new(ArticleInner {
                source,
                document,
                static_root: config.site.static_root.clone(),
                latest_limit: config.pages.article_latest_limit,
                slug: slug.to_string(),
                sequence: RequestSequence::default(),
                state: Mutex::new(ArticleState::default()),
            }),
        };
        tokio::join!(page.reload(), page.load_latest());
        page
    }

    pub fn load_state(&self) -> LoadState {
        lock(&self.inner.state).load.clone()
    }

    pub fn latest_state(&self) -> LoadState {
        lock(&self.inner.state).latest.clone()
    }

    pub fn article(&self) -> Option<NewsArticleView> {
        lock(&self.inner.state).article.clone()
    }

    pub fn latest(&self) -> Vec<NewsView> {
        lock(&self.inner.state).latest_items.clone()
    }

    pub async fn reload(&self) {
        let inner = &self.inner;
        lock(&inner.state).load = LoadState::Loading;
        let token = inner.sequence.issue();
        inner
            .document
            .set_html(ARTICLE_CONTAINER, &loading_placeholder("Завантаження новини..."));

        let result = inner.source.article(&inner.slug).await;
        if !inner.sequence.is_latest(token) {
            tracing::warn!("Discarding stale response for article {}", inner.slug);
            return;
        }

        match result {
            Ok(item) => {
                let article = NewsArticleView::derive(&item, &inner.static_root);
                inner
                    .document
                    .set_html(ARTICLE_CONTAINER, &news_markup::news_article(&article));
                tracing::info!("Loaded article {}", inner.slug);
                let mut state = lock(&inner.state);
                state.article = Some(article);
                state.load = LoadState::Loaded;
            }
            Err(e) => {
                tracing::error!("Failed to load article {}: {}", inner.slug, e);
                lock(&inner.state).load = LoadState::Error(e.to_string());
                inner
                    .document
                    .set_html(ARTICLE_CONTAINER, &error_placeholder(e.user_message()));
            }
        }
    }

    async fn load_latest(&self) {
        let inner = &self.inner;
        lock(&inner.state).latest = LoadState::Loading;

        // One extra so the list stays full after dropping the current article
        let result = inner.source.latest(inner.latest_limit.saturating_add(1)).await;
        match result {
            Ok(items) => {
                let views: Vec<NewsView> = items
                    .iter()
                    .filter(|item| item.id != inner.slug)
                    .take(inner.latest_limit as usize)
                    .map(|item| NewsView::derive(item, &inner.static_root))
                    .collect();
                inner
                    .document
                    .set_html(ARTICLE_LATEST_CONTAINER, &news_markup::news_list(&views));
                let mut state = lock(&inner.state);
                state.latest_items = views;
                state.latest = LoadState::Loaded;
            }
            Err(e) => {
                tracing::error!("Failed to load latest news: {}", e);
                lock(&inner.state).latest = LoadState::Error(e.to_string());
                inner
                    .document
                    .set_html(ARTICLE_LATEST_CONTAINER, &error_placeholder(e.user_message()));
            }
        }
    }
}
