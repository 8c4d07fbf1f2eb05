//! News page: paginated list with filters and search-as-you-type, plus the
//! featured and latest sections

use std::{
    sync::{Arc, Mutex, MutexGuard, Weak},
    time::Duration,
};

use crate::{
    api::NewsSource,
    config::{AppConfig, PagesConfig},
    document::Document,
    format::{
        debounce::Debouncer,
        html::{error_placeholder, loading_placeholder},
    },
    labels,
    models::{
        filters::{NewsFilters, Pagination, Selector},
        news::{NewsItem, NewsQuery},
        PageMeta,
    },
    render::{news as markup, select_options},
    view::news::NewsView,
};

use super::{LoadState, RequestSequence};

pub const NEWS_CONTAINER: &str = "news-container";
pub const PAGINATION_CONTAINER: &str = "news-pagination";
pub const CATEGORY_SELECT: &str = "news-category";
pub const FEATURED_CONTAINER: &str = "featured-news";
pub const LATEST_CONTAINER: &str = "latest-news";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsAction {
    NextPage,
    PrevPage,
    /// Zero-based page index, as carried by `data-page`
    GotoPage(u32),
    SetCategory(String),
    SetFeatured(Option<bool>),
    /// Raw search input; applied after the quiet period
    Search(String),
    Reload,
}

#[derive(Debug)]
struct NewsState {
    load: LoadState,
    featured: LoadState,
    latest: LoadState,
    filters: NewsFilters,
    pagination: Pagination,
    items: Vec<NewsView>,
    meta: Option<PageMeta>,
}

impl NewsState {
    /// Without pagination metadata a full page is assumed to have a successor
    fn has_next(&self) -> bool {
        match &self.meta {
            Some(meta) => meta.has_next,
            None => self.items.len() as u32 >= self.pagination.limit,
        }
    }
}

struct Inner {
    source: Arc<dyn NewsSource>,
    document: Arc<dyn Document>,
    static_root: String,
    pages: PagesConfig,
    sequence: RequestSequence,
    state: Mutex<NewsState>,
}

/// Handle to a mounted news page
#[derive(Clone)]
pub struct NewsPage {
    inner: Arc<Inner>,
    search: Arc<Debouncer<String>>,
}

impl NewsPage {
    /// Mount the page and load the list and both side sections
    pub async fn mount(
        source: Arc<dyn NewsSource>,
        document: Arc<dyn Document>,
        config: &AppConfig,
    ) -> Self {
        let inner = Arc::new(Inner {
            source,
            document,
            static_root: config.site.static_root.clone(),
            pages: config.pages.clone(),
            sequence: RequestSequence::default(),
            state: Mutex::new(NewsState {
                load: LoadState::Idle,
                featured: LoadState::Idle,
                latest: LoadState::Idle,
                filters: NewsFilters::default(),
                pagination: Pagination::new(config.pages.news_page_size),
                items: Vec::new(),
                meta: None,
            }),
        });

        let weak: Weak<Inner> = Arc::downgrade(&inner);
        let search = Debouncer::new(
            Duration::from_millis(config.pages.search_debounce_ms),
            move |text: String| {
                let weak = weak.clone();
                async move {
                    if let Some(inner) = weak.upgrade() {
                        inner.apply_search(&text).await;
                    }
                }
            },
        );

        let page = Self {
            inner,
            search: Arc::new(search),
        };
        page.inner.render_category_select();
        tokio::join!(
            page.inner.load_list(),
            page.inner.load_featured(),
            page.inner.load_latest()
        );
        page
    }

    pub async fn dispatch(&self, action: NewsAction) {
        tracing::debug!("News action: {:?}", action);
        match action {
            NewsAction::NextPage => self.next_page().await,
            NewsAction::PrevPage => self.prev_page().await,
            NewsAction::GotoPage(page) => self.goto_page(page).await,
            NewsAction::SetCategory(category) => self.set_category(&category).await,
            NewsAction::SetFeatured(featured) => self.set_featured(featured).await,
            NewsAction::Search(text) => self.search(text),
            NewsAction::Reload => {
                tokio::join!(
                    self.inner.load_list(),
                    self.inner.load_featured(),
                    self.inner.load_latest()
                );
            }
        }
    }

    pub async fn next_page(&self) {
        if !self.inner.has_next() {
            return;
        }
        self.inner.state().pagination.next();
        self.inner.load_list().await;
    }

    pub async fn prev_page(&self) {
        {
            let mut state = self.inner.state();
            if state.pagination.offset == 0 {
                return;
            }
            state.pagination.prev();
        }
        self.inner.load_list().await;
    }

    pub async fn goto_page(&self, page: u32) {
        {
            let mut state = self.inner.state();
            let last = state
                .meta
                .as_ref()
                .filter(|meta| meta.total_pages > 0)
                .map(|meta| meta.total_pages - 1);
            let page = last.map_or(page, |last| page.min(last));
            if page == state.pagination.page() {
                return;
            }
            state.pagination.goto(page);
        }
        self.inner.load_list().await;
    }

    pub async fn set_category(&self, category: &str) {
        {
            let mut state = self.inner.state();
            state.filters.category = Selector::parse(category);
            state.pagination.reset();
        }
        self.inner.render_category_select();
        self.inner.load_list().await;
    }

    pub async fn set_featured(&self, featured: Option<bool>) {
        {
            let mut state = self.inner.state();
            state.filters.featured = featured;
            state.pagination.reset();
        }
        self.inner.load_list().await;
    }

    /// Search-as-you-type entry point
    pub fn search(&self, text: String) {
        self.search.call(text);
    }

    pub fn load_state(&self) -> LoadState {
        self.inner.state().load.clone()
    }

    /// Load states of the featured and latest sections
    pub fn section_states(&self) -> (LoadState, LoadState) {
        let state = self.inner.state();
        (state.featured.clone(), state.latest.clone())
    }

    pub fn filters(&self) -> NewsFilters {
        self.inner.state().filters.clone()
    }

    pub fn pagination(&self) -> Pagination {
        self.inner.state().pagination
    }

    pub fn items(&self) -> Vec<NewsView> {
        self.inner.state().items.clone()
    }
}

impl Inner {
    fn state(&self) -> MutexGuard<'_, NewsState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn derive(&self, items: &[NewsItem]) -> Vec<NewsView> {
        items
            .iter()
            .map(|item| NewsView::derive(item, &self.static_root))
            .collect()
    }

    fn has_next(&self) -> bool {
        self.state().has_next()
    }

    async fn apply_search(&self, text: &str) {
        {
            let mut state = self.state();
            let text = text.trim();
            state.filters.search = (!text.is_empty()).then(|| text.to_string());
            state.pagination.reset();
        }
        self.load_list().await;
    }

    fn query(&self) -> NewsQuery {
        let state = self.state();
        NewsQuery {
            category: state.filters.category.as_option().map(str::to_string),
            search: state.filters.search.clone(),
            featured: state.filters.featured,
            limit: Some(state.pagination.limit),
            offset: Some(state.pagination.offset),
        }
    }

    async fn load_list(&self) {
        let query = self.query();
        self.state().load = LoadState::Loading;
        let token = self.sequence.issue();
        self.document
            .set_html(NEWS_CONTAINER, &loading_placeholder("Завантаження новин..."));

        let result = self.source.news_page(&query).await;

        if !self.sequence.is_latest(token) {
            tracing::warn!("Discarding stale news response (offset {:?})", query.offset);
            return;
        }

        match result {
            Ok((items, meta)) => {
                let views = self.derive(&items);
                tracing::info!("Loaded {} news items at offset {:?}", views.len(), query.offset);
                {
                    let mut state = self.state();
                    state.items = views;
                    state.meta = meta;
                    state.load = LoadState::Loaded;
                }
                self.render_list();
            }
            Err(e) => {
                tracing::error!("Failed to load news: {}", e);
                self.state().load = LoadState::Error(e.to_string());
                self.document
                    .set_html(NEWS_CONTAINER, &error_placeholder(e.user_message()));
                self.document.set_html(PAGINATION_CONTAINER, "");
            }
        }
    }

    fn render_list(&self) {
        let (list, pager) = {
            let state = self.state();
            let total_pages = state.meta.as_ref().map(|meta| meta.total_pages);
            (
                markup::news_list(&state.items),
                markup::pagination(state.pagination.page(), total_pages, state.has_next()),
            )
        };
        self.document.set_html(NEWS_CONTAINER, &list);
        self.document.set_html(PAGINATION_CONTAINER, &pager);
    }

    fn render_category_select(&self) {
        let selected = self.state().filters.category.clone();
        self.document.set_html(
            CATEGORY_SELECT,
            &select_options(&labels::NEWS_CATEGORIES, "Усі новини", selected.as_option()),
        );
    }

    async fn load_featured(&self) {
        self.state().featured = LoadState::Loading;
        let result = self.source.featured(self.pages.featured_news_limit).await;
        let state = self.section_result(FEATURED_CONTAINER, "featured", result);
        self.state().featured = state;
    }

    async fn load_latest(&self) {
        self.state().latest = LoadState::Loading;
        let result = self.source.latest(self.pages.latest_news_limit).await;
        let state = self.section_result(LATEST_CONTAINER, "latest", result);
        self.state().latest = state;
    }

    /// Render a side section; failures stay inside its own container
    fn section_result(
        &self,
        container: &str,
        name: &str,
        result: crate::error::AppResult<Vec<NewsItem>>,
    ) -> LoadState {
        match result {
            Ok(items) => {
                tracing::debug!("Loaded {} {} news items", items.len(), name);
                self.document
                    .set_html(container, &markup::news_list(&self.derive(&items)));
                LoadState::Loaded
            }
            Err(e) => {
                tracing::error!("Failed to load {} news: {}", name, e);
                self.document
                    .set_html(container, &error_placeholder(e.user_message()));
                LoadState::Error(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{api::MockNewsSource, document::InMemoryDocument, error::AppError};
    use serde_json::json;

    fn item(id: &str, title: &str) -> NewsItem {
        serde_json::from_value(json!({
            "id": id,
            "title": title,
            "excerpt": "",
            "category": "competitions",
            "publishedAt": "2024-03-05",
        }))
        .unwrap()
    }

    fn page_of(n: usize, prefix: &str) -> Vec<NewsItem> {
        (0..n)
            .map(|i| item(&format!("{}-{}", prefix, i), &format!("Новина {}", i)))
            .collect()
    }

    fn with_sections(source: &mut MockNewsSource) {
        source.expect_featured().returning(|_| Ok(page_of(1, "f")));
        source.expect_latest().returning(|_| Ok(page_of(2, "l")));
    }

    async fn mount_with(source: MockNewsSource, document: Arc<InMemoryDocument>) -> NewsPage {
        NewsPage::mount(Arc::new(source), document, &AppConfig::default()).await
    }

    #[tokio::test]
    async fn test_mount_renders_list_and_sections() {
        let document = Arc::new(InMemoryDocument::new());
        let mut source = MockNewsSource::new();
        with_sections(&mut source);
        source
            .expect_news_page()
            .withf(|q| q.limit == Some(8) && q.offset == Some(0) && q.category.is_none())
            .times(1)
            .returning(|_| Ok((page_of(8, "n"), None)));

        let page = mount_with(source, document.clone()).await;

        assert_eq!(page.load_state(), LoadState::Loaded);
        assert_eq!(page.items().len(), 8);
        assert!(document.html(NEWS_CONTAINER).unwrap().contains("/news/n-0"));
        assert!(document.html(FEATURED_CONTAINER).unwrap().contains("/news/f-0"));
        assert!(document.html(LATEST_CONTAINER).unwrap().contains("/news/l-1"));
        assert!(document.html(PAGINATION_CONTAINER).unwrap().contains(r#"data-page="1""#));
        assert!(document.html(CATEGORY_SELECT).unwrap().contains(r#"value="all" selected"#));
    }

    #[tokio::test]
    async fn test_section_failure_is_isolated() {
        let document = Arc::new(InMemoryDocument::new());
        let mut source = MockNewsSource::new();
        source.expect_featured().returning(|_| {
            Err(AppError::Http {
                status: 500,
                status_text: "Internal Server Error".into(),
            })
        });
        source.expect_latest().returning(|_| Ok(page_of(2, "l")));
        source
            .expect_news_page()
            .returning(|_| Ok((page_of(3, "n"), None)));

        let page = mount_with(source, document.clone()).await;

        let (featured, latest) = page.section_states();
        assert!(matches!(featured, LoadState::Error(_)));
        assert_eq!(latest, LoadState::Loaded);
        assert_eq!(page.load_state(), LoadState::Loaded);
        assert!(document.html(FEATURED_CONTAINER).unwrap().contains("error-state"));
        assert!(document.html(NEWS_CONTAINER).unwrap().contains("/news/n-2"));
    }

    #[tokio::test]
    async fn test_pagination_moves_offset() {
        let document = Arc::new(InMemoryDocument::new());
        let mut source = MockNewsSource::new();
        with_sections(&mut source);
        source
            .expect_news_page()
            .withf(|q| q.offset == Some(0))
            .times(2)
            .returning(|_| Ok((page_of(8, "a"), None)));
        source
            .expect_news_page()
            .withf(|q| q.offset == Some(8))
            .times(1)
            .returning(|_| Ok((page_of(3, "b"), None)));

        let page = mount_with(source, document).await;
        page.dispatch(NewsAction::NextPage).await;
        assert_eq!(page.pagination().offset, 8);

        // a short page has no next page
        page.dispatch(NewsAction::NextPage).await;
        assert_eq!(page.pagination().offset, 8);

        page.dispatch(NewsAction::PrevPage).await;
        assert_eq!(page.pagination().offset, 0);
        page.dispatch(NewsAction::PrevPage).await;
        assert_eq!(page.pagination().offset, 0);
    }

    #[tokio::test]
    async fn test_goto_page_clamps_to_known_total() {
        let document = Arc::new(InMemoryDocument::new());
        let mut source = MockNewsSource::new();
        with_sections(&mut source);
        let meta = PageMeta {
            page: 1,
            limit: 8,
            total: 20,
            total_pages: 3,
            has_prev: false,
            has_next: true,
        };
        source
            .expect_news_page()
            .withf(|q| q.offset == Some(0))
            .returning(move |_| Ok((page_of(8, "a"), Some(meta.clone()))));
        source
            .expect_news_page()
            .withf(|q| q.offset == Some(16))
            .times(1)
            .returning(|_| Ok((page_of(4, "c"), None)));

        let page = mount_with(source, document).await;
        page.dispatch(NewsAction::GotoPage(9)).await;

        assert_eq!(page.pagination().page(), 2);
    }

    #[tokio::test]
    async fn test_goto_far_page_without_metadata() {
        let document = Arc::new(InMemoryDocument::new());
        let mut source = MockNewsSource::new();
        with_sections(&mut source);
        source
            .expect_news_page()
            .withf(|q| q.offset == Some(0))
            .returning(|_| Ok((page_of(8, "a"), None)));
        source
            .expect_news_page()
            .withf(|q| q.offset == Some(u32::MAX))
            .times(1)
            .returning(|_| Ok((page_of(3, "z"), None)));

        let page = mount_with(source, document.clone()).await;
        page.dispatch(NewsAction::GotoPage(u32::MAX)).await;

        assert_eq!(page.pagination().offset, u32::MAX);
        assert_eq!(page.items().len(), 3);
        let pager = document.html(PAGINATION_CONTAINER).unwrap();
        assert!(pager.contains(r#">›</button>"#));
        assert!(pager.contains(" disabled>›"));
    }

    #[tokio::test]
    async fn test_short_page_disables_next_button() {
        let document = Arc::new(InMemoryDocument::new());
        let mut source = MockNewsSource::new();
        with_sections(&mut source);
        source
            .expect_news_page()
            .withf(|q| q.offset == Some(0))
            .returning(|_| Ok((page_of(8, "a"), None)));
        source
            .expect_news_page()
            .withf(|q| q.offset == Some(8))
            .times(1)
            .returning(|_| Ok((page_of(3, "b"), None)));

        let page = mount_with(source, document.clone()).await;
        assert!(!document.html(PAGINATION_CONTAINER).unwrap().contains(" disabled>›"));

        page.dispatch(NewsAction::NextPage).await;
        assert!(document.html(PAGINATION_CONTAINER).unwrap().contains(" disabled>›"));

        page.dispatch(NewsAction::NextPage).await;
        assert_eq!(page.pagination().offset, 8);
    }

    #[tokio::test]
    async fn test_category_change_resets_offset() {
        let document = Arc::new(InMemoryDocument::new());
        let mut source = MockNewsSource::new();
        with_sections(&mut source);
        source
            .expect_news_page()
            .withf(|q| q.category.is_none())
            .returning(|_| Ok((page_of(8, "a"), None)));
        source
            .expect_news_page()
            .withf(|q| q.category.as_deref() == Some("federation") && q.offset == Some(0))
            .times(1)
            .returning(|_| Ok((page_of(2, "fed"), None)));

        let page = mount_with(source, document.clone()).await;
        page.dispatch(NewsAction::NextPage).await;
        page.dispatch(NewsAction::SetCategory("federation".into())).await;

        assert_eq!(page.pagination().offset, 0);
        assert_eq!(page.filters().category, Selector::Only("federation".into()));
        assert!(document
            .html(CATEGORY_SELECT)
            .unwrap()
            .contains(r#"value="federation" selected"#));
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_is_debounced() {
        let document = Arc::new(InMemoryDocument::new());
        let mut source = MockNewsSource::new();
        with_sections(&mut source);
        source
            .expect_news_page()
            .withf(|q| q.search.is_none())
            .returning(|_| Ok((page_of(8, "a"), None)));
        source
            .expect_news_page()
            .withf(|q| q.search.as_deref() == Some("кубок") && q.offset == Some(0))
            .times(1)
            .returning(|_| Ok((page_of(1, "s"), None)));

        let page = mount_with(source, document).await;
        page.dispatch(NewsAction::NextPage).await;

        for text in ["к", "ку", "куб", "кубо", "кубок "] {
            page.dispatch(NewsAction::Search(text.to_string())).await;
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        assert_eq!(page.filters().search, None);

        tokio::time::sleep(Duration::from_millis(400)).await;
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }

        assert_eq!(page.filters().search.as_deref(), Some("кубок"));
        assert_eq!(page.pagination().offset, 0);
        assert_eq!(page.items().len(), 1);
    }
}
