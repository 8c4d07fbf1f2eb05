//! Page controller tests with in-process data sources

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;

use fdu_site::{
    api::{CalendarPageQuery, EventsSource, NewsSource},
    config::AppConfig,
    document::InMemoryDocument,
    models::{Event, NewsItem, NewsQuery, PageMeta},
    pages::{
        calendar::{EVENTS_CONTAINER, INITIAL_DATA_ATTRIBUTE, MONTH_HEADING},
        fixed_clock,
        detail::{ARTICLE_CONTAINER, ARTICLE_LATEST_CONTAINER},
        news::NEWS_CONTAINER,
        CalendarAction, CalendarPage, LoadState, NewsAction, NewsArticlePage, NewsPage,
    },
    AppResult,
};

fn event(id: &str, title: &str, date: &str) -> Event {
    serde_json::from_value(json!({
        "id": id,
        "title": title,
        "date": date,
        "type": "national",
        "category": "championship",
    }))
    .unwrap()
}

/// Events source whose response time depends on the requested month
#[derive(Default)]
struct SlowEvents {
    delays_ms: Vec<(u32, u64)>,
    calls: Mutex<Vec<(i32, u32)>>,
}

impl SlowEvents {
    fn calls(&self) -> Vec<(i32, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventsSource for SlowEvents {
    async fn events_by_month(&self, year: i32, month: u32) -> AppResult<Vec<Event>> {
        self.calls.lock().unwrap().push((year, month));
        let delay = self
            .delays_ms
            .iter()
            .find(|(m, _)| *m == month)
            .map_or(0, |(_, d)| *d);
        tokio::time::sleep(Duration::from_millis(delay)).await;

        Ok(vec![event(
            &format!("{}-{}", year, month),
            &format!("Подія {}/{}", month, year),
            &format!("{}-{:02}-10", year, month),
        )])
    }

    async fn event(&self, id: &str) -> AppResult<Event> {
        Ok(event(id, "Подія", "2024-03-10"))
    }

    fn calendar_page_url(&self, query: &CalendarPageQuery) -> AppResult<String> {
        Ok(format!("/calendar?year={}&month={}", query.year, query.month))
    }

    async fn fetch_page(&self, _url: &str) -> AppResult<String> {
        Ok(String::new())
    }
}

fn march_document() -> Arc<InMemoryDocument> {
    Arc::new(
        InMemoryDocument::new()
            .with_attribute(EVENTS_CONTAINER, "data-year", "2024")
            .with_attribute(EVENTS_CONTAINER, "data-month", "3"),
    )
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 6).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_stale_month_response_is_discarded() {
    let source = Arc::new(SlowEvents {
        delays_ms: vec![(4, 500), (5, 100)],
        ..Default::default()
    });
    let document = march_document();
    let page = CalendarPage::mount(source.clone(), document.clone(), &AppConfig::default(), fixed_clock(today())).await;

    let slow = {
        let page = page.clone();
        tokio::spawn(async move { page.dispatch(CalendarAction::NextMonth).await })
    };
    tokio::task::yield_now().await;
    let fast = {
        let page = page.clone();
        tokio::spawn(async move { page.dispatch(CalendarAction::NextMonth).await })
    };
    fast.await.unwrap();
    slow.await.unwrap();

    assert_eq!(source.calls(), vec![(2024, 3), (2024, 4), (2024, 5)]);
    assert_eq!(page.month(), (2024, 5));
    assert_eq!(page.load_state(), LoadState::Loaded);

    let events = page.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "2024-5");
    let html = document.html(EVENTS_CONTAINER).unwrap();
    assert!(html.contains("Подія 5/2024"));
    assert!(!html.contains("Подія 4/2024"));
    assert!(document.html(MONTH_HEADING).unwrap().contains("Травень 2024"));
}

#[tokio::test]
async fn test_snapshot_hydration_makes_no_request() {
    let source = Arc::new(SlowEvents::default());
    let snapshot = json!([
        { "id": 7, "title": "Кубок України", "date_start": "2024-03-05", "date_end": "2024-03-07", "event_type": "national", "category": "cup" }
    ])
    .to_string();
    let document = Arc::new(
        InMemoryDocument::new().with_attribute(EVENTS_CONTAINER, INITIAL_DATA_ATTRIBUTE, snapshot),
    );

    let page = CalendarPage::mount(source.clone(), document.clone(), &AppConfig::default(), fixed_clock(today())).await;

    assert!(source.calls().is_empty());
    let events = page.events();
    assert_eq!(events[0].date_display, "5-7 березня 2024");
    assert_eq!(events[0].status.as_str(), "ongoing");
    assert!(document.html(EVENTS_CONTAINER).unwrap().contains("Кубок України"));
}

/// News source that is slow for every page past the first
#[derive(Default)]
struct SlowNews {
    queries: Mutex<Vec<NewsQuery>>,
}

fn news(id: &str, category: &str) -> NewsItem {
    serde_json::from_value(json!({ "id": id, "title": id, "category": category })).unwrap()
}

#[async_trait]
impl NewsSource for SlowNews {
    async fn news_page(&self, query: &NewsQuery) -> AppResult<(Vec<NewsItem>, Option<PageMeta>)> {
        self.queries.lock().unwrap().push(query.clone());
        if query.offset.unwrap_or(0) > 0 {
            tokio::time::sleep(Duration::from_millis(500)).await;
        }

        let category = query.category.clone().unwrap_or_else(|| "competitions".to_string());
        let offset = query.offset.unwrap_or(0);
        let items = (0..8)
            .map(|i| news(&format!("{}-{}", category, offset + i), &category))
            .collect();
        Ok((items, None))
    }

    async fn featured(&self, _limit: u32) -> AppResult<Vec<NewsItem>> {
        Ok(Vec::new())
    }

    async fn latest(&self, _limit: u32) -> AppResult<Vec<NewsItem>> {
        Ok(Vec::new())
    }

    async fn article(&self, slug: &str) -> AppResult<NewsItem> {
        Ok(news(slug, "competitions"))
    }
}

#[tokio::test(start_paused = true)]
async fn test_stale_news_page_is_discarded() {
    let source = Arc::new(SlowNews::default());
    let document = Arc::new(InMemoryDocument::new());
    let page = NewsPage::mount(source.clone(), document.clone(), &AppConfig::default()).await;

    let slow = {
        let page = page.clone();
        tokio::spawn(async move { page.dispatch(NewsAction::NextPage).await })
    };
    tokio::task::yield_now().await;
    page.dispatch(NewsAction::SetCategory("federation".into())).await;
    slow.await.unwrap();

    let items = page.items();
    assert!(items.iter().all(|item| item.category == "federation"));
    assert_eq!(items[0].id, "federation-0");
    assert_eq!(page.pagination().offset, 0);
    assert!(document.html(NEWS_CONTAINER).unwrap().contains("/news/federation-0"));
}

#[tokio::test(start_paused = true)]
async fn test_search_burst_sends_one_request() {
    let source = Arc::new(SlowNews::default());
    let document = Arc::new(InMemoryDocument::new());
    let page = NewsPage::mount(source.clone(), document, &AppConfig::default()).await;

    for text in ["д", "дз", "дзю", "дзюдо"] {
        page.search(text.to_string());
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    tokio::time::sleep(Duration::from_millis(500)).await;
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }

    let queries = source.queries.lock().unwrap().clone();
    let searches: Vec<Option<String>> = queries.iter().map(|q| q.search.clone()).collect();
    assert_eq!(searches, vec![None, Some("дзюдо".to_string())]);
    assert_eq!(queries[1].offset, Some(0));
}

#[tokio::test]
async fn test_article_page_with_empty_latest() {
    let source = Arc::new(SlowNews::default());
    let document = Arc::new(InMemoryDocument::new());
    let page = NewsArticlePage::mount(source.clone(), document.clone(), &AppConfig::default(), "zbory-2024").await;

    assert_eq!(page.load_state(), LoadState::Loaded);
    assert_eq!(page.latest_state(), LoadState::Loaded);
    assert!(document.html(ARTICLE_CONTAINER).unwrap().contains(r#"data-news-id="zbory-2024""#));
    assert!(document.html(ARTICLE_LATEST_CONTAINER).unwrap().contains("empty-state"));
    assert!(source.queries.lock().unwrap().is_empty());
}
