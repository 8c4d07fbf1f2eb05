//! API integration tests against a running federation backend

use fdu_site::{
    api::{ApiClient, CalendarPageQuery},
    config::AppConfig,
    models::NewsQuery,
    AppError,
};

const BASE_URL: &str = "http://localhost:8000";

fn client() -> ApiClient {
    let mut config = AppConfig::default();
    config.api.base_url = format!("{}/api/v1", BASE_URL);
    config.site.base_url = BASE_URL.to_string();
    ApiClient::new(&config).expect("Failed to build client")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_events_by_month() {
    let events = client()
        .events_by_month(2024, 3)
        .await
        .expect("Failed to load events");

    for event in &events {
        assert!(!event.id.is_empty());
        assert!(!event.date.is_empty());
    }
}

#[tokio::test]
#[ignore]
async fn test_news_page_respects_limit() {
    let query = NewsQuery {
        limit: Some(8),
        offset: Some(0),
        ..Default::default()
    };

    let (items, _) = client().list_news(&query).await.expect("Failed to load news");
    assert!(items.len() <= 8);
}

#[tokio::test]
#[ignore]
async fn test_latest_and_featured_news() {
    let client = client();

    let latest = client.latest_news(3).await.expect("Failed to load latest news");
    assert!(latest.len() <= 3);

    let featured = client.featured_news(3).await.expect("Failed to load featured news");
    assert!(featured.iter().all(|item| item.featured));
}

#[tokio::test]
#[ignore]
async fn test_team_by_category() {
    let members = client()
        .list_team(Some("men"))
        .await
        .expect("Failed to load team");

    assert!(members.iter().all(|m| m.category == "men"));
}

#[tokio::test]
#[ignore]
async fn test_unknown_news_slug_is_not_found() {
    let err = client()
        .news_by_slug("no-such-article-slug")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Http { status: 404, .. }));
}

#[tokio::test]
#[ignore]
async fn test_calendar_page_contains_events_container() {
    let client = client();
    let url = client
        .calendar_page_url(&CalendarPageQuery {
            year: 2024,
            month: 3,
            ..Default::default()
        })
        .expect("Failed to build calendar URL");

    let page = client.get_page(&url).await.expect("Failed to load calendar page");
    assert!(fdu_site::fragment::extract_inner_html(&page, "events-container").is_ok());
}
