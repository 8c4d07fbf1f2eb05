//! FDU Site preview
//!
//! Mounts one page controller against an in-memory document and prints the
//! rendered containers.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use fdu_site::{
    api::ApiClient,
    config::{AppConfig, LoggingConfig},
    document::InMemoryDocument,
    pages::{local_clock, CalendarPage, EventDetailPage, NewsArticlePage, NewsPage, TeamPage},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    let _guard = init_tracing(&config.logging);

    tracing::info!("Starting FDU site preview v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let page = args.next().unwrap_or_else(|| "calendar".to_string());
    let client = Arc::new(ApiClient::new(&config)?);
    let document = Arc::new(InMemoryDocument::new());

    match page.as_str() {
        "calendar" => {
            let calendar = CalendarPage::mount(client, document.clone(), &config, local_clock()).await;
            tracing::info!("Calendar state: {:?}", calendar.load_state());
        }
        "news" => {
            let news = NewsPage::mount(client, document.clone(), &config).await;
            tracing::info!("News state: {:?}", news.load_state());
        }
        "team" => {
            let team = TeamPage::mount(client, document.clone(), &config).await;
            tracing::info!("Team state: {:?}", team.load_state());
        }
        "event" => {
            let Some(id) = args.next() else {
                anyhow::bail!("Usage: fdu-site event <id>");
            };
            let event = EventDetailPage::mount(client, document.clone(), &config, local_clock(), &id).await;
            tracing::info!("Event state: {:?}", event.load_state());
        }
        "article" => {
            let Some(slug) = args.next() else {
                anyhow::bail!("Usage: fdu-site article <slug>");
            };
            let article = NewsArticlePage::mount(client, document.clone(), &config, &slug).await;
            tracing::info!("Article state: {:?}", article.load_state());
        }
        other => anyhow::bail!(
            "Unknown page '{}', expected calendar, news, team, event or article",
            other
        ),
    }

    for id in document.containers() {
        println!("<!-- #{} -->", id);
        println!("{}", document.html(&id).unwrap_or_default());
    }
    for url in document.navigations() {
        println!("<!-- navigate: {} -->", url);
    }

    Ok(())
}

/// Install the global subscriber; the returned guard flushes the log file
fn init_tracing(logging: &LoggingConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("fdu_site={}", logging.level).into());

    let stderr = if logging.format == "json" {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    let (file, guard) = match &logging.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "fdu-site.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(file)
        .init();

    guard
}
