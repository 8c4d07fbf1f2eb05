//! Configuration management for the FDU site

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the JSON API, including the `/api/v1` prefix
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL of the server-rendered pages (used for `/calendar` reloads)
    pub base_url: String,
    /// Prefix for relative asset paths (regulations, images)
    pub static_root: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PagesConfig {
    pub news_page_size: u32,
    pub search_debounce_ms: u64,
    pub latest_news_limit: u32,
    pub featured_news_limit: u32,
    /// Latest-news entries shown beside a full article
    pub article_latest_limit: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    /// Optional directory for a daily rolling log file
    pub directory: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub pages: PagesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // FDU_API__BASE_URL, FDU_PAGES__NEWS_PAGE_SIZE, ...
            .add_source(
                Environment::with_prefix("FDU")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("api.base_url", env::var("API_BASE_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/v1".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            static_root: "/static".to_string(),
        }
    }
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            news_page_size: 8,
            search_debounce_ms: 300,
            latest_news_limit: 6,
            featured_news_limit: 3,
            article_latest_limit: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            directory: None,
        }
    }
}
