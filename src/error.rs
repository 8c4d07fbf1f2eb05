//! Error types for the FDU site presentation layer

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid initial data: {0}")]
    InitialData(String),

    #[error("Fragment not found: {0}")]
    FragmentNotFound(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// Build an HTTP error from a response status
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        AppError::Http {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    /// Short message suitable for the inline error block shown to visitors
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Transport(_) => "Не вдалося з'єднатися з сервером",
            AppError::Http { status, .. } if *status == 404 => "Дані не знайдено",
            AppError::Http { .. } => "Сервер повернув помилку",
            AppError::Decode(_) | AppError::InitialData(_) => "Отримано некоректні дані",
            AppError::FragmentNotFound(_) => "Не вдалося оновити сторінку",
            AppError::Url(_) | AppError::Config(_) => "Помилка конфігурації",
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
