//! FDU Site
//!
//! Presentation layer of the federation website: a client for the JSON API,
//! view-model derivation for events, news and the team roster, HTML fragment
//! rendering, and the page controllers that tie them to a document.

pub mod api;
pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod fragment;
pub mod labels;
pub mod models;
pub mod pages;
pub mod render;
pub mod view;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
