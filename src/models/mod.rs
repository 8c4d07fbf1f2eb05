//! Data models for the FDU site

pub mod event;
pub mod filters;
pub mod news;
pub mod team;

use serde::{Deserialize, Deserializer, Serialize};

// Re-export commonly used types
pub use event::{Event, EventQuery};
pub use filters::{EventFilters, NewsFilters, Pagination, Selector, TeamFilters};
pub use news::{NewsCategory, NewsItem, NewsQuery};
pub use team::TeamMember;

/// Record identifiers arrive either as JSON numbers or strings
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Str(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Int(n) => n.to_string(),
        RawId::Str(s) => s,
    })
}

/// Pagination metadata returned alongside paginated lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub has_prev: bool,
    #[serde(default)]
    pub has_next: bool,
}

/// List endpoints answer either with a bare array or with a `data` envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Items(Vec<T>),
    Page {
        data: Vec<T>,
        #[serde(default)]
        pagination: Option<PageMeta>,
    },
}

impl<T> ListPayload<T> {
    pub fn into_parts(self) -> (Vec<T>, Option<PageMeta>) {
        match self {
            ListPayload::Items(items) => (items, None),
            ListPayload::Page { data, pagination } => (data, pagination),
        }
    }

    pub fn into_items(self) -> Vec<T> {
        self.into_parts().0
    }
}
