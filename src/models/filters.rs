//! Page filter state (calendar, news, team)

use std::fmt;

/// A single enumerated filter selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selector {
    /// No restriction
    #[default]
    Any,
    Only(String),
}

impl Selector {
    /// Parse a raw select value; `all` and the empty string mean no restriction
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == "all" {
            Selector::Any
        } else {
            Selector::Only(value.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selector::Any => true,
            Selector::Only(selected) => selected == value,
        }
    }

    pub fn as_option(&self) -> Option<&str> {
        match self {
            Selector::Any => None,
            Selector::Only(v) => Some(v.as_str()),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selector::Any)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Any => write!(f, "all"),
            Selector::Only(v) => write!(f, "{}", v),
        }
    }
}

/// Calendar filters, applied client-side to the loaded month
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilters {
    pub event_type: Selector,
    pub category: Selector,
    pub status: Selector,
    pub age_group: Selector,
    /// Free-text search over title and location fields
    pub search: Option<String>,
}

impl EventFilters {
    pub fn is_empty(&self) -> bool {
        self.event_type.is_any()
            && self.category.is_any()
            && self.status.is_any()
            && self.age_group.is_any()
            && self.search.as_deref().map_or(true, |s| s.trim().is_empty())
    }
}

/// Offset-based pagination cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
}

impl Pagination {
    pub fn new(limit: u32) -> Self {
        Self { limit: limit.max(1), offset: 0 }
    }

    /// Zero-based page index
    pub fn page(&self) -> u32 {
        self.offset / self.limit
    }

    pub fn goto(&mut self, page: u32) {
        self.offset = page.saturating_mul(self.limit);
    }

    pub fn next(&mut self) {
        self.offset = self.offset.saturating_add(self.limit);
    }

    pub fn prev(&mut self) {
        self.offset = self.offset.saturating_sub(self.limit);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsFilters {
    pub category: Selector,
    pub search: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamFilters {
    pub category: Selector,
}
