//! Query string building from structured filter objects

use url::form_urlencoded;

use crate::models::{event::EventQuery, news::NewsQuery};

const ALL: &str = "all";

/// Ordered list of query parameters
///
/// Absent values and blank strings are skipped. Selector keys additionally
/// skip the `all` sentinel; free text such as `search` is sent verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        let value = value.to_string();
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            self.pairs.push((key.to_string(), trimmed.to_string()));
        }
        self
    }

    /// Like `push`, but `all` means "no restriction" and is left out
    pub fn push_selector(&mut self, key: &str, value: &str) -> &mut Self {
        if value.trim() != ALL {
            self.push(key, value);
        }
        self
    }

    pub fn push_selector_opt(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.push_selector(key, value);
        }
        self
    }

    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// `application/x-www-form-urlencoded` form, without the leading `?`
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl From<&EventQuery> for QueryParams {
    fn from(query: &EventQuery) -> Self {
        let mut params = QueryParams::new();
        params
            .push_selector_opt("type", query.event_type.as_deref())
            .push_selector_opt("category", query.category.as_deref())
            .push_selector_opt("status", query.status.as_deref())
            .push_selector_opt("age_group", query.age_group.as_deref())
            .push_opt("featured", query.featured)
            .push_opt("from_date", query.from_date.as_deref())
            .push_opt("to_date", query.to_date.as_deref())
            .push_opt("limit", query.limit)
            .push_opt("offset", query.offset);
        params
    }
}

impl From<&NewsQuery> for QueryParams {
    fn from(query: &NewsQuery) -> Self {
        let mut params = QueryParams::new();
        params
            .push_selector_opt("category", query.category.as_deref())
            .push_opt("search", query.search.as_deref())
            .push_opt("featured", query.featured)
            .push_opt("limit", query.limit)
            .push_opt("offset", query.offset);
        params
    }
}
