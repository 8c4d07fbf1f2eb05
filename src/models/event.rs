//! Event model (championships, cups, tournaments, seminars, training camps)

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};

use super::{deserialize_id, ListPayload};

/// Event record as delivered by the API or embedded in the calendar page
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Start date (ISO 8601)
    #[serde(alias = "date_start")]
    pub date: String,
    /// End date (ISO 8601), absent for single-day events
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, alias = "date_end")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub organizer: Option<String>,
    /// international | national
    #[serde(rename = "type", alias = "event_type", default)]
    pub event_type: String,
    /// championship | cup | tournament | seminar | university | training
    #[serde(default)]
    pub category: String,
    /// U12..U23 | adults | veterans | officials
    #[serde(alias = "age_group", default)]
    pub age_group: String,
    #[serde(default)]
    pub featured: bool,
    /// Server-asserted status: planned | ongoing | finished | canceled
    #[serde(default = "default_status")]
    pub status: String,
    /// Relative link to the regulation document
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, alias = "regulation_path")]
    pub regulation: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, alias = "image_path")]
    pub image: Option<String>,
}

fn default_status() -> String {
    "planned".to_string()
}

/// Query parameters for `/events`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventQuery {
    pub event_type: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub age_group: Option<String>,
    pub featured: Option<bool>,
    /// Lower bound on the start date (YYYY-MM-DD)
    pub from_date: Option<String>,
    /// Upper bound on the start date (YYYY-MM-DD)
    pub to_date: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Events list response (bare array or `data` envelope)
pub type EventsPayload = ListPayload<Event>;
