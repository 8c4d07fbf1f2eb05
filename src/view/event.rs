//! Event view-model: derived status, labels and display dates

use chrono::NaiveDate;

use crate::{
    format::date::{format_range, parse_date, UNKNOWN_DATE},
    labels,
    models::{event::Event, filters::EventFilters},
};

use super::{asset_url, fold};

/// Lifecycle status of an event as shown to visitors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventStatus {
    Planned,
    Ongoing,
    Finished,
    Canceled,
}

impl EventStatus {
    /// Lenient parse of a server status string
    pub fn from_server(value: &str) -> Self {
        match value.trim() {
            "canceled" | "cancelled" => EventStatus::Canceled,
            "ongoing" => EventStatus::Ongoing,
            "finished" | "completed" => EventStatus::Finished,
            _ => EventStatus::Planned,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Planned => "planned",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Finished => "finished",
            EventStatus::Canceled => "canceled",
        }
    }

    pub fn label(&self) -> &'static str {
        labels::event_status_label(self.as_str())
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn is_cancellation(status: &str) -> bool {
    matches!(status.trim(), "canceled" | "cancelled")
}

/// Derive the lifecycle status of an event for `today`
///
/// Cancellation is sticky. Otherwise the status follows the calendar-date
/// range `[start, end]`, where a missing end means a single-day event.
pub fn derive_status(
    server_status: &str,
    start: NaiveDate,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> EventStatus {
    if is_cancellation(server_status) {
        return EventStatus::Canceled;
    }

    let effective_end = end.unwrap_or(start);
    if start <= today && today <= effective_end {
        EventStatus::Ongoing
    } else if today > effective_end {
        EventStatus::Finished
    } else {
        EventStatus::Planned
    }
}

/// Display-ready event
#[derive(Debug, Clone, PartialEq)]
pub struct EventView {
    pub id: String,
    pub slug: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub date_display: String,
    pub status: EventStatus,
    pub status_label: String,
    pub event_type: String,
    pub type_label: String,
    pub category: String,
    pub category_label: String,
    pub age_group: String,
    pub age_group_label: String,
    pub location_display: Option<String>,
    pub featured: bool,
    pub document_url: Option<String>,
    pub image_url: Option<String>,
    pub source: Event,
}

impl EventView {
    /// Build the view-model for `event` as of `today`
    pub fn derive(event: &Event, today: NaiveDate, static_root: &str) -> Self {
        let start = parse_date(&event.date);
        let mut end = event.end_date.as_deref().and_then(parse_date);

        if let (Some(s), Some(e)) = (start, end) {
            if e < s {
                tracing::warn!(
                    "Event {} ends ({}) before it starts ({}), treating it as a single-day event",
                    event.id,
                    e,
                    s
                );
                end = None;
            }
        }

        let status = match start {
            Some(start) => derive_status(&event.status, start, end, today),
            None => {
                tracing::warn!("Event {} has an unreadable start date: {:?}", event.id, event.date);
                EventStatus::from_server(&event.status)
            }
        };

        let date_display = match start {
            Some(start) => format_range(start, end),
            None if event.date.trim().is_empty() => UNKNOWN_DATE.to_string(),
            None => event.date.clone(),
        };

        Self {
            id: event.id.clone(),
            slug: event.slug.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            start,
            end,
            date_display,
            status,
            status_label: status.label().to_string(),
            event_type: event.event_type.clone(),
            type_label: labels::event_type_label(&event.event_type).to_string(),
            category: event.category.clone(),
            category_label: labels::event_category_label(&event.category).to_string(),
            age_group: event.age_group.clone(),
            age_group_label: labels::age_group_label(&event.age_group).to_string(),
            location_display: location_of(event),
            featured: event.featured,
            document_url: event.regulation.as_deref().map(|p| asset_url(static_root, p)),
            image_url: event.image.as_deref().map(|p| asset_url(static_root, p)),
            source: event.clone(),
        }
    }

    /// Case-insensitive match against title and location fields
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = fold(query.trim());
        if needle.is_empty() {
            return true;
        }

        [
            Some(self.title.as_str()),
            self.source.location.as_deref(),
            self.source.city.as_deref(),
            self.source.region.as_deref(),
            self.source.organizer.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| fold(field).contains(&needle))
    }

    /// Whole days until a planned event starts
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        match (self.status, self.start) {
            (EventStatus::Planned, Some(start)) if start > today => {
                Some((start - today).num_days())
            }
            _ => None,
        }
    }

    pub fn matches(&self, filters: &EventFilters) -> bool {
        filters.event_type.matches(&self.event_type)
            && filters.category.matches(&self.category)
            && filters.status.matches(self.status.as_str())
            && filters.age_group.matches(&self.age_group)
            && filters.search.as_deref().map_or(true, |q| self.matches_search(q))
    }
}

fn location_of(event: &Event) -> Option<String> {
    if let Some(location) = event.location.as_deref().filter(|l| !l.trim().is_empty()) {
        return Some(location.to_string());
    }

    let parts: Vec<&str> = [event.city.as_deref(), event.region.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Derive a whole event set
pub fn derive_all(events: &[Event], today: NaiveDate, static_root: &str) -> Vec<EventView> {
    events
        .iter()
        .map(|event| EventView::derive(event, today, static_root))
        .collect()
}

/// Subset of `events` matching every active filter, in input order
pub fn apply_filters(events: &[EventView], filters: &EventFilters) -> Vec<EventView> {
    if filters.is_empty() {
        return events.to_vec();
    }
    events.iter().filter(|e| e.matches(filters)).cloned().collect()
}

/// Featured events first, then ascending start date (stable)
pub fn sort_for_display(events: &mut [EventView]) {
    events.sort_by(|a, b| {
        b.featured
            .cmp(&a.featured)
            .then_with(|| a.start.unwrap_or(NaiveDate::MAX).cmp(&b.start.unwrap_or(NaiveDate::MAX)))
    });
}

/// Counters shown above the calendar list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventStats {
    pub total: usize,
    pub international: usize,
    pub national: usize,
    pub upcoming: usize,
}

impl EventStats {
    pub fn collect(events: &[EventView]) -> Self {
        events.iter().fold(Self::default(), |mut stats, e| {
            stats.total += 1;
            match e.event_type.as_str() {
                "international" => stats.international += 1,
                "national" => stats.national += 1,
                _ => {}
            }
            if e.status == EventStatus::Planned {
                stats.upcoming += 1;
            }
            stats
        })
    }
}
