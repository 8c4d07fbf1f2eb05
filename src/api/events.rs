//! Events endpoints

use crate::{
    error::AppResult,
    models::event::{Event, EventQuery, EventsPayload},
};

use super::{ApiClient, QueryParams};

/// Query for the server-rendered `/calendar` page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarPageQuery {
    pub year: i32,
    pub month: u32,
    pub search: Option<String>,
    pub status: Option<String>,
    pub event_type: Option<String>,
    pub category: Option<String>,
}

impl From<&CalendarPageQuery> for QueryParams {
    fn from(query: &CalendarPageQuery) -> Self {
        let mut params = QueryParams::new();
        params
            .push("year", query.year)
            .push("month", query.month)
            .push_opt("search", query.search.as_deref())
            .push_selector_opt("status", query.status.as_deref())
            .push_selector_opt("type", query.event_type.as_deref())
            .push_selector_opt("category", query.category.as_deref());
        params
    }
}

/// Named lists under `/events/{name}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventList {
    Upcoming,
    Featured,
    Current,
    Past,
}

impl EventList {
    fn segment(&self) -> &'static str {
        match self {
            EventList::Upcoming => "upcoming",
            EventList::Featured => "featured",
            EventList::Current => "current",
            EventList::Past => "past",
        }
    }
}

impl ApiClient {
    /// `/events` with filters and pagination
    pub async fn list_events(&self, query: &EventQuery) -> AppResult<Vec<Event>> {
        let payload: EventsPayload = self.get_json(&["events"], &QueryParams::from(query)).await?;
        Ok(payload.into_items())
    }

    /// `/events/upcoming`, `/events/featured`, `/events/current` or `/events/past`
    pub async fn event_list(
        &self,
        list: EventList,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> AppResult<Vec<Event>> {
        let mut params = QueryParams::new();
        params.push_opt("limit", limit).push_opt("offset", offset);
        let payload: EventsPayload = self.get_json(&["events", list.segment()], &params).await?;
        Ok(payload.into_items())
    }

    pub async fn upcoming_events(&self, limit: Option<u32>, offset: Option<u32>) -> AppResult<Vec<Event>> {
        self.event_list(EventList::Upcoming, limit, offset).await
    }

    pub async fn featured_events(&self, limit: Option<u32>, offset: Option<u32>) -> AppResult<Vec<Event>> {
        self.event_list(EventList::Featured, limit, offset).await
    }

    pub async fn current_events(&self, limit: Option<u32>, offset: Option<u32>) -> AppResult<Vec<Event>> {
        self.event_list(EventList::Current, limit, offset).await
    }

    pub async fn past_events(&self, limit: Option<u32>, offset: Option<u32>) -> AppResult<Vec<Event>> {
        self.event_list(EventList::Past, limit, offset).await
    }

    /// `/events/by-month/{year}/{month}`
    pub async fn events_by_month(&self, year: i32, month: u32) -> AppResult<Vec<Event>> {
        let year = year.to_string();
        let month = month.to_string();
        let payload: EventsPayload = self
            .get_json(&["events", "by-month", &year, &month], &QueryParams::new())
            .await?;
        Ok(payload.into_items())
    }

    /// `/events/{id}`
    pub async fn event_by_id(&self, id: &str) -> AppResult<Event> {
        self.get_json(&["events", id], &QueryParams::new()).await
    }

    /// Absolute URL of the server-rendered calendar page for `query`
    pub fn calendar_page_url(&self, query: &CalendarPageQuery) -> AppResult<String> {
        Ok(self.site_url(&["calendar"], &QueryParams::from(query))?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_calendar_page_url() {
        let mut config = AppConfig::default();
        config.site.base_url = "https://judo.example.org".into();
        let client = ApiClient::new(&config).unwrap();

        let url = client
            .calendar_page_url(&CalendarPageQuery {
                year: 2024,
                month: 3,
                status: Some("all".into()),
                event_type: Some("national".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(url, "https://judo.example.org/calendar?year=2024&month=3&type=national");

        let url = client
            .calendar_page_url(&CalendarPageQuery {
                year: 2024,
                month: 3,
                search: Some("all".into()),
                category: Some("all".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(url, "https://judo.example.org/calendar?year=2024&month=3&search=all");
    }
}
