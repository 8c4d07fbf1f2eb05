//! Calendar page: one month of events with client-side filters

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Datelike;

use crate::{
    api::{CalendarPageQuery, EventsSource},
    config::AppConfig,
    document::Document,
    error::{AppError, AppResult},
    format::html::{error_placeholder, loading_placeholder},
    fragment::extract_inner_html,
    models::{
        event::Event,
        filters::{EventFilters, Selector},
    },
    labels,
    render::{events as markup, select_options},
    view::event::{apply_filters, derive_all, sort_for_display, EventStats, EventView},
};

use super::{Clock, LoadState, RequestSequence};

pub const EVENTS_CONTAINER: &str = "events-container";
pub const MONTH_HEADING: &str = "calendar-month";
pub const STATS_CONTAINER: &str = "calendar-stats";
pub const ACTIVE_FILTERS_CONTAINER: &str = "active-filters";
pub const TYPE_SELECT: &str = "filter-type";
pub const CATEGORY_SELECT: &str = "filter-category";
pub const STATUS_SELECT: &str = "filter-status";
pub const AGE_GROUP_SELECT: &str = "filter-age-group";

/// Attribute of the events container holding the JSON snapshot
pub const INITIAL_DATA_ATTRIBUTE: &str = "data-events";

/// Month index shifted by `delta`, carrying into the year
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year * 12 + (month as i32 - 1) + delta;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

/// Filter selectors a visitor can change or clear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    EventType,
    Category,
    Status,
    AgeGroup,
    Search,
}

impl FilterField {
    /// Parse the name carried by `data-clear-filter` and the filter inputs
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "type" | "event_type" => Some(FilterField::EventType),
            "category" => Some(FilterField::Category),
            "status" => Some(FilterField::Status),
            "age_group" => Some(FilterField::AgeGroup),
            "search" => Some(FilterField::Search),
            _ => None,
        }
    }
}

/// User interactions on the calendar page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarAction {
    PrevMonth,
    NextMonth,
    SetFilter(FilterField, String),
    ClearFilter(FilterField),
    ResetFilters,
    /// Retry after an error
    Reload,
    /// Reload through the server-rendered calendar page
    ServerReload,
}

#[derive(Debug, Default)]
struct CalendarState {
    load: LoadState,
    year: i32,
    month: u32,
    filters: EventFilters,
    events: Vec<EventView>,
    /// Month the held `events` belong to
    events_month: Option<(i32, u32)>,
    /// Visitor-facing message while `load` is `Error`
    error: Option<&'static str>,
}

impl CalendarState {
    fn visible(&self) -> Vec<EventView> {
        if self.events_month != Some((self.year, self.month)) {
            return Vec::new();
        }
        let mut visible = apply_filters(&self.events, &self.filters);
        sort_for_display(&mut visible);
        visible
    }

    fn fail(&mut self, error: &AppError) {
        self.load = LoadState::Error(error.to_string());
        self.error = Some(error.user_message());
    }
}

struct Inner {
    source: Arc<dyn EventsSource>,
    document: Arc<dyn Document>,
    static_root: String,
    clock: Clock,
    sequence: RequestSequence,
    state: Mutex<CalendarState>,
}

/// Handle to a mounted calendar page
#[derive(Clone)]
pub struct CalendarPage {
    inner: Arc<Inner>,
}

impl CalendarPage {
    /// Mount the calendar: hydrate from the page snapshot or fetch the month
    pub async fn mount(
        source: Arc<dyn EventsSource>,
        document: Arc<dyn Document>,
        config: &AppConfig,
        clock: Clock,
    ) -> Self {
        let today = clock();
        let year = document
            .attribute(EVENTS_CONTAINER, "data-year")
            .and_then(|v| v.trim().parse::<i32>().ok())
            .unwrap_or(today.year());
        let month = document
            .attribute(EVENTS_CONTAINER, "data-month")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|m| (1..=12).contains(m))
            .unwrap_or(today.month());

        let page = Self {
            inner: Arc::new(Inner {
                source,
                document,
                static_root: config.site.static_root.clone(),
                clock,
                sequence: RequestSequence::default(),
                state: Mutex::new(CalendarState {
                    year,
                    month,
                    ..Default::default()
                }),
            }),
        };

        if !page.hydrate() {
            page.load_month().await;
        }
        page
    }

    pub async fn dispatch(&self, action: CalendarAction) {
        tracing::debug!("Calendar action: {:?}", action);
        match action {
            CalendarAction::PrevMonth => self.shift(-1).await,
            CalendarAction::NextMonth => self.shift(1).await,
            CalendarAction::SetFilter(field, value) => self.set_filter(field, &value),
            CalendarAction::ClearFilter(field) => self.clear_filter(field),
            CalendarAction::ResetFilters => self.reset_filters(),
            CalendarAction::Reload => self.load_month().await,
            CalendarAction::ServerReload => self.server_reload().await,
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.state().load.clone()
    }

    pub fn month(&self) -> (i32, u32) {
        let state = self.state();
        (state.year, state.month)
    }

    pub fn filters(&self) -> EventFilters {
        self.state().filters.clone()
    }

    /// Every event of the last successfully loaded month, unfiltered
    pub fn events(&self) -> Vec<EventView> {
        self.state().events.clone()
    }

    /// Events currently shown: filtered and sorted, empty while the selected
    /// month has not loaded
    pub fn visible_events(&self) -> Vec<EventView> {
        self.state().visible()
    }

    fn state(&self) -> MutexGuard<'_, CalendarState> {
        self.inner.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Render the page snapshot if there is one; false when a fetch is needed
    fn hydrate(&self) -> bool {
        let raw = match self
            .inner
            .document
            .attribute(EVENTS_CONTAINER, INITIAL_DATA_ATTRIBUTE)
        {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return false,
        };

        match parse_snapshot(&raw) {
            Ok(events) if events.is_empty() => {
                tracing::debug!("Initial calendar snapshot is empty");
                false
            }
            Ok(events) => {
                let today = (self.inner.clock)();
                let derived = derive_all(&events, today, &self.inner.static_root);
                tracing::info!("Hydrated calendar with {} events", derived.len());
                {
                    let mut state = self.state();
                    state.events_month = Some((state.year, state.month));
                    state.events = derived;
                    state.load = LoadState::Loaded;
                }
                self.render();
                true
            }
            Err(e) => {
                tracing::warn!("Discarding calendar snapshot: {}", e);
                self.inner
                    .document
                    .set_html(EVENTS_CONTAINER, &error_placeholder(e.user_message()));
                false
            }
        }
    }

    async fn shift(&self, delta: i32) {
        {
            let mut state = self.state();
            let (year, month) = shift_month(state.year, state.month, delta);
            state.year = year;
            state.month = month;
        }
        self.load_month().await;
    }

    /// Fetch the current month through the JSON API
    pub async fn load_month(&self) {
        let (year, month) = {
            let mut state = self.state();
            state.load = LoadState::Loading;
            (state.year, state.month)
        };
        let token = self.inner.sequence.issue();
        let document = &self.inner.document;
        document.set_html(MONTH_HEADING, &markup::month_heading(year, month));
        document.set_html(EVENTS_CONTAINER, &loading_placeholder("Завантаження подій..."));

        let result = self.inner.source.events_by_month(year, month).await;

        if !self.inner.sequence.is_latest(token) {
            tracing::warn!("Discarding stale response for {}-{:02}", year, month);
            return;
        }

        match result {
            Ok(events) => {
                let today = (self.inner.clock)();
                let derived = derive_all(&events, today, &self.inner.static_root);
                tracing::info!("Loaded {} events for {}-{:02}", derived.len(), year, month);
                {
                    let mut state = self.state();
                    state.events = derived;
                    state.events_month = Some((year, month));
                    state.load = LoadState::Loaded;
                    state.error = None;
                }
                self.render();
            }
            Err(e) => {
                tracing::error!("Failed to load events for {}-{:02}: {}", year, month, e);
                self.state().fail(&e);
                self.render();
            }
        }
    }

    pub fn set_filter(&self, field: FilterField, value: &str) {
        {
            let mut state = self.state();
            let filters = &mut state.filters;
            match field {
                FilterField::EventType => filters.event_type = Selector::parse(value),
                FilterField::Category => filters.category = Selector::parse(value),
                FilterField::Status => filters.status = Selector::parse(value),
                FilterField::AgeGroup => filters.age_group = Selector::parse(value),
                FilterField::Search => {
                    let value = value.trim();
                    filters.search = (!value.is_empty()).then(|| value.to_string());
                }
            }
        }
        self.render();
    }

    pub fn clear_filter(&self, field: FilterField) {
        self.set_filter(field, "");
    }

    pub fn reset_filters(&self) {
        self.state().filters = EventFilters::default();
        self.render();
    }

    /// Client-side render of the loaded month
    ///
    /// While the last load failed the events container keeps the error block.
    pub fn render(&self) {
        let (year, month, filters, visible, error) = {
            let state = self.state();
            let error = match state.load {
                LoadState::Error(_) => state.error,
                _ => None,
            };
            (state.year, state.month, state.filters.clone(), state.visible(), error)
        };

        let document = &self.inner.document;
        document.set_html(MONTH_HEADING, &markup::month_heading(year, month));
        match error {
            Some(message) => document.set_html(EVENTS_CONTAINER, &error_placeholder(message)),
            None => document.set_html(EVENTS_CONTAINER, &markup::event_list(&visible)),
        }
        document.set_html(STATS_CONTAINER, &markup::stats(&EventStats::collect(&visible)));
        document.set_html(ACTIVE_FILTERS_CONTAINER, &markup::active_filters(&filters));
        self.render_selects(&filters);
    }

    fn render_selects(&self, filters: &EventFilters) {
        let document = &self.inner.document;
        document.set_html(
            TYPE_SELECT,
            &select_options(&labels::EVENT_TYPES, "Усі типи", filters.event_type.as_option()),
        );
        document.set_html(
            CATEGORY_SELECT,
            &select_options(&labels::EVENT_CATEGORIES, "Усі категорії", filters.category.as_option()),
        );
        document.set_html(
            STATUS_SELECT,
            &select_options(&labels::EVENT_STATUSES, "Усі статуси", filters.status.as_option()),
        );
        document.set_html(
            AGE_GROUP_SELECT,
            &select_options(&labels::AGE_GROUPS, "Усі вікові групи", filters.age_group.as_option()),
        );
    }

    pub fn calendar_query(&self) -> CalendarPageQuery {
        let state = self.state();
        CalendarPageQuery {
            year: state.year,
            month: state.month,
            search: state.filters.search.clone(),
            status: state.filters.status.as_option().map(str::to_string),
            event_type: state.filters.event_type.as_option().map(str::to_string),
            category: state.filters.category.as_option().map(str::to_string),
        }
    }

    /// Splice the server-rendered events container into the page
    ///
    /// Any failure falls back to a full navigation to the same URL.
    pub async fn server_reload(&self) {
        let query = self.calendar_query();
        let url = match self.inner.source.calendar_page_url(&query) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("Cannot build calendar page URL: {}", e);
                self.state().fail(&e);
                self.render();
                return;
            }
        };

        self.state().load = LoadState::Loading;
        let token = self.inner.sequence.issue();
        self.inner
            .document
            .set_html(EVENTS_CONTAINER, &loading_placeholder("Завантаження подій..."));

        let result = self.fetch_fragment(&url).await;

        if !self.inner.sequence.is_latest(token) {
            tracing::warn!("Discarding stale calendar page {}", url);
            return;
        }

        match result {
            Ok(fragment) => {
                tracing::info!("Spliced calendar fragment from {}", url);
                {
                    let mut state = self.state();
                    state.load = LoadState::Loaded;
                    state.error = None;
                }
                self.inner.document.set_html(EVENTS_CONTAINER, &fragment);
            }
            Err(e) => {
                tracing::warn!("Server reload failed ({}), navigating to {}", e, url);
                self.inner.document.navigate(&url);
            }
        }
    }

    async fn fetch_fragment(&self, url: &str) -> AppResult<String> {
        let page = self.inner.source.fetch_page(url).await?;
        extract_inner_html(&page, EVENTS_CONTAINER)
    }
}

fn parse_snapshot(raw: &str) -> AppResult<Vec<Event>> {
    serde_json::from_str(raw).map_err(|e| AppError::InitialData(e.to_string()))
}
