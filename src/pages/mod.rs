//! Page controllers
//!
//! Each controller owns its page state, loads data through a source trait,
//! derives view-models and writes the rendered fragments into named
//! containers of a [`Document`](crate::document::Document).

pub mod calendar;
pub mod detail;
pub mod news;
pub mod team;

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use chrono::{Local, NaiveDate};

pub use calendar::{CalendarAction, CalendarPage, FilterField};
pub use detail::{EventDetailPage, NewsArticlePage};
pub use news::{NewsAction, NewsPage};
pub use team::{TeamAction, TeamPage};

/// Source of "today" for status derivation
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Clock reading the local calendar date
pub fn local_clock() -> Clock {
    Arc::new(|| Local::now().date_naive())
}

/// Clock pinned to a fixed date
pub fn fixed_clock(today: NaiveDate) -> Clock {
    Arc::new(move || today)
}

/// Load state of a page section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Monotonic request token; only the latest issued token may apply its response
#[derive(Debug, Default)]
pub(crate) struct RequestSequence(AtomicU64);

impl RequestSequence {
    pub(crate) fn issue(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(crate) fn is_latest(&self, token: u64) -> bool {
        self.0.load(Ordering::SeqCst) == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_sequence_last_issued_wins() {
        let seq = RequestSequence::default();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
    }

    #[test]
    fn test_fixed_clock() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        assert_eq!((fixed_clock(today))(), today);
    }
}
