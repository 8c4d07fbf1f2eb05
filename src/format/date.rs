//! Date parsing and Ukrainian date formatting

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

pub const UNKNOWN_DATE: &str = "Дата невідома";

/// Month names in the genitive case, used after a day number ("5 березня")
const MONTHS_GENITIVE: [&str; 12] = [
    "січня", "лютого", "березня", "квітня", "травня", "червня",
    "липня", "серпня", "вересня", "жовтня", "листопада", "грудня",
];

/// Month names in the nominative case, used in headings ("Березень 2024")
const MONTHS_NOMINATIVE: [&str; 12] = [
    "Січень", "Лютий", "Березень", "Квітень", "Травень", "Червень",
    "Липень", "Серпень", "Вересень", "Жовтень", "Листопад", "Грудень",
];

pub fn month_genitive(month: u32) -> &'static str {
    MONTHS_GENITIVE
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

pub fn month_name(month: u32) -> &'static str {
    MONTHS_NOMINATIVE
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// Heading for a calendar month, e.g. "Березень 2024"
pub fn month_title(year: i32, month: u32) -> String {
    format!("{} {}", month_name(month), year)
}

/// Parse an ISO date or timestamp into a local calendar date
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (converted to local time) and
/// naive `YYYY-MM-DDTHH:MM:SS` timestamps. Time of day is dropped.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt.date());
    }
    None
}

/// "5 березня 2024"
pub fn format_naive_date(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), month_genitive(date.month()), date.year())
}

/// Format an ISO date string for display
///
/// Missing input gives the "unknown date" text; unparseable input is
/// returned unchanged.
pub fn format_date(value: Option<&str>) -> String {
    match value {
        None => UNKNOWN_DATE.to_string(),
        Some(raw) if raw.trim().is_empty() => UNKNOWN_DATE.to_string(),
        Some(raw) => match parse_date(raw) {
            Some(date) => format_naive_date(date),
            None => raw.to_string(),
        },
    }
}

/// Format a parsed date range
pub fn format_range(start: NaiveDate, end: Option<NaiveDate>) -> String {
    let end = match end {
        Some(end) if end != start => end,
        _ => return format_naive_date(start),
    };

    if start.year() == end.year() && start.month() == end.month() {
        format!(
            "{}-{} {} {}",
            start.day(),
            end.day(),
            month_genitive(start.month()),
            start.year()
        )
    } else {
        format!("{} – {}", format_naive_date(start), format_naive_date(end))
    }
}

/// Format a start/end pair of ISO strings
pub fn format_date_range(start: &str, end: Option<&str>) -> String {
    let Some(start_date) = parse_date(start) else {
        return format_date(Some(start));
    };
    let end_date = end.and_then(parse_date);
    format_range(start_date, end_date)
}
