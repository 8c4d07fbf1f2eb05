//! Formatting utilities shared by all pages

pub mod date;
pub mod debounce;
pub mod html;

pub use date::{format_date, format_date_range, month_title, parse_date};
pub use debounce::Debouncer;
pub use html::{escape, Escaped};
