//! View-model preparation: raw API records to display-ready records

pub mod event;
pub mod news;
pub mod team;

pub use event::{EventStats, EventStatus, EventView};
pub use news::NewsView;
pub use team::TeamMemberView;

use unicode_normalization::UnicodeNormalization;

/// Public URL for a relative asset path under the static root
///
/// Absolute URLs and root-relative paths are returned unchanged.
pub fn asset_url(static_root: &str, path: &str) -> String {
    let path = path.trim();
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with('/') {
        return path.to_string();
    }
    format!(
        "{}/{}",
        static_root.trim_end_matches('/'),
        path.trim_start_matches("./")
    )
}

/// Case-folded NFC form used for text search
pub(crate) fn fold(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_url_prefixes_relative_paths() {
        assert_eq!(asset_url("/static", "docs/reg.pdf"), "/static/docs/reg.pdf");
        assert_eq!(asset_url("/static/", "./docs/reg.pdf"), "/static/docs/reg.pdf");
        assert_eq!(asset_url("/static", "/media/a.pdf"), "/media/a.pdf");
        assert_eq!(
            asset_url("/static", "https://cdn.example.org/a.pdf"),
            "https://cdn.example.org/a.pdf"
        );
    }

    #[test]
    fn test_fold_is_case_insensitive_for_cyrillic() {
        assert_eq!(fold("КУБОК Києва"), "кубок києва");
    }
}
