//! Extraction of an element's inner HTML from a server-rendered document

use regex::Regex;

use crate::error::{AppError, AppResult};

/// Inner HTML of the element whose `id` attribute equals `id`
///
/// Nested elements with the same tag name are balanced; anything after the
/// matching close tag is ignored.
pub fn extract_inner_html(document: &str, id: &str) -> AppResult<String> {
    let open = Regex::new(&format!(
        r#"(?is)<([a-z][a-z0-9-]*)\b[^>]*\sid\s*=\s*["']{}["'][^>]*>"#,
        regex::escape(id)
    ))
    .map_err(|e| AppError::FragmentNotFound(e.to_string()))?;

    let captures = open
        .captures(document)
        .ok_or_else(|| AppError::FragmentNotFound(id.to_string()))?;
    let whole = captures
        .get(0)
        .ok_or_else(|| AppError::FragmentNotFound(id.to_string()))?;
    let tag = captures
        .get(1)
        .map(|m| m.as_str().to_ascii_lowercase())
        .ok_or_else(|| AppError::FragmentNotFound(id.to_string()))?;

    let body_start = whole.end();
    let tags = Regex::new(&format!(r"(?i)<(/?){}\b[^>]*>", regex::escape(&tag)))
        .map_err(|e| AppError::FragmentNotFound(e.to_string()))?;

    let mut depth = 1usize;
    for m in tags.captures_iter(&document[body_start..]) {
        let closing = m.get(1).is_some_and(|g| !g.as_str().is_empty());
        let full = match m.get(0) {
            Some(full) => full,
            None => continue,
        };
        if closing {
            depth -= 1;
            if depth == 0 {
                let end = body_start + full.start();
                return Ok(document[body_start..end].to_string());
            }
        } else if !full.as_str().ends_with("/>") {
            depth += 1;
        }
    }

    Err(AppError::FragmentNotFound(format!("{} (unclosed)", id)))
}
