//! HTML escaping and placeholder markup

use std::fmt;

/// Escape a content string for use in element text or attribute values
pub fn escape(value: &str) -> String {
    Escaped(value).to_string()
}

/// Display wrapper that escapes on write, for use inside `format!`
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(&['&', '<', '>', '"', '\''][..]) {
            f.write_str(&rest[..pos])?;
            let entity = match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#39;",
            };
            f.write_str(entity)?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}

pub fn loading_placeholder(message: &str) -> String {
    format!(
        r#"<div class="loading-state"><div class="spinner"></div><p>{}</p></div>"#,
        Escaped(message)
    )
}

/// Inline error block with a retry affordance
pub fn error_placeholder(message: &str) -> String {
    format!(
        r#"<div class="error-state"><p>{}</p><button type="button" class="retry-btn" data-action="reload">Спробувати ще раз</button></div>"#,
        Escaped(message)
    )
}

pub fn empty_placeholder(message: &str) -> String {
    format!(r#"<div class="empty-state"><p>{}</p></div>"#, Escaped(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("Tom & Jerry's"), "Tom &amp; Jerry&#39;s");
        assert_eq!(escape("Київ"), "Київ");
    }

    #[test]
    fn test_escaped_inside_format() {
        let raw = r#"a<b>&"c"'d'z"#;
        assert_eq!(
            format!("[{}]", Escaped(raw)),
            "[a&lt;b&gt;&amp;&quot;c&quot;&#39;d&#39;z]"
        );
        assert_eq!(format!("{}", Escaped("")), "");
    }

    #[test]
    fn test_error_placeholder_has_retry() {
        let html = error_placeholder("<oops>");
        assert!(html.contains("&lt;oops&gt;"));
        assert!(html.contains(r#"data-action="reload""#));
    }
}
