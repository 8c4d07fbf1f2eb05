//! Markup generation: view-models to HTML fragments
//!
//! Every content-derived string goes through [`Escaped`] before it is
//! interpolated.

pub mod events;
pub mod news;
pub mod team;

use indexmap::IndexMap;

use crate::format::html::Escaped;

/// `<option>` list for a filter select, with an "all" entry first
pub fn select_options(
    table: &IndexMap<&'static str, &'static str>,
    all_label: &str,
    selected: Option<&str>,
) -> String {
    let mut html = format!(
        r#"<option value="all"{}>{}</option>"#,
        if selected.is_none() { " selected" } else { "" },
        Escaped(all_label)
    );
    for (code, label) in table.iter().filter(|(code, _)| **code != "all") {
        html.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            Escaped(code),
            if selected == Some(*code) { " selected" } else { "" },
            Escaped(label)
        ));
    }
    html
}

fn optional_line(class: &str, value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => format!(r#"<p class="{}">{}</p>"#, class, Escaped(v)),
        None => String::new(),
    }
}
