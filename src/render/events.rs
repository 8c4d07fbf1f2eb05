//! Calendar markup

use crate::{
    format::{
        date::month_title,
        html::{empty_placeholder, Escaped},
    },
    labels,
    models::filters::EventFilters,
    view::event::{EventStats, EventView},
};

use super::optional_line;

pub fn event_card(event: &EventView) -> String {
    let mut classes = String::from("event-card");
    if event.featured {
        classes.push_str(" event-card--featured");
    }

    let featured_badge = if event.featured {
        r#"<span class="badge badge--featured">★ Головна подія</span>"#
    } else {
        ""
    };

    let document_link = match &event.document_url {
        Some(url) => format!(
            r#"<a class="event-card__document" href="{}" target="_blank" rel="noopener">Регламент</a>"#,
            Escaped(url)
        ),
        None => String::new(),
    };

    format!(
        concat!(
            r#"<article class="{classes}" data-event-id="{id}" data-status="{status}">"#,
            r#"<div class="event-card__date">{date}</div>"#,
            r#"<div class="event-card__badges">{featured}"#,
            r#"<span class="badge badge--status badge--{status}">{status_label}</span>"#,
            r#"<span class="badge badge--type">{type_label}</span>"#,
            r#"<span class="badge badge--category">{category_label}</span>"#,
            r#"<span class="badge badge--age">{age_label}</span></div>"#,
            r#"<h3 class="event-card__title">{title}</h3>"#,
            "{location}{description}{document}</article>"
        ),
        classes = classes,
        id = Escaped(&event.id),
        status = event.status.as_str(),
        date = Escaped(&event.date_display),
        featured = featured_badge,
        status_label = Escaped(&event.status_label),
        type_label = Escaped(&event.type_label),
        category_label = Escaped(&event.category_label),
        age_label = Escaped(&event.age_group_label),
        title = Escaped(&event.title),
        location = optional_line("event-card__location", event.location_display.as_deref()),
        description = optional_line("event-card__description", event.description.as_deref()),
        document = document_link,
    )
}

pub fn event_list(events: &[EventView]) -> String {
    if events.is_empty() {
        return empty_placeholder("Подій за вибраний період не знайдено");
    }
    let cards: String = events.iter().map(event_card).collect();
    format!(r#"<div class="events-list">{}</div>"#, cards)
}

pub fn month_heading(year: i32, month: u32) -> String {
    format!(
        r#"<h2 class="calendar-month" data-year="{}" data-month="{}">{}</h2>"#,
        year,
        month,
        month_title(year, month)
    )
}

pub fn stats(stats: &EventStats) -> String {
    format!(
        concat!(
            r#"<ul class="calendar-stats">"#,
            r#"<li><strong>{}</strong> Усього подій</li>"#,
            r#"<li><strong>{}</strong> Міжнародні</li>"#,
            r#"<li><strong>{}</strong> Національні</li>"#,
            r#"<li><strong>{}</strong> Заплановано</li>"#,
            "</ul>"
        ),
        stats.total, stats.international, stats.national, stats.upcoming
    )
}

/// Full event page: every field the card truncates or omits
pub fn event_detail(event: &EventView, days_until: Option<i64>) -> String {
    let image = match &event.image_url {
        Some(url) => format!(
            r#"<img class="event-detail__image" src="{}" alt="{}">"#,
            Escaped(url),
            Escaped(&event.title)
        ),
        None => String::new(),
    };

    let countdown = match days_until {
        Some(days) => format!(
            r#"<p class="event-detail__countdown">До початку: <strong>{}</strong> дн.</p>"#,
            days
        ),
        None => String::new(),
    };

    let regulation = match &event.document_url {
        Some(url) => format!(
            r#"<a class="event-detail__document" href="{}" target="_blank" rel="noopener">Завантажити регламент</a>"#,
            Escaped(url)
        ),
        None => String::new(),
    };

    let source = &event.source;
    format!(
        concat!(
            r#"<article class="event-detail" data-event-id="{id}" data-status="{status}">"#,
            "{image}",
            r#"<h1 class="event-detail__title">{title}</h1>"#,
            r#"<div class="event-detail__date">{date}</div>"#,
            r#"<div class="event-detail__badges">"#,
            r#"<span class="badge badge--status badge--{status}">{status_label}</span>"#,
            r#"<span class="badge badge--type">{type_label}</span>"#,
            r#"<span class="badge badge--category">{category_label}</span>"#,
            r#"<span class="badge badge--age">{age_label}</span></div>"#,
            "{countdown}{location}{address}{organizer}{description}{regulation}</article>"
        ),
        id = Escaped(&event.id),
        status = event.status.as_str(),
        image = image,
        title = Escaped(&event.title),
        date = Escaped(&event.date_display),
        status_label = Escaped(&event.status_label),
        type_label = Escaped(&event.type_label),
        category_label = Escaped(&event.category_label),
        age_label = Escaped(&event.age_group_label),
        countdown = countdown,
        location = optional_line("event-detail__location", event.location_display.as_deref()),
        address = optional_line("event-detail__address", source.address.as_deref()),
        organizer = optional_line("event-detail__organizer", source.organizer.as_deref()),
        description = optional_line("event-detail__description", event.description.as_deref()),
        regulation = regulation,
    )
}

/// Chips for the active filters; each carries the filter name to clear
pub fn active_filters(filters: &EventFilters) -> String {
    let mut chips = Vec::new();

    if let Some(search) = filters.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        chips.push(("search", format!("Пошук: \"{}\"", search)));
    }
    if let Some(status) = filters.status.as_option() {
        chips.push(("status", labels::event_status_label(status).to_string()));
    }
    if let Some(event_type) = filters.event_type.as_option() {
        chips.push(("type", labels::event_type_label(event_type).to_string()));
    }
    if let Some(age_group) = filters.age_group.as_option() {
        chips.push(("age_group", format!("Вік: {}", labels::age_group_label(age_group))));
    }
    if let Some(category) = filters.category.as_option() {
        chips.push(("category", labels::event_category_label(category).to_string()));
    }

    if chips.is_empty() {
        return String::new();
    }

    let items: String = chips
        .iter()
        .map(|(name, label)| {
            format!(
                r#"<button type="button" class="filter-chip" data-clear-filter="{}">{} ×</button>"#,
                name,
                Escaped(label)
            )
        })
        .collect();
    format!(
        r#"<div class="active-filters">{}<button type="button" class="filter-chip filter-chip--reset" data-action="reset-filters">Скинути все</button></div>"#,
        items
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{event::Event, filters::Selector};
    use chrono::NaiveDate;
    use serde_json::json;

    fn view(title: &str, featured: bool) -> EventView {
        let event: Event = serde_json::from_value(json!({
            "id": 9,
            "title": title,
            "date": "2024-03-05",
            "endDate": "2024-03-07",
            "type": "international",
            "category": "championship",
            "ageGroup": "adults",
            "featured": featured,
            "regulation": "docs/9.pdf",
            "location": "Київ, Палац спорту"
        }))
        .unwrap();
        EventView::derive(&event, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), "/static")
    }

    #[test]
    fn test_card_escapes_content() {
        let html = event_card(&view("<img src=x onerror=alert(1)>", false));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }

    #[test]
    fn test_card_contains_derived_fields() {
        let html = event_card(&view("Чемпіонат Європи", true));
        assert!(html.contains("5-7 березня 2024"));
        assert!(html.contains("event-card--featured"));
        assert!(html.contains(r#"data-status="planned""#));
        assert!(html.contains(r#"href="/static/docs/9.pdf""#));
        assert!(html.contains("Київ, Палац спорту"));
        assert!(html.contains("Дорослі"));
    }

    #[test]
    fn test_detail_shows_full_record() {
        let event: Event = serde_json::from_value(json!({
            "id": 12,
            "title": "Кубок України",
            "description": "Повний опис <змагань>",
            "date": "2024-04-12",
            "type": "national",
            "category": "cup",
            "ageGroup": "U18",
            "city": "Львів",
            "address": "вул. Стрийська, 1",
            "organizer": "ФДУ",
            "regulation": "docs/12.pdf",
            "image": "events/12.jpg"
        }))
        .unwrap();
        let view = EventView::derive(&event, NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(), "/static");

        let html = event_detail(&view, Some(37));
        assert!(html.contains("Повний опис &lt;змагань&gt;"));
        assert!(html.contains("Львів"));
        assert!(html.contains("вул. Стрийська, 1"));
        assert!(html.contains("ФДУ"));
        assert!(html.contains(r#"href="/static/docs/12.pdf""#));
        assert!(html.contains(r#"src="/static/events/12.jpg""#));
        assert!(html.contains("<strong>37</strong>"));

        assert!(!event_detail(&view, None).contains("event-detail__countdown"));
    }

    #[test]
    fn test_empty_list_placeholder() {
        assert!(event_list(&[]).contains("empty-state"));
    }

    #[test]
    fn test_active_filter_chips() {
        assert_eq!(active_filters(&EventFilters::default()), "");

        let filters = EventFilters {
            category: Selector::Only("cup".into()),
            search: Some("<b>".into()),
            ..Default::default()
        };
        let html = active_filters(&filters);
        assert!(html.contains(r#"data-clear-filter="category""#));
        assert!(html.contains("Кубок"));
        assert!(html.contains("&lt;b&gt;"));
    }
}
