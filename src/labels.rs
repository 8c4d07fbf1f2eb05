//! Ukrainian display labels for enumerated codes
//!
//! Every lookup falls back to the raw code when the code is unknown.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

type LabelTable = Lazy<IndexMap<&'static str, &'static str>>;

fn lookup<'a>(table: &IndexMap<&'static str, &'static str>, code: &'a str) -> &'a str {
    match table.get(code) {
        Some(label) => *label,
        None => code,
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

pub static EVENT_TYPES: LabelTable = Lazy::new(|| {
    IndexMap::from([
        ("international", "Міжнародні"),
        ("national", "Національні"),
    ])
});

pub static EVENT_CATEGORIES: LabelTable = Lazy::new(|| {
    IndexMap::from([
        ("championship", "Чемпіонат"),
        ("cup", "Кубок"),
        ("tournament", "Турнір"),
        ("seminar", "Семінар"),
        ("university", "Універсиада"),
        ("training", "Тренувальні збори"),
        ("training_camp", "Тренувальні збори"),
        ("selection", "Відбір"),
    ])
});

pub static EVENT_STATUSES: LabelTable = Lazy::new(|| {
    IndexMap::from([
        ("planned", "Заплановано"),
        ("ongoing", "Триває"),
        ("finished", "Завершено"),
        ("canceled", "Скасовано"),
    ])
});

pub static AGE_GROUPS: LabelTable = Lazy::new(|| {
    IndexMap::from([
        ("U12", "До 12 років"),
        ("U13", "До 13 років"),
        ("U14", "До 14 років"),
        ("U15", "До 15 років"),
        ("U16", "До 16 років"),
        ("U17", "До 17 років"),
        ("U18", "До 18 років"),
        ("U21", "До 21 року"),
        ("U23", "До 23 років"),
        ("adults", "Дорослі"),
        ("veterans", "Ветерани"),
        ("officials", "Офіційні особи"),
        ("senior", "Дорослі"),
        ("junior", "Юніори"),
        ("cadet", "Кадети"),
        ("youth", "Юнаки"),
    ])
});

pub fn event_type_label(code: &str) -> &str {
    lookup(&EVENT_TYPES, code)
}

pub fn event_category_label(code: &str) -> &str {
    lookup(&EVENT_CATEGORIES, code)
}

pub fn event_status_label(code: &str) -> &str {
    lookup(&EVENT_STATUSES, code)
}

pub fn age_group_label(code: &str) -> &str {
    lookup(&AGE_GROUPS, code)
}

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

pub static NEWS_CATEGORIES: LabelTable = Lazy::new(|| {
    IndexMap::from([
        ("all", "Усі новини"),
        ("competitions", "Змагання"),
        ("team", "Збірна"),
        ("federation", "Федерація"),
        ("interviews", "Інтерв'ю"),
        ("education", "Освіта"),
        ("media", "Медіа"),
    ])
});

/// Map legacy news category codes onto the current category set
pub fn normalize_news_category(code: &str) -> &str {
    match code {
        "achievements" | "results" | "announcements" | "events" => "competitions",
        "decisions" | "statements" | "federationNews" | "partnerships" => "federation",
        "greetings" => "team",
        other => other,
    }
}

pub fn news_category_label(code: &str) -> &str {
    lookup(&NEWS_CATEGORIES, code)
}

// ---------------------------------------------------------------------------
// Team
// ---------------------------------------------------------------------------

pub static TEAM_CATEGORIES: LabelTable = Lazy::new(|| {
    IndexMap::from([
        ("men", "Чоловіча збірна"),
        ("women", "Жіноча збірна"),
        ("junior_men", "Юніори"),
        ("junior_women", "Юніорки"),
        ("cadet_boys", "Кадети (юнаки)"),
        ("cadet_girls", "Кадети (дівчата)"),
        ("youth", "Молодіжна збірна"),
        ("senior", "Ветерани"),
        ("staff", "Адміністративний штаб"),
        ("reserve", "Резервна команда"),
    ])
});

pub fn team_category_label(code: &str) -> &str {
    lookup(&TEAM_CATEGORIES, code)
}
