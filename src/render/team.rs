//! Team roster markup

use crate::{
    format::html::{empty_placeholder, Escaped},
    view::team::TeamMemberView,
};

use super::optional_line;

pub fn member_card(member: &TeamMemberView) -> String {
    let photo = match &member.photo_url {
        Some(url) => format!(
            r#"<img class="member-card__photo" src="{}" alt="{}" loading="lazy">"#,
            Escaped(url),
            Escaped(&member.name)
        ),
        None => r#"<div class="member-card__photo member-card__photo--empty"></div>"#.to_string(),
    };

    format!(
        concat!(
            r#"<article class="member-card" data-member-id="{id}" data-category="{category}">"#,
            "{photo}",
            r#"<h3 class="member-card__name">{name}</h3>"#,
            r#"<span class="member-card__category">{category_label}</span>"#,
            "{position}{location}{club}</article>"
        ),
        id = Escaped(&member.id),
        category = Escaped(&member.category),
        photo = photo,
        name = Escaped(&member.name),
        category_label = Escaped(&member.category_label),
        position = optional_line("member-card__position", member.position.as_deref()),
        location = optional_line("member-card__location", member.location_display.as_deref()),
        club = optional_line("member-card__club", member.club.as_deref()),
    )
}

pub fn team_list(members: &[TeamMemberView]) -> String {
    if members.is_empty() {
        return empty_placeholder("У цій категорії поки немає учасників");
    }
    let cards: String = members.iter().map(member_card).collect();
    format!(r#"<div class="team-grid">{}</div>"#, cards)
}
