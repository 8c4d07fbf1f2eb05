//! Team roster view-model

use crate::{labels, models::team::TeamMember};

use super::asset_url;

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMemberView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub category_label: String,
    pub position: Option<String>,
    pub location_display: Option<String>,
    pub club: Option<String>,
    pub photo_url: Option<String>,
}

impl TeamMemberView {
    pub fn derive(member: &TeamMember, static_root: &str) -> Self {
        let location = [member.city.as_deref(), member.region.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| !p.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            id: member.id.clone(),
            name: member.name.clone(),
            category: member.category.clone(),
            category_label: labels::team_category_label(&member.category).to_string(),
            position: member.position.clone(),
            location_display: (!location.is_empty()).then_some(location),
            club: member.club.clone(),
            photo_url: member.image.as_deref().map(|p| asset_url(static_root, p)),
        }
    }
}
