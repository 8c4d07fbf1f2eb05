//! Team roster model (national team coaches and staff)

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};

use super::deserialize_id;

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub name: String,
    /// men | women | junior_men | junior_women | cadet_boys | cadet_girls | youth | staff | reserve
    #[serde(alias = "team_category", default)]
    pub category: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub club: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub image: Option<String>,
}
