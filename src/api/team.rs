//! Team endpoints

use crate::{
    error::AppResult,
    models::{team::TeamMember, ListPayload},
};

use super::{ApiClient, QueryParams};

impl ApiClient {
    pub async fn list_team(&self, category: Option<&str>) -> AppResult<Vec<TeamMember>> {
        let mut params = QueryParams::new();
        params.push_selector_opt("category", category);
        let payload: ListPayload<TeamMember> = self.get_json(&["team"], &params).await?;
        Ok(payload.into_items())
    }

    pub async fn team_member(&self, id: &str) -> AppResult<TeamMember> {
        self.get_json(&["team", id], &QueryParams::new()).await
    }
}
