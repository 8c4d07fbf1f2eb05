//! Team page: roster filtered by category

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    api::TeamSource,
    config::AppConfig,
    document::Document,
    format::html::{error_placeholder, loading_placeholder},
    labels,
    models::filters::{Selector, TeamFilters},
    render::{select_options, team as markup},
    view::team::TeamMemberView,
};

use super::{LoadState, RequestSequence};

pub const TEAM_CONTAINER: &str = "team-container";
pub const CATEGORY_SELECT: &str = "team-category";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamAction {
    SetCategory(String),
    Reload,
}

#[derive(Debug, Default)]
struct TeamState {
    load: LoadState,
    filters: TeamFilters,
    members: Vec<TeamMemberView>,
}

struct Inner {
    source: Arc<dyn TeamSource>,
    document: Arc<dyn Document>,
    static_root: String,
    sequence: RequestSequence,
    state: Mutex<TeamState>,
}

/// Handle to a mounted team page; clones share one page
#[derive(Clone)]
pub struct TeamPage {
    inner: Arc<Inner>,
}

impl TeamPage {
    pub async fn mount(
        source: Arc<dyn TeamSource>,
        document: Arc<dyn Document>,
        config: &AppConfig,
    ) -> Self {
        let initial = document
            .attribute(TEAM_CONTAINER, "data-category")
            .map(|c| Selector::parse(&c))
            .unwrap_or_default();

        let page = Self {
            inner: Arc::new(Inner {
                source,
                document,
                static_root: config.site.static_root.clone(),
                sequence: RequestSequence::default(),
                state: Mutex::new(TeamState {
                    filters: TeamFilters { category: initial },
                    ..Default::default()
                }),
            }),
        };
        page.load().await;
        page
    }

    pub async fn dispatch(&self, action: TeamAction) {
        tracing::debug!("Team action: {:?}", action);
        match action {
            TeamAction::SetCategory(category) => {
                self.state().filters.category = Selector::parse(&category);
                self.load().await;
            }
            TeamAction::Reload => self.load().await,
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.state().load.clone()
    }

    pub fn filters(&self) -> TeamFilters {
        self.state().filters.clone()
    }

    pub fn members(&self) -> Vec<TeamMemberView> {
        self.state().members.clone()
    }

    fn state(&self) -> MutexGuard<'_, TeamState> {
        self.inner.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub async fn load(&self) {
        let category = {
            let mut state = self.state();
            state.load = LoadState::Loading;
            state.filters.category.clone()
        };
        let inner = &self.inner;
        let token = inner.sequence.issue();
        inner.document.set_html(
            CATEGORY_SELECT,
            &select_options(&labels::TEAM_CATEGORIES, "Усі категорії", category.as_option()),
        );
        inner
            .document
            .set_html(TEAM_CONTAINER, &loading_placeholder("Завантаження складу..."));

        let result = inner
            .source
            .team(category.as_option().map(str::to_string))
            .await;

        if !inner.sequence.is_latest(token) {
            tracing::warn!("Discarding stale team response for {}", category);
            return;
        }

        match result {
            Ok(members) => {
                let views: Vec<TeamMemberView> = members
                    .iter()
                    .map(|m| TeamMemberView::derive(m, &inner.static_root))
                    .collect();
                tracing::info!("Loaded {} team members ({})", views.len(), category);
                inner.document.set_html(TEAM_CONTAINER, &markup::team_list(&views));
                let mut state = self.state();
                state.members = views;
                state.load = LoadState::Loaded;
            }
            Err(e) => {
                tracing::error!("Failed to load team ({}): {}", category, e);
                self.state().load = LoadState::Error(e.to_string());
                inner
                    .document
                    .set_html(TEAM_CONTAINER, &error_placeholder(e.user_message()));
            }
        }
    }
}
