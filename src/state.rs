//! Root container state

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::types::{ActiveView, ProjectSummary};

/// View-selection and menu state owned by the root container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteState {
    pub menu_open: bool,
    pub selected_project: Option<ProjectSummary>,
}

impl SiteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the detail view for `project`
    pub fn select_project(&mut self, project: ProjectSummary) {
        tracing::debug!(title = %project.title, category = %project.category, "project selected");
        self.selected_project = Some(project);
    }

    /// Return to the main view. No-op when nothing is selected.
    pub fn clear_project(&mut self) {
        if let Some(project) = self.selected_project.take() {
            tracing::debug!(title = %project.title, "project cleared");
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        tracing::debug!(menu_open = self.menu_open, "menu toggled");
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn active_view(&self) -> ActiveView {
        match &self.selected_project {
            Some(project) => ActiveView::ProjectDetail(project.clone()),
            None => ActiveView::Main,
        }
    }
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// View selection and menu visibility
    pub site: RwSignal<SiteState>,
    /// Deploy-time settings
    pub config: StoredValue<SiteConfig>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(SiteConfig::from_env())
    }

    pub fn with_config(config: SiteConfig) -> Self {
        Self {
            site: RwSignal::new(SiteState::new()),
            config: StoredValue::new(config),
        }
    }

    /// Memoized so menu toggles don't re-render the whole view
    pub fn active_view(&self) -> Memo<ActiveView> {
        let site = self.site;
        Memo::new(move |_| site.with(SiteState::active_view))
    }

    pub fn menu_open(&self) -> Memo<bool> {
        let site = self.site;
        Memo::new(move |_| site.with(|s| s.menu_open))
    }

    pub fn select_project(&self, project: ProjectSummary) {
        self.site.update(|s| s.select_project(project));
    }

    pub fn clear_project(&self) {
        self.site.update(SiteState::clear_project);
    }

    pub fn toggle_menu(&self) {
        self.site.update(SiteState::toggle_menu);
    }

    pub fn close_menu(&self) {
        self.site.update(SiteState::close_menu);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
