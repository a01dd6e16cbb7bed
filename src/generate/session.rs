use crate::{
    catalog::{layout::Orientation, model::Project},
    foundation::error::{ReelError, ReelResult},
    store::project_store::ProjectStore,
};

/// Per-session working state shared by workflow steps.
///
/// Created at session start, passed by reference into each step, dropped at session end.
/// Credentials are not part of it: they belong to the generator implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Project the session works on, if one was selected.
    pub active_project: Option<String>,
    /// Provider label recorded on new assets.
    pub provider: String,
    /// Model label sent to the generator and recorded on new assets.
    pub model: String,
    /// Size hint sent to the generator.
    pub size_hint: String,
    /// Request transparent backgrounds for overlay categories.
    pub transparent_background: bool,
}

impl Session {
    /// Session without an active project, no transparency, and a square size hint.
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            active_project: None,
            provider: provider.into(),
            model: model.into(),
            size_hint: "1024x1024".to_string(),
            transparent_background: false,
        }
    }

    /// Select the project subsequent steps operate on.
    pub fn activate(&mut self, project_id: impl Into<String>) {
        self.active_project = Some(project_id.into());
    }

    /// Id of the selected project.
    pub fn active_project_id(&self) -> ReelResult<&str> {
        self.active_project
            .as_deref()
            .ok_or_else(|| ReelError::validation("no active project selected"))
    }

    /// Load the selected project from `store`.
    pub fn load_active(&self, store: &ProjectStore) -> ReelResult<Project> {
        store.load(self.active_project_id()?)
    }

    /// Size hint closest to the orientation's aspect ratio.
    pub fn size_hint_for(orientation: Orientation) -> &'static str {
        match orientation {
            Orientation::Landscape => "1792x1024",
            Orientation::Portrait => "1024x1792",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generate/session.rs"]
mod tests;
