use crate::entities::project::Project;
use crate::errors::ApiError;
use crate::repositories::project::ProjectRepository;

/// Delete confirmation lifecycle for the project list. The state is a
/// single id, so at most one row is in confirmation at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteState {
    #[default]
    Idle,
    Confirming(String),
    Deleting(String),
}

#[derive(Debug, Default)]
pub struct DeleteFlow {
    state: DeleteState,
}

impl DeleteFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DeleteState {
        &self.state
    }

    /// Ask for confirmation before deleting `id`, replacing any other
    /// pending confirmation. Ignored while a deletion is in flight.
    pub fn request(&mut self, id: impl Into<String>) {
        if matches!(self.state, DeleteState::Deleting(_)) {
            return;
        }
        self.state = DeleteState::Confirming(id.into());
    }

    /// Abandon the pending confirmation without touching the API.
    pub fn cancel(&mut self) {
        if matches!(self.state, DeleteState::Deleting(_)) {
            return;
        }
        self.state = DeleteState::Idle;
    }

    /// Run the confirmed deletion. `Ok(true)` means the backing store
    /// dropped the record and the caller should refetch. The flow
    /// returns to idle on every outcome; a failed deletion leaves the
    /// row in place since nothing was removed optimistically.
    pub async fn confirm<R: ProjectRepository>(&mut self, repo: &R) -> Result<bool, ApiError> {
        let id = match &self.state {
            DeleteState::Confirming(id) => id.clone(),
            _ => return Ok(false),
        };
        self.state = DeleteState::Deleting(id.clone());

        let result = repo.delete_project(&id).await;
        self.state = DeleteState::Idle;

        match result {
            Ok(()) => Ok(true),
            Err(e) => {
                tracing::error!("Error deleting project {}: {}", id, e);
                Err(e)
            }
        }
    }
}

/// Active admin view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Projects,
    Editor,
}

/// Tab and editor-target state behind the admin views.
#[derive(Debug, Default)]
pub struct Dashboard {
    tab: DashboardTab,
    editing: Option<Project>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> DashboardTab {
        self.tab
    }

    pub fn editing(&self) -> Option<&Project> {
        self.editing.as_ref()
    }

    /// Open the editor pre-filled with an existing project.
    pub fn edit(&mut self, project: Project) {
        self.editing = Some(project);
        self.tab = DashboardTab::Editor;
    }

    /// Open a blank editor.
    pub fn open_editor(&mut self) {
        self.editing = None;
        self.tab = DashboardTab::Editor;
    }

    /// Return to the list view, dropping any editor target.
    pub fn close_editor(&mut self) {
        self.editing = None;
        self.tab = DashboardTab::Projects;
    }
}
