use std::sync::Arc;

use parking_lot::RwLock;

use crate::constants::FETCH_PROJECTS_FALLBACK;
use crate::entities::project::{Project, ProjectFilter};
use crate::repositories::project::ProjectRepository;

#[derive(Debug, Default)]
struct StoreState {
    projects: Vec<Project>,
    loading: bool,
    error: Option<String>,
}

/// Local, possibly-stale copy of the project collection: fetches the
/// full collection, applies the filter client-side, and re-exposes
/// loading/error state. The backing store remains the owner.
pub struct ProjectStore<R: ProjectRepository> {
    repo: Arc<R>,
    filter: RwLock<ProjectFilter>,
    state: RwLock<StoreState>,
}

impl<R: ProjectRepository> ProjectStore<R> {
    pub fn new(repo: Arc<R>, filter: ProjectFilter) -> Self {
        ProjectStore {
            repo,
            filter: RwLock::new(filter),
            state: RwLock::new(StoreState {
                loading: true,
                ..StoreState::default()
            }),
        }
    }

    /// Fetch the full collection and replace the local copy with the
    /// filtered result. A failed fetch keeps the previous copy and
    /// records the error for display.
    pub async fn refetch(&self) {
        self.state.write().loading = true;

        match self.repo.list_projects().await {
            Ok(all) => {
                let filter = *self.filter.read();
                let mut state = self.state.write();
                state.projects = apply_filter(all, &filter);
                state.error = None;
                state.loading = false;
            }
            Err(e) => {
                tracing::error!("Error fetching projects: {}", e);
                let mut state = self.state.write();
                state.error = Some(e.display_message(FETCH_PROJECTS_FALLBACK));
                state.loading = false;
            }
        }
    }

    /// Replace the filter and refetch under the new predicates.
    pub async fn set_filter(&self, filter: ProjectFilter) {
        *self.filter.write() = filter;
        self.refetch().await;
    }

    pub fn filter(&self) -> ProjectFilter {
        *self.filter.read()
    }

    pub fn projects(&self) -> Vec<Project> {
        self.state.read().projects.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }
}

/// Keep the entries matching every specified predicate.
pub fn apply_filter(projects: Vec<Project>, filter: &ProjectFilter) -> Vec<Project> {
    projects
        .into_iter()
        .filter(|project| filter.matches(project))
        .collect()
}
