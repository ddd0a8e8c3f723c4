mod domain;
mod infrastructure;
mod interfaces;

pub mod constants;
pub mod errors;
pub mod settings;

pub use domain::{entities, use_cases};
pub use infrastructure::storage;
pub use interfaces::{cli, repositories};

use std::sync::Arc;

use entities::project::ProjectFilter;
use errors::ApiError;
use repositories::http_repo::{HttpRepo, TokenCell};
use settings::AppConfig;
use storage::local::FileStore;
use use_cases::auth::AuthGate;
use use_cases::projects::ProjectStore;

pub type AppAuthGate = AuthGate<HttpRepo, FileStore>;
pub type AppProjectStore = ProjectStore<HttpRepo>;

/// The wired-together client: one HTTP repository shared by the auth
/// gate and the project store, with the session rehydrated from disk.
pub struct AppState {
    pub auth: AppAuthGate,
    pub projects: AppProjectStore,
    pub repo: Arc<HttpRepo>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let token = TokenCell::new();
        let repo = Arc::new(HttpRepo::new(config, token.clone())?);
        let store = FileStore::new(&config.storage_dir)?;

        let auth = AuthGate::new(repo.clone(), store, token);
        let projects = ProjectStore::new(repo.clone(), ProjectFilter::default());

        Ok(AppState {
            auth,
            projects,
            repo,
        })
    }
}
