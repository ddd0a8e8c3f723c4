use async_trait::async_trait;
use reqwest::Method;

use crate::entities::project::{Project, ProjectDraft};
use crate::errors::ApiError;
use crate::repositories::http_repo::HttpRepo;

/// Data access for the project collection. The backing store owns the
/// authoritative copy; each call is a single attempt with no retries.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError>;
    async fn create_project(&self, draft: &ProjectDraft) -> Result<Project, ApiError>;
    async fn update_project(&self, id: &str, draft: &ProjectDraft) -> Result<Project, ApiError>;
    async fn delete_project(&self, id: &str) -> Result<(), ApiError>;
}

#[async_trait]
impl ProjectRepository for HttpRepo {
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let response = self.request(Method::GET, "/projects").send().await?;
        Self::parse_response(response).await
    }

    async fn create_project(&self, draft: &ProjectDraft) -> Result<Project, ApiError> {
        let response = self
            .request(Method::POST, "/projects")
            .json(draft)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn update_project(&self, id: &str, draft: &ProjectDraft) -> Result<Project, ApiError> {
        let response = self
            .request(Method::PUT, &format!("/projects/{id}"))
            .json(draft)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn delete_project(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .request(Method::DELETE, &format!("/projects/{id}"))
            .send()
            .await?;
        Self::check_status(response).await
    }
}
