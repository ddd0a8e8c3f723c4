use async_trait::async_trait;
use reqwest::Method;

use crate::entities::admin::{LoginRequest, LoginResponse};
use crate::errors::ApiError;
use crate::repositories::http_repo::HttpRepo;

/// Admin authentication against the backing store.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
}

#[async_trait]
impl AuthRepository for HttpRepo {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self
            .request(Method::POST, "/admin/login")
            .json(request)
            .send()
            .await?;
        Self::parse_response(response).await
    }
}
