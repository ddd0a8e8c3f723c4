use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;

use crate::constants::USER_AGENT;
use crate::errors::ApiError;
use crate::settings::AppConfig;

/// Bearer token shared between the auth gate and the HTTP repository.
///
/// Login is the only operation that produces a token; every request
/// attaches it while it is present.
#[derive(Clone, Default)]
pub struct TokenCell(Arc<RwLock<Option<String>>>);

impl TokenCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: String) {
        *self.0.write() = Some(token);
    }

    pub fn clear(&self) {
        *self.0.write() = None;
    }

    pub fn get(&self) -> Option<String> {
        self.0.read().clone()
    }

    pub fn is_present(&self) -> bool {
        self.0.read().is_some()
    }
}

/// HTTP client for the portfolio backing store.
pub struct HttpRepo {
    client: reqwest::Client,
    base_url: String,
    token: TokenCell,
}

impl HttpRepo {
    pub fn new(config: &AppConfig, token: TokenCell) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT.as_str())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(HttpRepo {
            client,
            base_url: config.base_url(),
            token,
        })
    }

    /// Build on an existing [`reqwest::Client`] (connection reuse in tests
    /// and embedders).
    pub fn with_client(client: reqwest::Client, base_url: String, token: TokenCell) -> Self {
        HttpRepo {
            client,
            base_url,
            token,
        }
    }

    /// Start a request, attaching the bearer token when one is stored.
    pub(crate) fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, format!("{}{}", self.base_url, path));
        match self.token.get() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Decode a successful JSON response body into the expected type.
    pub(crate) async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    pub(crate) async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: extract_message(&body),
            });
        }
        Ok(response)
    }
}

/// Pull the human-readable message out of an error body, when present.
/// The backing store reports failures as `{"message": ...}`; some
/// middleware layers use `{"error": ...}` instead.
fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"].iter().find_map(|key| {
                value
                    .get(*key)
                    .and_then(|field| field.as_str())
                    .map(str::to_owned)
            })
        })
        .unwrap_or_default()
}
