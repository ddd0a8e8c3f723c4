use std::sync::Arc;

use parking_lot::RwLock;
use validator::Validate;

use crate::constants::{ADMIN_KEY, TOKEN_KEY};
use crate::entities::admin::{Admin, LoginRequest};
use crate::errors::ApiError;
use crate::repositories::auth::AuthRepository;
use crate::repositories::http_repo::TokenCell;
use crate::storage::local::SessionStore;

/// Holds the logged-in admin identity, mirrored to durable storage.
///
/// The stored token is never re-validated against the server; a stale
/// session simply fails on its first authenticated request.
pub struct AuthGate<R, S>
where
    R: AuthRepository,
    S: SessionStore,
{
    repo: Arc<R>,
    store: S,
    token: TokenCell,
    admin: RwLock<Option<Admin>>,
}

impl<R, S> AuthGate<R, S>
where
    R: AuthRepository,
    S: SessionStore,
{
    pub fn new(repo: Arc<R>, store: S, token: TokenCell) -> Self {
        let gate = AuthGate {
            repo,
            store,
            token,
            admin: RwLock::new(None),
        };
        gate.rehydrate();
        gate
    }

    /// Restore the session from durable storage. Both entries must be
    /// present and decodable; anything less leaves the gate signed out.
    fn rehydrate(&self) {
        let token = self.read_entry(TOKEN_KEY);
        let admin_data = self.read_entry(ADMIN_KEY);

        let (Some(token), Some(admin_data)) = (token, admin_data) else {
            return;
        };

        match serde_json::from_str::<Admin>(&admin_data) {
            Ok(admin) => {
                self.token.set(token);
                *self.admin.write() = Some(admin);
            }
            Err(e) => tracing::warn!("Stored admin record is not decodable: {}", e),
        }
    }

    fn read_entry(&self, key: &str) -> Option<String> {
        self.store.get(key).unwrap_or_else(|e| {
            tracing::warn!("Failed to read stored session entry {}: {}", key, e);
            None
        })
    }

    /// Authenticates against the backing store and persists the session.
    /// A failed attempt leaves both memory and storage untouched.
    pub async fn login(&self, username: &str, password: &str) -> Result<Admin, ApiError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        request.validate()?;

        let response = self.repo.login(&request).await?;

        self.store.set(TOKEN_KEY, &response.token)?;
        self.store.set(ADMIN_KEY, &serde_json::to_string(&response.admin)?)?;
        self.token.set(response.token);
        *self.admin.write() = Some(response.admin.clone());

        tracing::info!("Admin {} logged in", response.admin.username);
        Ok(response.admin)
    }

    /// Clears the session everywhere. Never fails and is idempotent;
    /// storage errors are logged and swallowed.
    pub fn logout(&self) {
        for key in [TOKEN_KEY, ADMIN_KEY] {
            if let Err(e) = self.store.remove(key) {
                tracing::warn!("Failed to clear stored session entry {}: {}", key, e);
            }
        }
        self.token.clear();
        *self.admin.write() = None;
        tracing::info!("Admin logged out");
    }

    pub fn admin(&self) -> Option<Admin> {
        self.admin.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.admin.read().is_some()
    }
}
