
use std::sync::Arc;

use portfolio_client::constants::{ADMIN_KEY, TOKEN_KEY};
use portfolio_client::errors::ApiError;
use portfolio_client::repositories::http_repo::TokenCell;
use portfolio_client::storage::local::{FileStore, SessionStore};
use portfolio_client::use_cases::auth::AuthGate;
use tempfile::TempDir;
use test_utils::{sample_admin, sample_login_response, MockAuthApi};

fn store_in(dir: &TempDir) -> FileStore {
    FileStore::new(dir.path()).expect("Failed to create session store")
}

#[test]
fn file_store_roundtrips_entries() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    assert_eq!(store.get("missing").unwrap(), None);

    store.set("key", "value").unwrap();
    assert_eq!(store.get("key").unwrap(), Some("value".to_string()));

    store.remove("key").unwrap();
    assert_eq!(store.get("key").unwrap(), None);

    // removing an absent entry is not an error
    store.remove("key").unwrap();
}

#[test]
fn rehydration_with_both_entries_authenticates() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.set(TOKEN_KEY, "token-123").unwrap();
    store
        .set(ADMIN_KEY, &serde_json::to_string(&sample_admin()).unwrap())
        .unwrap();

    let token = TokenCell::new();
    let gate = AuthGate::new(Arc::new(MockAuthApi::new()), store, token.clone());

    assert!(gate.is_authenticated());
    assert_eq!(gate.admin(), Some(sample_admin()));
    assert_eq!(token.get(), Some("token-123".to_string()));
}

#[test]
fn rehydration_with_token_only_stays_signed_out() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.set(TOKEN_KEY, "token-123").unwrap();

    let token = TokenCell::new();
    let gate = AuthGate::new(Arc::new(MockAuthApi::new()), store, token.clone());

    assert!(!gate.is_authenticated());
    assert!(!token.is_present());
}

#[test]
fn rehydration_with_admin_record_only_stays_signed_out() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store
        .set(ADMIN_KEY, &serde_json::to_string(&sample_admin()).unwrap())
        .unwrap();

    let gate = AuthGate::new(Arc::new(MockAuthApi::new()), store, TokenCell::new());

    assert!(!gate.is_authenticated());
}

#[test]
fn rehydration_with_corrupt_admin_record_stays_signed_out() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.set(TOKEN_KEY, "token-123").unwrap();
    store.set(ADMIN_KEY, "{not json").unwrap();

    let token = TokenCell::new();
    let gate = AuthGate::new(Arc::new(MockAuthApi::new()), store, token.clone());

    assert!(!gate.is_authenticated());
    assert!(!token.is_present());
}

#[tokio::test]
async fn login_persists_the_session() {
    let dir = TempDir::new().unwrap();
    let mut api = MockAuthApi::new();
    api.expect_login()
        .withf(|request| request.username == "siteowner")
        .times(1)
        .returning(|_| Ok(sample_login_response()));

    let token = TokenCell::new();
    let gate = AuthGate::new(Arc::new(api), store_in(&dir), token.clone());

    let admin = gate.login("siteowner", "hunter2").await.unwrap();

    assert_eq!(admin, sample_admin());
    assert!(gate.is_authenticated());
    assert_eq!(token.get(), Some("token-123".to_string()));

    let persisted = store_in(&dir);
    assert_eq!(persisted.get(TOKEN_KEY).unwrap(), Some("token-123".to_string()));
    let stored_admin: portfolio_client::entities::admin::Admin =
        serde_json::from_str(&persisted.get(ADMIN_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(stored_admin, sample_admin());
}

#[tokio::test]
async fn failed_login_leaves_state_unchanged() {
    let dir = TempDir::new().unwrap();
    let mut api = MockAuthApi::new();
    api.expect_login().times(1).returning(|_| {
        Err(ApiError::Api {
            status: 401,
            message: "Wrong credentials".to_string(),
        })
    });

    let token = TokenCell::new();
    let gate = AuthGate::new(Arc::new(api), store_in(&dir), token.clone());

    let err = gate.login("siteowner", "wrong").await.unwrap_err();

    assert_eq!(err.display_message("Login failed"), "Wrong credentials");
    assert!(!gate.is_authenticated());
    assert!(!token.is_present());
    assert_eq!(store_in(&dir).get(TOKEN_KEY).unwrap(), None);
}

#[tokio::test]
async fn blank_credentials_are_rejected_before_the_api() {
    let dir = TempDir::new().unwrap();
    let gate = AuthGate::new(
        Arc::new(MockAuthApi::new()),
        store_in(&dir),
        TokenCell::new(),
    );

    let err = gate.login("", "hunter2").await.unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    assert!(!gate.is_authenticated());
}

#[tokio::test]
async fn logout_clears_session_and_storage() {
    let dir = TempDir::new().unwrap();
    let mut api = MockAuthApi::new();
    api.expect_login().returning(|_| Ok(sample_login_response()));

    let token = TokenCell::new();
    let gate = AuthGate::new(Arc::new(api), store_in(&dir), token.clone());
    gate.login("siteowner", "hunter2").await.unwrap();

    gate.logout();

    assert!(!gate.is_authenticated());
    assert!(!token.is_present());
    let persisted = store_in(&dir);
    assert_eq!(persisted.get(TOKEN_KEY).unwrap(), None);
    assert_eq!(persisted.get(ADMIN_KEY).unwrap(), None);
}

#[test]
fn logout_without_prior_login_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let gate = AuthGate::new(
        Arc::new(MockAuthApi::new()),
        store_in(&dir),
        TokenCell::new(),
    );

    gate.logout();
    gate.logout();

    assert!(!gate.is_authenticated());
    assert_eq!(store_in(&dir).get(TOKEN_KEY).unwrap(), None);
}
