use once_cell::sync::Lazy;

/// Durable-storage keys for the admin session, shared with the web client.
pub const TOKEN_KEY: &str = "adminToken";
pub const ADMIN_KEY: &str = "adminData";

/// Generic messages shown when a failure carries no server message.
pub const FETCH_PROJECTS_FALLBACK: &str = "Failed to fetch projects";
pub const SAVE_PROJECT_FALLBACK: &str = "Failed to save project";
pub const DELETE_PROJECT_FALLBACK: &str = "Failed to delete project";
pub const LOGIN_FALLBACK: &str = "Login failed";

pub static USER_AGENT: Lazy<String> =
    Lazy::new(|| format!("portfolio-client/{}", env!("CARGO_PKG_VERSION")));
