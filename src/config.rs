use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 4500;
pub const DEFAULT_API_BASE_URL: &str = "";
pub const DEFAULT_SESSION_FILE: &str = "bkvm-session.json";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

/// Base URL of the external BookKeeper management service.
pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("BKVM_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

/// Path of the file where the operator's session token is persisted
/// between restarts.
pub fn get_session_file() -> String {
    let raw = env::var("BKVM_SESSION_FILE").unwrap_or_default();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_SESSION_FILE.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "http://localhost:8080".to_string()
    } else {
        trimmed.to_string()
    }
}
