use serde_json::Value;

use super::client::ApiClient;
use super::error::ApiError;
use crate::models::Credentials;

pub const LOGIN_ENDPOINT: &str = "api/auth/login";
pub const LOGOUT_ENDPOINT: &str = "api/auth/logout";

/// Authenticate against the management service. The credential payload is
/// passed through verbatim; the response body is returned to the caller
/// untouched so UI code can inspect the role it carries.
pub async fn login(api: &ApiClient, credentials: &Credentials) -> Result<Value, ApiError> {
    let body = serde_json::json!({
        "username": credentials.username,
        "password": credentials.password,
    });
    let payload = api.post_value(LOGIN_ENDPOINT, Some(body)).await?;
    // The service answers 200 with `ok: false` for bad credentials.
    if payload.get("ok").and_then(|v| v.as_bool()) == Some(false) {
        return Err(ApiError::Rejected(credentials.username.clone()));
    }
    Ok(payload)
}

pub async fn logout(api: &ApiClient) -> Result<(), ApiError> {
    api.post_value(LOGOUT_ENDPOINT, None).await.map(|_| ())
}
