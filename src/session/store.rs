use serde_json::Value;

use super::token_file::TokenFile;
use crate::api::{self, ApiClient, ApiError};
use crate::models::Credentials;

/// Token value stored on successful login. The management service tracks
/// authentication in its own server-side session; this marker only records
/// "logged in" locally and is not derived from the login response.
pub const SESSION_TOKEN: &str = "dummy";

/// Lifecycle of the most recent login attempt. Feedback for the UI only;
/// access control derives from the token alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Process-wide session state: the current token plus login-attempt status.
/// Mutated only through `login` and `logout`.
pub struct SessionStore {
    token: String,
    status: AuthStatus,
    storage: TokenFile,
}

impl SessionStore {
    /// Seed the session from the persisted token, if one survives from a
    /// previous run, and mirror it into the API client's auth header.
    pub fn restore(storage: TokenFile, api: &ApiClient) -> Self {
        let token = storage.load().unwrap_or_default();
        if !token.is_empty() {
            api.set_token(&token);
        }
        SessionStore {
            token,
            status: AuthStatus::Idle,
            storage,
        }
    }

    /// Logged in iff the token is non-empty. Derived on every call, never
    /// cached separately from the token.
    pub fn is_logged(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn status(&self) -> AuthStatus {
        self.status
    }

    /// Authenticate against the management service. On success the session
    /// token is set and persisted and the response payload is handed back;
    /// on failure the token is left untouched and the error propagates.
    pub async fn login(
        &mut self,
        api: &ApiClient,
        credentials: &Credentials,
    ) -> Result<Value, ApiError> {
        self.status = AuthStatus::Loading;
        match api::login(api, credentials).await {
            Ok(payload) => {
                self.token = SESSION_TOKEN.to_string();
                self.status = AuthStatus::Success;
                api.set_token(SESSION_TOKEN);
                if let Err(e) = self.storage.save(SESSION_TOKEN) {
                    // A broken session file only costs the operator a re-login
                    // after restart; the live session stays valid.
                    tracing::warn!(path = %self.storage.path().display(), %e, "failed to persist session token");
                }
                Ok(payload)
            }
            Err(e) => {
                self.status = AuthStatus::Error;
                Err(e)
            }
        }
    }

    /// End the session. The remote logout call is best-effort: whatever it
    /// answers (or if it never answers), local state and the persisted token
    /// are cleared, so logout always succeeds from the caller's view.
    pub async fn logout(&mut self, api: &ApiClient) {
        if let Err(e) = api::logout(api).await {
            tracing::warn!(%e, "logout request failed; clearing local session anyway");
        }
        self.storage.clear();
        self.token.clear();
        self.status = AuthStatus::Idle;
        api.clear_token();
    }
}
