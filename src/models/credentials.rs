use serde::{Deserialize, Serialize};

/// Username/secret pair submitted by the login form and forwarded to the
/// management service as-is.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
