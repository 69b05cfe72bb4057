use std::sync::{Arc, Mutex};

use serde_json::Value;

use super::error::ApiError;

/// Thin wrapper around `reqwest::Client` carrying the management-service
/// base URL and the current bearer token. Cloning is cheap; the token slot
/// is shared between clones so a login performed through one handle is
/// visible to all of them.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: Arc<Mutex<String>>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(format!("Bkvm/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");
        ApiClient {
            client,
            base_url: crate::config::sanitize_base_url(base_url),
            token: Arc::new(Mutex::new(String::new())),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> String {
        self.token.lock().unwrap().clone()
    }

    pub fn set_token(&self, token: &str) {
        *self.token.lock().unwrap() = token.to_string();
    }

    pub fn clear_token(&self) {
        self.token.lock().unwrap().clear();
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    fn apply_token(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let token = self.token.lock().unwrap();
        if token.is_empty() {
            req
        } else {
            req.header("Authorization", format!("Bearer {}", *token))
        }
    }

    async fn send(
        &self,
        endpoint: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        tracing::debug!(endpoint, "management API request");
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp)
    }

    fn parse_body(endpoint: &str, text: &str) -> Result<Value, ApiError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            // Several mutating endpoints answer 200 with no body.
            return Ok(Value::Null);
        }
        serde_json::from_str(trimmed).map_err(|e| ApiError::UnexpectedPayload {
            endpoint: endpoint.to_string(),
            detail: e.to_string(),
        })
    }

    pub async fn get_value(
        &self,
        endpoint: &str,
        params: Option<Vec<(String, String)>>,
    ) -> Result<Value, ApiError> {
        let mut req = self.apply_token(self.client.get(self.url(endpoint)));
        if let Some(p) = params {
            req = req.query(&p);
        }
        let resp = self.send(endpoint, req).await?;
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse_body(endpoint, &text)
    }

    /// GET an endpoint whose body is plain text rather than JSON.
    pub async fn get_text(&self, endpoint: &str) -> Result<String, ApiError> {
        let req = self.apply_token(self.client.get(self.url(endpoint)));
        let resp = self.send(endpoint, req).await?;
        resp.text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    pub async fn post_value(
        &self,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let mut req = self.apply_token(self.client.post(self.url(endpoint)));
        if let Some(b) = body {
            req = req.json(&b);
        }
        let resp = self.send(endpoint, req).await?;
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse_body(endpoint, &text)
    }
}
