//! HTTP plumbing shared by every backend endpoint

use serde::de::DeserializeOwned;
use std::sync::OnceLock;

static API_URL: OnceLock<String> = OnceLock::new();

/// Override the backend base URL. Call this at startup.
pub fn init_api_url(url: String) {
    API_URL.set(url).ok();
}

/// Resolve the backend base URL: explicit override first, then the
/// environment, then the local development default.
pub fn api_url() -> String {
    if let Some(url) = API_URL.get() {
        return url.clone();
    }
    std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Error type for backend requests
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    Backend(String),
}

impl ApiError {
    /// Text for the transient error field shown to the operator. Backend
    /// messages pass through; transport errors collapse to the fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Backend(message) if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// REST client for the providers backend
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client pointed at the configured backend
    pub fn from_env() -> Self {
        Self::new(api_url())
    }

    pub(super) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(self.endpoint(path))
    }

    pub(super) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.post(self.endpoint(path))
    }

    pub(super) fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.put(self.endpoint(path))
    }

    pub(super) fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.delete(self.endpoint(path))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a request and decode the JSON body. Non-2xx responses become a
    /// `Backend` error carrying whatever message the server put in the body.
    pub(super) async fn execute<R>(&self, request: reqwest::RequestBuilder) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let response = request.send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Like [`execute`](Self::execute) but for endpoints whose success body
    /// is empty or irrelevant
    pub(super) async fn execute_unit(&self, request: reqwest::RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%status, "backend request failed");
        Err(ApiError::Backend(extract_message(&body, status)))
    }
}

/// Pull a useful message out of an error body, which may be JSON carrying a
/// `message` or `error` field, a JSON string, plain text, or empty.
fn extract_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                if !message.is_empty() {
                    return message.to_string();
                }
            }
        }
        if let Some(message) = value.as_str() {
            if !message.is_empty() {
                return message.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    format!("Request failed with status {status}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn extract_message_prefers_message_field() {
        let body = r#"{"message":"Provider already exists","error":"conflict"}"#;
        assert_eq!(
            extract_message(body, StatusCode::CONFLICT),
            "Provider already exists"
        );
    }

    #[test]
    fn extract_message_falls_back_to_error_field() {
        let body = r#"{"error":"Bad request"}"#;
        assert_eq!(extract_message(body, StatusCode::BAD_REQUEST), "Bad request");
    }

    #[test]
    fn extract_message_accepts_plain_text() {
        assert_eq!(
            extract_message("something broke", StatusCode::INTERNAL_SERVER_ERROR),
            "something broke"
        );
    }

    #[test]
    fn extract_message_accepts_json_string() {
        assert_eq!(
            extract_message(r#""not found""#, StatusCode::NOT_FOUND),
            "not found"
        );
    }

    #[test]
    fn extract_message_defaults_to_status_line() {
        let message = extract_message("", StatusCode::SERVICE_UNAVAILABLE);
        assert!(message.contains("503"));
    }
}
