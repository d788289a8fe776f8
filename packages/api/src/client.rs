//! HTTP client for the admin backend.

use admin_core::{ApiError, LogEntry};
use reqwest::{Method, RequestBuilder, Response};
use serde_json::Value as JsonValue;

use crate::config::{ApiConfig, ConfigError};

/// Calls the admin dashboard makes against the backend.
///
/// Futures are not required to be `Send`: in the browser everything runs on the
/// single event loop.
#[allow(async_fn_in_trait)]
pub trait AdminApi {
    /// `GET /logs`
    async fn fetch_logs(&self) -> Result<Vec<LogEntry>, ApiError>;

    /// `POST /users/{user_id}/approve-instructor`
    async fn approve_instructor(&self, user_id: &str) -> Result<(), ApiError>;

    /// `DELETE /users/{user_id}/reject-instructor`
    async fn reject_instructor(&self, user_id: &str) -> Result<(), ApiError>;

    /// `POST /backup/users`
    async fn backup_users(&self) -> Result<(), ApiError>;

    /// `POST /backup/progress`
    async fn backup_progress(&self) -> Result<(), ApiError>;
}

/// Errors building a client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// [`AdminApi`] over HTTP with the administrator's session cookies attached.
#[derive(Debug, Clone)]
pub struct HttpAdminClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl PartialEq for HttpAdminClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl HttpAdminClient {
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        Ok(Self {
            http: build_http()?,
            config,
        })
    }

    /// Client for the backend named by `ADMIN_API_BASE_URL`.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ApiConfig::from_env()?)
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.config.endpoint(path));
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    /// Send a bodiless request and turn non-2xx answers into [`ApiError::Status`].
    async fn send(&self, method: Method, path: &str) -> Result<Response, ApiError> {
        tracing::debug!(%method, path, "admin api request");

        let response = self
            .request(method, path)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // A body we cannot read or parse just means there is no server message.
        let message = response
            .bytes()
            .await
            .ok()
            .and_then(|body| error_message(&body));
        Err(ApiError::status(status.as_u16(), message))
    }
}

impl AdminApi for HttpAdminClient {
    async fn fetch_logs(&self) -> Result<Vec<LogEntry>, ApiError> {
        self.send(Method::GET, "/logs")
            .await?
            .json::<Vec<LogEntry>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn approve_instructor(&self, user_id: &str) -> Result<(), ApiError> {
        self.send(Method::POST, &user_path(user_id, "approve-instructor"))
            .await
            .map(drop)
    }

    async fn reject_instructor(&self, user_id: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, &user_path(user_id, "reject-instructor"))
            .await
            .map(drop)
    }

    async fn backup_users(&self) -> Result<(), ApiError> {
        self.send(Method::POST, "/backup/users").await.map(drop)
    }

    async fn backup_progress(&self) -> Result<(), ApiError> {
        self.send(Method::POST, "/backup/progress").await.map(drop)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().cookie_store(true).build()
}

#[cfg(target_arch = "wasm32")]
fn build_http() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().build()
}

fn user_path(user_id: &str, action: &str) -> String {
    format!("/users/{}/{}", urlencoding::encode(user_id), action)
}

/// Extract `message` from a JSON error body.
///
/// Validation errors often carry a list of messages; those are joined.
pub fn error_message(body: &[u8]) -> Option<String> {
    let value: JsonValue = serde_json::from_slice(body).ok()?;
    let message = match value.get("message")? {
        JsonValue::String(s) => s.clone(),
        JsonValue::Array(items) => items
            .iter()
            .filter_map(JsonValue::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };
    if message.trim().is_empty() { None } else { Some(message) }
}
