//! Backend location for the admin API client.

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV: &str = "ADMIN_API_BASE_URL";

/// Used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL {0:?} (expected http:// or https://)")]
    InvalidBaseUrl(String),
}

/// Admin API client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:3001`.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a config for an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        Self::default().with_base_url(base_url)
    }

    /// Build a config from the environment.
    ///
    /// Selection rules:
    /// - Native builds: `ADMIN_API_BASE_URL` at runtime, if set and non-blank
    /// - Otherwise: `ADMIN_API_BASE_URL` as seen at compile time (the only option in the browser)
    /// - Otherwise: `http://localhost:3001`
    pub fn from_env() -> Result<Self, ConfigError> {
        match runtime_base_url().or_else(compile_time_base_url) {
            Some(url) => Self::new(url),
            None => Ok(Self::default()),
        }
    }

    /// Set the base URL. Trailing slashes are dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let lower = trimmed.to_ascii_lowercase();
        let has_host = lower
            .strip_prefix("http://")
            .or_else(|| lower.strip_prefix("https://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(ConfigError::InvalidBaseUrl(raw));
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    /// Absolute URL for a path such as `/logs`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_base_url() -> Option<String> {
    std::env::var(BASE_URL_ENV).ok().and_then(non_empty)
}

#[cfg(target_arch = "wasm32")]
fn runtime_base_url() -> Option<String> {
    None
}

fn compile_time_base_url() -> Option<String> {
    option_env!("ADMIN_API_BASE_URL").map(str::to_string).and_then(non_empty)
}

fn non_empty(s: String) -> Option<String> {
    let s = s.trim().to_string();
    if s.is_empty() { None } else { Some(s) }
}
