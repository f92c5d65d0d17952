//! Host configuration parsed from environment variables.

use reqwest::Url;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PROXY_MAX_BODY_BYTES: usize = 1_048_576;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid BACKEND_URL {value:?}: {reason}")]
    InvalidBackendUrl { value: String, reason: String },

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub backend_url: Url,
    pub timeouts: BackendTimeouts,
    pub max_body_bytes: usize,
}

impl HostConfig {
    /// Build typed host config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://127.0.0.1:5000`, must be http(s)
    /// - `BACKEND_REQUEST_TIMEOUT_SECS`: default 120
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 10
    /// - `PROXY_MAX_BODY_BYTES`: default 1 MiB
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBackendUrl`] when `BACKEND_URL` is not an
    /// absolute http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] with an injected variable lookup.
    ///
    /// # Errors
    ///
    /// See [`HostConfig::from_env`].
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend_raw = lookup("BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned());
        let backend_url = parse_backend_url(backend_raw.trim())?;

        Ok(Self {
            port: parse_or(lookup("PORT"), DEFAULT_PORT),
            backend_url,
            timeouts: BackendTimeouts {
                request_secs: parse_or(lookup("BACKEND_REQUEST_TIMEOUT_SECS"), DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS),
                connect_secs: parse_or(lookup("BACKEND_CONNECT_TIMEOUT_SECS"), DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS),
            },
            max_body_bytes: parse_or(lookup("PROXY_MAX_BODY_BYTES"), DEFAULT_PROXY_MAX_BODY_BYTES),
        })
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}

fn parse_backend_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidBackendUrl { value: raw.to_owned(), reason: reason.to_owned() };

    let url = Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed"));
    }
    Ok(url)
}
