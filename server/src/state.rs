//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the one pooled HTTP client used for every forwarded request, the
//! backend base URL and the request body ceiling.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use reqwest::redirect::Policy;

use crate::config::{ConfigError, HostConfig};

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend_url: Arc<Url>,
    pub max_body_bytes: usize,
}

impl AppState {
    /// Build the forwarding client from host config.
    ///
    /// Redirects are never followed: login redirects from the backend must
    /// reach the browser as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &HostConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .redirect(Policy::none())
            .build()
            .map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;

        Ok(Self { http, backend_url: Arc::new(config.backend_url.clone()), max_body_bytes: config.max_body_bytes })
    }
}
