//! Reverse proxy to the chat backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget calls `/api/*` on its own origin. Every request the host does not
//! answer itself lands here and is replayed against `BACKEND_URL`, so session
//! cookies, login redirects and backend error bodies reach the browser
//! unchanged.
//!
//! TRADE-OFFS
//! ==========
//! Bodies are buffered in both directions. Request bodies are small JSON
//! documents and answers arrive in one piece, so streaming buys nothing here
//! while buffering gives a hard request size ceiling.

use axum::body::Body;
use futures::StreamExt;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use reqwest::Url;

use crate::state::AppState;

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

/// Connection-scoped headers that must not cross the proxy.
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    #[error("request body unreadable: {0}")]
    ClientBody(String),

    #[error("invalid upstream url: {0}")]
    UpstreamUrl(String),

    #[error("backend unavailable: {0}")]
    Upstream(String),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::ClientBody(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamUrl(_) | Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Append the incoming path and query to the backend base URL, keeping any
/// path prefix the base carries.
///
/// # Errors
///
/// Returns [`ProxyError::UpstreamUrl`] if the joined string does not parse.
pub fn upstream_url(base: &Url, path_and_query: &str) -> Result<Url, ProxyError> {
    let prefix = base.as_str().trim_end_matches('/');
    let suffix = if path_and_query.starts_with('/') { path_and_query.to_owned() } else { format!("/{path_and_query}") };
    Url::parse(&format!("{prefix}{suffix}")).map_err(|e| ProxyError::UpstreamUrl(e.to_string()))
}

#[must_use]
pub fn is_forwardable(name: &HeaderName) -> bool {
    let name = name.as_str();
    !HOP_BY_HOP.contains(&name) && name != header::HOST.as_str() && name != header::CONTENT_LENGTH.as_str()
}

/// Copy of `headers` without hop-by-hop, `Host` and `Content-Length`.
#[must_use]
pub fn filter_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| is_forwardable(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

fn declared_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

/// Buffer `body`, stopping as soon as it grows past `limit` bytes.
///
/// # Errors
///
/// [`ProxyError::BodyTooLarge`] past the limit, [`ProxyError::ClientBody`]
/// when the client stream fails first.
pub async fn read_body(body: Body, limit: usize) -> Result<Vec<u8>, ProxyError> {
    let mut stream = body.into_data_stream();
    let mut buf = Vec::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| ProxyError::ClientBody(e.to_string()))?;
        if buf.len() + chunk.len() > limit {
            return Err(ProxyError::BodyTooLarge { limit });
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

/// Fallback handler: forward the request to the backend and relay its reply.
///
/// # Errors
///
/// `413` when the body is over the configured limit, `502` when the backend
/// cannot be reached or its reply cannot be read.
pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let limit = state.max_body_bytes;

    if declared_length(&parts.headers).is_some_and(|len| len > limit) {
        tracing::warn!(path = %parts.uri.path(), limit, "request body over limit");
        return Err(ProxyError::BodyTooLarge { limit });
    }
    let body = read_body(body, limit).await.inspect_err(|e| {
        tracing::warn!(error = %e, path = %parts.uri.path(), "request body rejected");
    })?;

    let path_and_query = parts.uri.path_and_query().map_or("/", |pq| pq.as_str());
    let url = upstream_url(&state.backend_url, path_and_query)?;

    let upstream = state
        .http
        .request(parts.method.clone(), url.clone())
        .headers(filter_headers(&parts.headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, method = %parts.method, %url, "backend request failed");
            ProxyError::Upstream(e.to_string())
        })?;

    let status = upstream.status();
    let headers = filter_headers(upstream.headers());
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(error = %e, %url, "backend reply unreadable");
        ProxyError::Upstream(e.to_string())
    })?;

    tracing::debug!(method = %parts.method, path = %parts.uri.path(), status = status.as_u16(), "forwarded");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
