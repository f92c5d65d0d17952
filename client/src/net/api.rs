//! REST calls to the chat backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The network layer only captures `(status, body text)`. Turning that into a
//! typed result happens in the `classify_*` functions, which parse bodies
//! best-effort so a malformed error page still yields a usable message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AskResponse, CurrentUserResponse, DebugInfo, ErrorBody, SubmitPathResponse, User};

pub const USER_ENDPOINT: &str = "/api/user";
pub const ASK_ENDPOINT: &str = "/api/chat/ask";
pub const SUBMIT_PATH_ENDPOINT: &str = "/api/chat/submit-path";
pub const LOGOUT_ENDPOINT: &str = "/api/logout";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned {status}")]
    Backend { status: u16, body: ErrorBody },
    #[error("not authenticated ({status})")]
    Unauthorized { status: u16 },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Backend-supplied error text, if the server sent any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Backend { body, .. } => body.detail(),
            _ => None,
        }
    }

    /// Backend-supplied follow-up hint (`suggestion` / `solution`).
    pub fn hint(&self) -> Option<&str> {
        match self {
            ApiError::Backend { body, .. } => body.hint(),
            _ => None,
        }
    }

    /// Retrieval diagnostics some error replies still carry.
    pub fn debug(&self) -> Option<&DebugInfo> {
        match self {
            ApiError::Backend { body, .. } => body.debug.as_ref(),
            _ => None,
        }
    }
}

/// Raw HTTP reply: status code plus body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn error_body(&self) -> ErrorBody {
        serde_json::from_str(&self.body).unwrap_or_default()
    }

    fn backend_error(&self) -> ApiError {
        ApiError::Backend { status: self.status, body: self.error_body() }
    }
}

/// Interpret a `/api/user` reply.
///
/// # Errors
///
/// Any non-2xx status is [`ApiError::Unauthorized`]; an unparsable body is
/// [`ApiError::Decode`].
pub fn classify_user(reply: &Reply) -> Result<User, ApiError> {
    if !reply.ok() {
        return Err(ApiError::Unauthorized { status: reply.status });
    }
    serde_json::from_str::<CurrentUserResponse>(&reply.body)
        .map(|r| r.user)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Interpret a submit-path reply.
///
/// Success requires a 2xx status and a `status` field that is either absent or
/// `"success"`. A 2xx body that does not parse counts as success with no
/// message.
///
/// # Errors
///
/// Returns [`ApiError::Backend`] for non-2xx replies and for 2xx replies whose
/// `status` field reports anything other than success.
pub fn classify_submit(reply: &Reply) -> Result<SubmitPathResponse, ApiError> {
    if !reply.ok() {
        return Err(reply.backend_error());
    }
    let parsed: SubmitPathResponse = serde_json::from_str(&reply.body).unwrap_or_default();
    match parsed.status.as_deref() {
        None | Some("success") => Ok(parsed),
        Some(_) => Err(reply.backend_error()),
    }
}

/// Interpret an ask reply.
///
/// # Errors
///
/// Returns [`ApiError::Backend`] for non-2xx replies and [`ApiError::Decode`]
/// when a 2xx body is not an answer object.
pub fn classify_ask(reply: &Reply) -> Result<AskResponse, ApiError> {
    if !reply.ok() {
        return Err(reply.backend_error());
    }
    serde_json::from_str(&reply.body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn read_reply(request: gloo_net::http::Request) -> Result<Reply, ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Ok(Reply { status, body })
}

#[cfg(feature = "hydrate")]
fn post_json<T: serde::Serialize>(url: &str, payload: &T) -> Result<gloo_net::http::Request, ApiError> {
    gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| ApiError::Transport(e.to_string()))
}

/// Fetch the signed-in user from `/api/user`.
///
/// # Errors
///
/// See [`classify_user`]; transport failures are [`ApiError::Transport`].
pub async fn fetch_current_user() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(USER_ENDPOINT)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        classify_user(&read_reply(request).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend to ingest the document at `path`.
///
/// # Errors
///
/// See [`classify_submit`]; transport failures are [`ApiError::Transport`].
pub async fn submit_path(path: &str) -> Result<SubmitPathResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = post_json(SUBMIT_PATH_ENDPOINT, &super::types::SubmitPathRequest { path })?;
        classify_submit(&read_reply(request).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// Ask `question` about the document at `path`.
///
/// # Errors
///
/// See [`classify_ask`]; transport failures are [`ApiError::Transport`].
pub async fn ask(path: &str, question: &str) -> Result<AskResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = post_json(ASK_ENDPOINT, &super::types::AskRequest { path, question })?;
        classify_ask(&read_reply(request).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, question);
        Err(ApiError::Unavailable)
    }
}

/// End the session via `POST /api/logout`. Any HTTP reply counts as done.
///
/// # Errors
///
/// Only transport failures are reported.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        gloo_net::http::Request::post(LOGOUT_ENDPOINT)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
