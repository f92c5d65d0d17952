//! Wire DTOs for the chat backend.
//!
//! DESIGN
//! ======
//! Optional fields default instead of failing so replies from both the current
//! `/api/chat/*` handlers and the older flat handlers deserialize into the
//! same shapes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Signed-in user as returned by `/api/user`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Name when present and non-empty, otherwise the email address.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }
}

/// Envelope for `GET /api/user`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CurrentUserResponse {
    pub user: User,
}

/// Body of `POST /api/chat/submit-path`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubmitPathRequest<'a> {
    pub path: &'a str,
}

/// Successful submit-path reply. `status` is only sent by the older handler.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SubmitPathResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub chunk_count: Option<u64>,
}

/// Body of `POST /api/chat/ask`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AskRequest<'a> {
    pub path: &'a str,
    pub question: &'a str,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_debug")]
    pub debug: Option<DebugInfo>,
}

/// Retrieval diagnostics attached to an answer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugInfo {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub top_chunks: Vec<ScoredChunk>,
    #[serde(default)]
    pub context_used: Option<String>,
}

/// One matched fragment and its similarity score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub score: f64,
    pub text: String,
}

/// Best-effort error body. Handlers disagree on which key carries the text.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub suggestion: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default, deserialize_with = "lenient_debug")]
    pub debug: Option<DebugInfo>,
}

impl ErrorBody {
    /// `error`, then `message`, skipping blanks.
    pub fn detail(&self) -> Option<&str> {
        non_blank(self.error.as_deref()).or_else(|| non_blank(self.message.as_deref()))
    }

    /// `suggestion`, then `solution`, skipping blanks.
    pub fn hint(&self) -> Option<&str> {
        non_blank(self.suggestion.as_deref()).or_else(|| non_blank(self.solution.as_deref()))
    }
}

/// Diagnostics are optional extras; a malformed payload becomes `None` instead
/// of failing the whole reply.
fn lenient_debug<'de, D>(deserializer: D) -> Result<Option<DebugInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
