// prompt-dispatcher-rs/src/normalize.rs
// Interpretation of raw upstream responses

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::error::DispatchError;
use crate::gemini_client::{RawResponse, UpstreamError};

/// What an upstream exchange amounted to
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamOutcome {
    /// First text part of the first candidate
    Success(String),
    /// Non-success status with a best-effort parsed error body
    HttpError {
        status: u16,
        message: String,
        details: Value,
    },
    /// The prompt was refused; carries `promptFeedback.blockReason`
    Blocked(String),
    /// Success status, but neither a candidate nor a block indication
    Malformed,
    /// The call failed or its success body was not JSON
    Transport(String),
}

impl From<UpstreamError> for UpstreamOutcome {
    fn from(err: UpstreamError) -> Self {
        UpstreamOutcome::Transport(err.to_string())
    }
}

impl UpstreamOutcome {
    pub fn into_result(self) -> Result<String, DispatchError> {
        match self {
            UpstreamOutcome::Success(text) => Ok(text),
            UpstreamOutcome::HttpError {
                status,
                message,
                details,
            } => Err(DispatchError::UpstreamHttp {
                status,
                message,
                details,
            }),
            UpstreamOutcome::Blocked(reason) => Err(DispatchError::Blocked(reason)),
            UpstreamOutcome::Malformed => Err(DispatchError::MalformedUpstream),
            UpstreamOutcome::Transport(message) => Err(DispatchError::Transport(message)),
        }
    }
}

/// Classify a raw upstream response.
///
/// Non-success bodies that are not JSON are replaced by a generic error
/// object naming the status, which is also what ends up in `details`.
pub fn normalize(raw: &RawResponse) -> UpstreamOutcome {
    if !(200..300).contains(&raw.status) {
        return http_error(raw);
    }

    let value: Value = match serde_json::from_str(&raw.body) {
        Ok(value) => value,
        Err(e) => return UpstreamOutcome::Transport(e.to_string()),
    };

    // Fields are looked up loosely: a null or mistyped field counts as
    // absent and the next rule is tried.
    let first_part = value
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(Value::as_array)
        .and_then(|parts| parts.first());

    if let Some(part) = first_part {
        return match part.get("text").and_then(Value::as_str) {
            Some(text) => UpstreamOutcome::Success(text.to_string()),
            None => UpstreamOutcome::Malformed,
        };
    }

    match value
        .get("promptFeedback")
        .and_then(|feedback| feedback.get("blockReason"))
        .and_then(block_reason)
    {
        Some(reason) => UpstreamOutcome::Blocked(reason),
        None => UpstreamOutcome::Malformed,
    }
}

/// Any present, non-empty reason counts; non-string reasons are reported in
/// their JSON form.
fn block_reason(reason: &Value) -> Option<String> {
    match reason {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

fn http_error(raw: &RawResponse) -> UpstreamOutcome {
    let details = serde_json::from_str::<Value>(&raw.body).unwrap_or_else(|_| {
        json!({ "error": { "message": format!("Gemini API responded with status {}", raw.status) } })
    });

    let message = details
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| reason_phrase(raw.status));

    UpstreamOutcome::HttpError {
        status: raw.status,
        message,
        details,
    }
}

fn reason_phrase(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| format!("status {}", status))
}
