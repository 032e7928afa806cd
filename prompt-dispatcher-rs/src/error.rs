// prompt-dispatcher-rs/src/error.rs
// Failure taxonomy of the dispatcher and its mapping onto HTTP responses

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use shared_types::{ResultEnvelope, PERSONA};
use thiserror::Error;

/// Every way a dispatch can fail. Each variant is terminal for its request.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DispatchError {
    #[error("Method {0} Not Allowed")]
    MethodNotAllowed(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Request body exceeds {0} bytes")]
    PayloadTooLarge(usize),

    #[error("Action type is required")]
    MissingActionType,

    #[error("Prompt text is required for this action type")]
    PromptTextRequired,

    /// The credential is missing. The message stays generic; the variable
    /// name only goes to the server log.
    #[error("AI core offline: API key not configured by site administrator.")]
    NotConfigured,

    #[error("Gemini API Error: {message}")]
    UpstreamHttp {
        status: u16,
        message: String,
        details: Value,
    },

    #[error("Transmission blocked by {}'s core filters: {0}. Please rephrase your query.", PERSONA)]
    Blocked(String),

    #[error("Received an incomplete or malformed signal from the datastream (backend processing).")]
    MalformedUpstream,

    #[error("{} Core Interface Error: {0}", PERSONA)]
    Transport(String),
}

impl DispatchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::InvalidBody(_) | Self::MissingActionType | Self::PromptTextRequired | Self::Blocked(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::UpstreamHttp { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::NotConfigured | Self::MalformedUpstream | Self::Transport(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Validation failures, raised before any network activity
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MethodNotAllowed(_)
                | Self::InvalidBody(_)
                | Self::PayloadTooLarge(_)
                | Self::MissingActionType
                | Self::PromptTextRequired
        )
    }

    pub fn to_envelope(&self) -> ResultEnvelope {
        let details = match self {
            Self::UpstreamHttp { details, .. } => Some(details.clone()),
            _ => None,
        };
        ResultEnvelope::failure(self.to_string(), details)
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        let mut response = (self.status_code(), Json(self.to_envelope())).into_response();
        if let Self::MethodNotAllowed(_) = self {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST"));
        }
        response
    }
}
