// prompt-dispatcher-rs/src/handlers.rs
// HTTP handlers of the dispatcher service

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use shared_types::{ResultEnvelope, DISPATCH_PATH};

use crate::error::DispatchError;
use crate::validation::parse_body;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub healthy: bool,
    pub service_name: String,
    pub uptime_seconds: u64,
    pub status: String,
}

/// POST /api/gemini - every method is routed here so non-POST requests get
/// the JSON envelope instead of the router's bare 405
pub async fn dispatch_handler(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    if method != Method::POST {
        tracing::warn!("Rejected {} request to {}", method, DISPATCH_PATH);
        return DispatchError::MethodNotAllowed(method.to_string()).into_response();
    }

    let body = match body {
        Ok(body) => body,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            tracing::info!("Rejected dispatch request over {} bytes", state.max_body_bytes);
            return DispatchError::PayloadTooLarge(state.max_body_bytes).into_response();
        }
        Err(rejection) => return DispatchError::InvalidBody(rejection.body_text()).into_response(),
    };

    let request = match parse_body(&body) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };

    match state.dispatcher.dispatch(&request).await {
        Ok(text) => (StatusCode::OK, Json(ResultEnvelope::generated(text))).into_response(),
        Err(err) => {
            if err.is_client_error() {
                tracing::info!("Rejected dispatch request: {}", err);
            }
            err.into_response()
        }
    }
}

/// GET /health
pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let configured = state.dispatcher.is_configured();

    Json(HealthResponse {
        healthy: true,
        service_name: "prompt-dispatcher".to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        status: if configured { "SERVING" } else { "DEGRADED" }.to_string(),
    })
}

/// GET /
pub async fn root_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "service": "SANDEVISTAN Prompt Dispatcher",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "GET /health",
            format!("POST {}", DISPATCH_PATH),
        ]
    }))
}
