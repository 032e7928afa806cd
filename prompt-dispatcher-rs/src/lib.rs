//! # Prompt Dispatcher
//!
//! Single-endpoint proxy between the SANDEVISTAN console and the Gemini
//! generateContent API.
//!
//! A request names an action type and optionally carries free text. The
//! dispatcher validates it, picks the prompt template for the action, makes
//! one upstream call and answers with either `{generatedText}` or
//! `{error, details?}`. Nothing is kept between requests.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::DefaultBodyLimit;
use axum::routing::{any, get};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod dispatcher;
pub mod error;
pub mod gemini_client;
pub mod handlers;
pub mod normalize;
pub mod prompts;
pub mod settings;
pub mod validation;


pub use dispatcher::Dispatcher;
pub use error::DispatchError;
pub use gemini_client::{GeminiClient, GenerativeBackend, RawResponse, UpstreamError};
pub use normalize::{normalize, UpstreamOutcome};
pub use settings::DispatcherSettings;
pub use shared_types::DISPATCH_PATH;

/// Shared application state
pub struct AppState {
    pub dispatcher: Dispatcher,
    pub started_at: Instant,
    /// Inbound body limit, reported back when a request exceeds it
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher, max_body_bytes: usize) -> Self {
        Self {
            dispatcher,
            started_at: Instant::now(),
            max_body_bytes,
        }
    }
}

/// Create the Axum router with all routes and middleware
///
/// The body limit is enforced by the `Bytes` extractor so an oversized
/// request is answered by the dispatch handler with a JSON envelope.
pub fn create_router(state: Arc<AppState>) -> Router {
    let max_body_bytes = state.max_body_bytes;
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/health", get(handlers::health_handler))
        .route(DISPATCH_PATH, any(handlers::dispatch_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
