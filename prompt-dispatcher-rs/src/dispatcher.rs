// prompt-dispatcher-rs/src/dispatcher.rs
//
// The dispatch pipeline: validate, resolve the credential, build the prompt,
// make exactly one upstream call and normalize its result.

use std::sync::Arc;

use config_rs::ConfigProvider;
use shared_types::DispatchRequest;
use tracing::{error, info, warn};

use crate::error::DispatchError;
use crate::gemini_client::GenerativeBackend;
use crate::normalize::{normalize, UpstreamOutcome};
use crate::prompts::build_prompt;
use crate::settings::API_KEY_VAR;
use crate::validation::validate;

/// Stateless between requests: it only holds shared handles to the
/// backend and the configuration source.
#[derive(Clone)]
pub struct Dispatcher {
    backend: Arc<dyn GenerativeBackend>,
    config: Arc<dyn ConfigProvider>,
}

impl Dispatcher {
    pub fn new(backend: Arc<dyn GenerativeBackend>, config: Arc<dyn ConfigProvider>) -> Self {
        Self { backend, config }
    }

    /// Whether a credential is currently available
    pub fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }

    // Looked up on every call so credential changes apply without a restart.
    fn api_key(&self) -> Option<String> {
        self.config.get_non_empty(API_KEY_VAR)
    }

    pub async fn dispatch(&self, request: &DispatchRequest) -> Result<String, DispatchError> {
        let validated = validate(request)?;

        let api_key = self.api_key().ok_or_else(|| {
            error!(
                "FATAL: Gemini API key is not set in the environment ({}).",
                API_KEY_VAR
            );
            DispatchError::NotConfigured
        })?;

        info!(
            "Dispatching action={} prompt_chars={}",
            validated.action,
            validated.prompt_text.chars().count()
        );

        let prompt = build_prompt(validated.action, validated.prompt_text);

        let outcome = match self.backend.generate_content(&api_key, &prompt).await {
            Ok(raw) => {
                let outcome = normalize(&raw);
                match &outcome {
                    UpstreamOutcome::HttpError { status, .. } => {
                        error!("Gemini API Error (Status: {}): {}", status, raw.body)
                    }
                    UpstreamOutcome::Blocked(reason) => {
                        warn!("Gemini API prompt blocked: {}", reason)
                    }
                    UpstreamOutcome::Malformed => {
                        error!("Unexpected Gemini API response structure: {}", raw.body)
                    }
                    UpstreamOutcome::Transport(message) => {
                        error!("Unparsable Gemini API response body: {}", message)
                    }
                    UpstreamOutcome::Success(_) => {}
                }
                outcome
            }
            Err(err) => {
                error!("Internal Server Error calling Gemini API: {}", err);
                UpstreamOutcome::from(err)
            }
        };

        outcome.into_result()
    }
}
