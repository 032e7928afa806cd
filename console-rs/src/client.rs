// console-rs/src/client.rs
// HTTP client for the prompt dispatcher endpoint

use config_rs::ConfigProvider;
use reqwest::Client;
use serde_json::Value;
use shared_types::{DispatchRequest, DISPATCH_PATH};

use crate::error::ConsoleError;

/// Environment variable naming the dispatcher endpoint
pub const DISPATCHER_URL_VAR: &str = "CONSOLE_DISPATCHER_URL";

/// Endpoint used when no override is configured
pub fn default_endpoint() -> String {
    format!("http://localhost:3000{}", DISPATCH_PATH)
}

/// What a successful dispatcher response turned out to contain
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Generated(String),
    Failed {
        error: String,
        details: Option<Value>,
    },
    /// Parsed as JSON but carries neither usable field
    Unrecognized(Value),
}

impl Reply {
    /// Classify a decoded body. Empty strings count as absent.
    pub fn classify(body: Value) -> Self {
        if let Some(text) = non_empty_str(&body, "generatedText") {
            return Reply::Generated(text.to_string());
        }

        if let Some(error) = non_empty_str(&body, "error") {
            return Reply::Failed {
                error: error.to_string(),
                details: body.get("details").filter(|d| !d.is_null()).cloned(),
            };
        }

        Reply::Unrecognized(body)
    }
}

fn non_empty_str<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

#[derive(Debug, Clone)]
pub struct DispatcherClient {
    client: Client,
    endpoint: String,
}

impl DispatcherClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint from `CONSOLE_DISPATCHER_URL`, or the local default
    pub fn from_provider(config: &dyn ConfigProvider) -> Self {
        Self::new(config.get_string_or(DISPATCHER_URL_VAR, &default_endpoint()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST one request and classify the response
    pub async fn send(&self, request: &DispatchRequest) -> Result<Reply, ConsoleError> {
        log::debug!("POST {} actionType={:?}", self.endpoint, request.action_type);

        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = ConsoleError::rejected(status.as_u16(), &body);
            log::error!("Backend API Error Data (status {}): {}", status.as_u16(), body);
            return Err(err);
        }

        let value: Value =
            serde_json::from_str(&body).map_err(|e| ConsoleError::InvalidReply(e.to_string()))?;

        Ok(Reply::classify(value))
    }
}
