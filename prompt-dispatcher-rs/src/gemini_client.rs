// prompt-dispatcher-rs/src/gemini_client.rs
//
// HTTP client for the Gemini generateContent API
//
// One call is one POST; there is no retry loop. The caller receives the raw
// status and body and decides what they mean (see normalize.rs).

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use crate::settings::UpstreamSettings;

const USER_AGENT: &str = concat!("sandevistan-dispatcher/", env!("CARGO_PKG_VERSION"));

/// Transport-level failures of the outbound call
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

/// Status and body of an upstream response, before interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Something that can run one generateContent call
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate_content(&self, api_key: &str, prompt: &str) -> Result<RawResponse, UpstreamError>;
}

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub role: &'a str,
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    /// Single-message conversation carrying `prompt` as the user turn
    pub fn user_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(settings: &UpstreamSettings) -> Result<Self, UpstreamError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| UpstreamError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: settings.endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn generate_content(&self, api_key: &str, prompt: &str) -> Result<RawResponse, UpstreamError> {
        tracing::debug!("Sending generateContent request to {}", self.endpoint);

        // The credential travels in the query string, so reqwest errors are
        // stripped of their URL before they can reach a log line or a caller.
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .json(&GenerateContentRequest::user_prompt(prompt))
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.without_url()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::Request(e.without_url()))?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::new(&UpstreamSettings {
            base_url: format!("{}/v1beta/models", server.uri()),
            model: "gemini-2.0-flash".to_string(),
            timeout: Some(std::time::Duration::from_secs(5)),
        })
        .expect("client builds")
    }

    #[test]
    fn test_request_payload_shape() {
        let payload = serde_json::to_value(GenerateContentRequest::user_prompt("ping")).unwrap();
        assert_eq!(
            payload,
            json!({ "contents": [{ "role": "user", "parts": [{ "text": "ping" }] }] })
        );
    }

    #[tokio::test]
    async fn test_generate_content_posts_prompt_with_key() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
            .and(query_param("key", "mock_api_key_for_testing"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "contents": [{ "role": "user", "parts": [{ "text": "status?" }] }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"candidates":[]}"#))
            .expect(1)
            .mount(&server)
            .await;

        let raw = client_for(&server)
            .generate_content("mock_api_key_for_testing", "status?")
            .await
            .unwrap();

        assert_eq!(raw, RawResponse::new(200, r#"{"candidates":[]}"#));
    }

    #[tokio::test]
    async fn test_error_status_is_returned_not_raised() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let raw = client_for(&server).generate_content("k", "p").await.unwrap();
        assert_eq!(raw.status, 503);
        assert_eq!(raw.body, "upstream down");
    }

    #[tokio::test]
    async fn test_transport_error_hides_credential() {
        // Nothing listens on port 1, so the connection is refused.
        let client = GeminiClient::new(&UpstreamSettings {
            base_url: "http://127.0.0.1:1/v1beta/models".to_string(),
            ..UpstreamSettings::default()
        })
        .unwrap();

        let err = client
            .generate_content("super-secret-key", "p")
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::Request(_)));
        assert!(!err.to_string().contains("super-secret-key"));
    }
}
