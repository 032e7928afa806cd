// shared-types-rs/src/envelope.rs
// Request and response bodies of the dispatcher endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::action::ActionType;

/// Body of `POST /api/gemini`
///
/// Both fields are kept loose on the server side: `actionType` may carry an
/// unrecognized tag and `promptText` may hold any JSON value, and validation
/// decides what to do with them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchRequest {
    #[serde(default)]
    pub prompt_text: Option<Value>,
    #[serde(default)]
    pub action_type: Option<String>,
}

impl DispatchRequest {
    /// Build the body a client sends for `action`. No-input actions send
    /// `promptText: null`.
    pub fn new(action: ActionType, prompt_text: Option<&str>) -> Self {
        let prompt_text = if action.requires_prompt_text() {
            prompt_text.map(|text| Value::String(text.to_string()))
        } else {
            None
        };

        Self {
            prompt_text,
            action_type: Some(action.as_str().to_string()),
        }
    }

    /// `promptText` when it is a JSON string
    pub fn prompt_str(&self) -> Option<&str> {
        self.prompt_text.as_ref().and_then(Value::as_str)
    }
}

/// Normalized dispatcher output: exactly one of generated text or an error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultEnvelope {
    Generated {
        #[serde(rename = "generatedText")]
        generated_text: String,
    },
    Failure {
        error: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<Value>,
    },
}

impl ResultEnvelope {
    pub fn generated(text: impl Into<String>) -> Self {
        ResultEnvelope::Generated {
            generated_text: text.into(),
        }
    }

    pub fn failure(error: impl Into<String>, details: Option<Value>) -> Self {
        ResultEnvelope::Failure {
            error: error.into(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_input_actions_send_null_prompt() {
        let body = serde_json::to_value(DispatchRequest::new(ActionType::SystemStatus, Some("ignored"))).unwrap();
        assert_eq!(body, json!({ "promptText": null, "actionType": "system_status" }));

        let body = serde_json::to_value(DispatchRequest::new(ActionType::Query, Some("hi"))).unwrap();
        assert_eq!(body, json!({ "promptText": "hi", "actionType": "query" }));
    }

    #[test]
    fn test_request_tolerates_missing_and_odd_fields() {
        let request: DispatchRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request, DispatchRequest::default());

        let request: DispatchRequest =
            serde_json::from_value(json!({ "promptText": 42, "actionType": "query" })).unwrap();
        assert_eq!(request.prompt_str(), None);
        assert_eq!(request.action_type.as_deref(), Some("query"));
    }

    #[test]
    fn test_envelope_serializes_one_branch() {
        let ok = serde_json::to_value(ResultEnvelope::generated("Hello")).unwrap();
        assert_eq!(ok, json!({ "generatedText": "Hello" }));

        let err = serde_json::to_value(ResultEnvelope::failure("boom", None)).unwrap();
        assert_eq!(err, json!({ "error": "boom" }));

        let err = serde_json::to_value(ResultEnvelope::failure("boom", Some(json!({ "code": 7 })))).unwrap();
        assert_eq!(err, json!({ "error": "boom", "details": { "code": 7 } }));
    }

    #[test]
    fn test_envelope_deserializes_either_branch() {
        let ok: ResultEnvelope = serde_json::from_value(json!({ "generatedText": "x" })).unwrap();
        assert_eq!(ok, ResultEnvelope::generated("x"));

        let err: ResultEnvelope = serde_json::from_value(json!({ "error": "nope" })).unwrap();
        assert_eq!(err, ResultEnvelope::failure("nope", None));

        assert!(serde_json::from_value::<ResultEnvelope>(json!({ "status": "?" })).is_err());
    }
}
