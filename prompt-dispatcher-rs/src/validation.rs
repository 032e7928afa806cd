// prompt-dispatcher-rs/src/validation.rs
// Request validation, run before any outbound activity

use shared_types::{ActionType, DispatchRequest};

use crate::error::DispatchError;

/// A request that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRequest<'a> {
    /// Template family to use; unrecognized tags resolve to `Query`
    pub action: ActionType,
    /// `promptText` when it was a string, otherwise empty
    pub prompt_text: &'a str,
}

/// Parse an inbound body. `actionType` must be a JSON string when present.
/// An empty body is read as `{}` so it fails on the missing action type
/// rather than on syntax.
pub fn parse_body(body: &[u8]) -> Result<DispatchRequest, DispatchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(DispatchRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| DispatchError::InvalidBody(e.to_string()))
}

/// Apply the dispatch rules:
/// - an action type must be present and non-empty;
/// - `query` and `decode_transmission` need a string `promptText` that is
///   not blank after trimming;
/// - every other tag accepts a missing or empty `promptText`.
pub fn validate(request: &DispatchRequest) -> Result<ValidatedRequest<'_>, DispatchError> {
    let tag = request
        .action_type
        .as_deref()
        .filter(|tag| !tag.is_empty())
        .ok_or(DispatchError::MissingActionType)?;

    let prompt_text = request.prompt_str();

    let needs_text = tag
        .parse::<ActionType>()
        .map(|action| action.requires_prompt_text())
        .unwrap_or(false);

    if needs_text && prompt_text.map_or(true, |text| text.trim().is_empty()) {
        return Err(DispatchError::PromptTextRequired);
    }

    Ok(ValidatedRequest {
        action: ActionType::resolve(tag),
        prompt_text: prompt_text.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> DispatchRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_action_type() {
        for body in [json!({}), json!({ "actionType": null }), json!({ "actionType": "", "promptText": "hi" })] {
            assert_eq!(validate(&request(body)), Err(DispatchError::MissingActionType));
        }
    }

    #[test]
    fn test_text_actions_need_non_blank_string() {
        for action in ["query", "decode_transmission"] {
            for prompt in [json!(null), json!(""), json!("   \n\t"), json!(7), json!(["a"])] {
                let body = json!({ "actionType": action, "promptText": prompt });
                assert_eq!(
                    validate(&request(body.clone())),
                    Err(DispatchError::PromptTextRequired),
                    "body: {}",
                    body
                );
            }
        }
    }

    #[test]
    fn test_no_input_actions_accept_missing_text() {
        let validated = request(json!({ "actionType": "system_status" }));
        assert_eq!(
            validate(&validated),
            Ok(ValidatedRequest {
                action: ActionType::SystemStatus,
                prompt_text: "",
            })
        );

        let validated = request(json!({ "actionType": "datascape_glimpse", "promptText": 3 }));
        assert_eq!(validate(&validated).unwrap().action, ActionType::DatascapeGlimpse);
    }

    #[test]
    fn test_unknown_action_uses_query_template_without_requiring_text() {
        let unknown = request(json!({ "actionType": "overclock" }));
        assert_eq!(
            validate(&unknown),
            Ok(ValidatedRequest {
                action: ActionType::Query,
                prompt_text: "",
            })
        );
    }

    #[test]
    fn test_prompt_text_is_kept_verbatim() {
        let body = request(json!({ "actionType": "query", "promptText": "  what is tor?  " }));
        assert_eq!(validate(&body).unwrap().prompt_text, "  what is tor?  ");
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(b"").unwrap(), DispatchRequest::default());
        assert_eq!(parse_body(b"  \n").unwrap(), DispatchRequest::default());
        assert!(matches!(parse_body(b"{not json"), Err(DispatchError::InvalidBody(_))));
        assert!(matches!(parse_body(br#"{"actionType": 5}"#), Err(DispatchError::InvalidBody(_))));

        let parsed = parse_body(br#"{"actionType":"query","promptText":"x"}"#).unwrap();
        assert_eq!(parsed.action_type.as_deref(), Some("query"));
    }
}
