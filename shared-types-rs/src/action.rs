// shared-types-rs/src/action.rs
// Action types understood by the prompt dispatcher

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request intent selecting the prompt template and validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Free-form question answered with a long structured response
    Query,
    /// Interpretation of a pasted text fragment
    DecodeTransmission,
    /// Fictional system status report, no input
    SystemStatus,
    /// Short atmospheric description, no input
    DatascapeGlimpse,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action type: {0}")]
pub struct UnknownActionType(pub String);

impl ActionType {
    pub const ALL: [ActionType; 4] = [
        ActionType::Query,
        ActionType::DecodeTransmission,
        ActionType::SystemStatus,
        ActionType::DatascapeGlimpse,
    ];

    /// Wire tag of this action
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Query => "query",
            ActionType::DecodeTransmission => "decode_transmission",
            ActionType::SystemStatus => "system_status",
            ActionType::DatascapeGlimpse => "datascape_glimpse",
        }
    }

    /// Resolve a wire tag for dispatch. Unrecognized tags fall back to
    /// [`ActionType::Query`].
    pub fn resolve(tag: &str) -> Self {
        tag.parse().unwrap_or(ActionType::Query)
    }

    /// Whether a non-blank `promptText` must accompany this action
    pub fn requires_prompt_text(&self) -> bool {
        matches!(self, ActionType::Query | ActionType::DecodeTransmission)
    }
}

impl FromStr for ActionType {
    type Err = UnknownActionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionType::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownActionType(s.to_string()))
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_from_str() {
        for action in ActionType::ALL {
            assert_eq!(action.as_str().parse::<ActionType>(), Ok(action));
        }
        assert_eq!(
            "reboot".parse::<ActionType>(),
            Err(UnknownActionType("reboot".to_string()))
        );
    }

    #[test]
    fn test_unknown_tags_resolve_to_query() {
        assert_eq!(ActionType::resolve("reboot"), ActionType::Query);
        assert_eq!(ActionType::resolve("SYSTEM_STATUS"), ActionType::Query);
        assert_eq!(ActionType::resolve("system_status"), ActionType::SystemStatus);
    }

    #[test]
    fn test_prompt_text_requirement() {
        assert!(ActionType::Query.requires_prompt_text());
        assert!(ActionType::DecodeTransmission.requires_prompt_text());
        assert!(!ActionType::SystemStatus.requires_prompt_text());
        assert!(!ActionType::DatascapeGlimpse.requires_prompt_text());
    }

    #[test]
    fn test_serde_uses_snake_case_tags() {
        let json = serde_json::to_string(&ActionType::DatascapeGlimpse).unwrap();
        assert_eq!(json, "\"datascape_glimpse\"");
    }
}
