// console-rs/src/action.rs
// The four console controls and the requests they produce

use std::fmt;

use shared_types::{ActionType, DispatchRequest, PERSONA};

/// A control on the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleAction {
    TransmitQuery,
    DecodeTransmission,
    SystemStatus,
    DatascapeGlimpse,
}

impl ConsoleAction {
    pub const ALL: [ConsoleAction; 4] = [
        ConsoleAction::TransmitQuery,
        ConsoleAction::DecodeTransmission,
        ConsoleAction::SystemStatus,
        ConsoleAction::DatascapeGlimpse,
    ];

    pub fn action_type(&self) -> ActionType {
        match self {
            ConsoleAction::TransmitQuery => ActionType::Query,
            ConsoleAction::DecodeTransmission => ActionType::DecodeTransmission,
            ConsoleAction::SystemStatus => ActionType::SystemStatus,
            ConsoleAction::DatascapeGlimpse => ActionType::DatascapeGlimpse,
        }
    }

    /// Button caption
    pub fn label(&self) -> &'static str {
        match self {
            ConsoleAction::TransmitQuery => "TRANSMIT QUERY",
            ConsoleAction::DecodeTransmission => "DECODE TRANSMISSION",
            ConsoleAction::SystemStatus => "GET SYSTEM_STATUS",
            ConsoleAction::DatascapeGlimpse => "GLIMPSE DATASCAPE",
        }
    }

    /// Whether the control sends the contents of the input field
    pub fn takes_input(&self) -> bool {
        self.action_type().requires_prompt_text()
    }

    /// Turn the input field into a request.
    ///
    /// Input is trimmed. Controls that take input refuse to send a blank
    /// field and return the message to show instead; the other controls
    /// ignore the field and send `promptText: null`.
    pub fn prepare(&self, input: &str) -> Result<DispatchRequest, String> {
        if !self.takes_input() {
            return Ok(DispatchRequest::new(self.action_type(), None));
        }

        let text = input.trim();
        if text.is_empty() {
            return Err(self.blank_input_message());
        }

        Ok(DispatchRequest::new(self.action_type(), Some(text)))
    }

    fn blank_input_message(&self) -> String {
        match self {
            ConsoleAction::DecodeTransmission => {
                "Error: No transmission fragment provided. Paste data into the input field above."
                    .to_string()
            }
            _ => format!(
                "Error: No query transmitted. Please enter your message to the {} core.",
                PERSONA
            ),
        }
    }
}

impl fmt::Display for ConsoleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_each_control_maps_to_one_action_type() {
        let types: Vec<_> = ConsoleAction::ALL.iter().map(|a| a.action_type()).collect();
        assert_eq!(types, ActionType::ALL.to_vec());
    }

    #[test]
    fn test_query_is_trimmed() {
        let request = ConsoleAction::TransmitQuery.prepare("  scan the grid \n").unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "promptText": "scan the grid", "actionType": "query" })
        );
    }

    #[test]
    fn test_blank_inputs_are_refused() {
        assert_eq!(
            ConsoleAction::TransmitQuery.prepare("   ").unwrap_err(),
            "Error: No query transmitted. Please enter your message to the SANDEVISTAN core."
        );
        assert_eq!(
            ConsoleAction::DecodeTransmission.prepare("").unwrap_err(),
            "Error: No transmission fragment provided. Paste data into the input field above."
        );
    }

    #[test]
    fn test_no_input_controls_send_null() {
        for action in [ConsoleAction::SystemStatus, ConsoleAction::DatascapeGlimpse] {
            let request = action.prepare("ignored").unwrap();
            let value = serde_json::to_value(&request).unwrap();
            assert_eq!(value["promptText"], serde_json::Value::Null);
            assert_eq!(value["actionType"], action.action_type().as_str());
        }
    }
}
