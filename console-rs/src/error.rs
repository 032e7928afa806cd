// console-rs/src/error.rs
// Error types for the console client

use thiserror::Error;

/// Failure to obtain a usable reply from the dispatcher
///
/// The display form of each variant is the detail shown inside the
/// "connection unstable" console message.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConsoleError {
    /// The request never produced a response
    #[error("{0}")]
    Transport(String),

    /// The dispatcher answered with a non-success status
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// A success response whose body is not JSON
    #[error("{0}")]
    InvalidReply(String),
}

impl ConsoleError {
    /// Build the rejection for a failing status from whatever body came back
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => value
                .get("error")
                .and_then(|e| e.as_str())
                .filter(|e| !e.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| {
                    format!("Network response from backend was not ok. Status: {}", status)
                }),
            Err(_) => "Failed to parse error response from backend.".to_string(),
        };

        ConsoleError::Rejected { status, message }
    }
}

impl From<reqwest::Error> for ConsoleError {
    fn from(err: reqwest::Error) -> Self {
        ConsoleError::Transport(err.to_string())
    }
}
