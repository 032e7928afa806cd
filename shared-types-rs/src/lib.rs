//! Wire types shared by the prompt dispatcher and its clients

pub mod action;
pub mod envelope;

pub use action::{ActionType, UnknownActionType};
pub use envelope::{DispatchRequest, ResultEnvelope};

/// Path of the dispatcher endpoint
pub const DISPATCH_PATH: &str = "/api/gemini";

/// Persona name interpolated into every prompt and user-facing message
pub const PERSONA: &str = "SANDEVISTAN";
