//! # SANDEVISTAN Console
//!
//! Terminal client for the prompt dispatcher. Each console control maps to
//! one action type; replies are rendered to HTML through the Markdown
//! renderer, and every outcome leaves a message in the response area.

pub mod action;
pub mod client;
pub mod effects;
pub mod error;
pub mod state;


pub use action::ConsoleAction;
pub use client::{DispatcherClient, Reply};
pub use effects::{Effects, LogEffects, NoEffects};
pub use error::ConsoleError;
pub use state::{ConsoleState, SubmitOutcome};
