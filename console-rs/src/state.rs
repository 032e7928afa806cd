// console-rs/src/state.rs
// Console application state and the submit flow

use std::ops::{Deref, DerefMut};

use markdown_renderer::markdown_to_html;
use shared_types::PERSONA;

use crate::action::ConsoleAction;
use crate::client::{DispatcherClient, Reply};
use crate::effects::Effects;

pub const IDLE_MESSAGE: &str = "Awaiting transmission...";
pub const ACTIVE_MESSAGE: &str = "Core interface active. Awaiting command...";

/// How a submission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Generated text was rendered
    Generated,
    /// Blank input for a text control; nothing was sent
    Refused,
    /// The dispatcher answered with an error envelope
    BackendError,
    /// The dispatcher answered with a body carrying neither field
    Unrecognized,
    /// No usable response: transport failure, failing status or non-JSON body
    ConnectionFailed,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Generated)
    }
}

/// Everything the console tracks between interactions
#[derive(Debug)]
pub struct ConsoleState<E: Effects> {
    controls_enabled: bool,
    muted: bool,
    audio_started: bool,
    core_active: bool,
    output: String,
    effects: E,
}

impl<E: Effects> ConsoleState<E> {
    pub fn new(effects: E) -> Self {
        Self {
            controls_enabled: true,
            muted: false,
            audio_started: false,
            core_active: false,
            output: IDLE_MESSAGE.to_string(),
            effects,
        }
    }

    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn audio_started(&self) -> bool {
        self.audio_started
    }

    pub fn core_active(&self) -> bool {
        self.core_active
    }

    /// Rendered HTML of the response area
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    /// Open the interaction panel. Counts as the first user gesture for audio.
    pub fn access_core(&mut self) {
        self.ensure_audio();
        self.core_active = true;
        self.output = ACTIVE_MESSAGE.to_string();
    }

    /// Flip mute, returning the new setting
    pub fn toggle_mute(&mut self) -> bool {
        self.ensure_audio();
        self.muted = !self.muted;
        self.effects.set_muted(self.muted);
        self.muted
    }

    fn ensure_audio(&mut self) {
        if !self.audio_started {
            self.effects.start_audio();
            self.audio_started = true;
        }
    }

    fn render(&mut self, markdown: &str) {
        self.output = markdown_to_html(markdown);
    }

    /// Disable the controls until the returned guard is dropped
    fn lock_controls(&mut self) -> ControlsGuard<'_, E> {
        self.controls_enabled = false;
        self.output.clear();
        self.effects.set_loading(true);
        ControlsGuard { state: self }
    }

    /// Run one control against the dispatcher and render whatever comes back.
    ///
    /// Blank input for a text control is reported without any request.
    /// Every other path renders some message and leaves the controls enabled.
    pub async fn submit(
        &mut self,
        client: &DispatcherClient,
        action: ConsoleAction,
        input: &str,
    ) -> SubmitOutcome {
        let request = match action.prepare(input) {
            Ok(request) => request,
            Err(message) => {
                self.render(&message);
                return SubmitOutcome::Refused;
            }
        };

        log::info!("Transmitting {}", action);
        let mut state = self.lock_controls();

        match client.send(&request).await {
            Ok(Reply::Generated(text)) => {
                state.render(&text);
                SubmitOutcome::Generated
            }
            Ok(Reply::Failed { error, details }) => {
                log::error!("Error from backend API: {} {:?}", error, details);
                state.render(&format!("Error: {}", error));
                SubmitOutcome::BackendError
            }
            Ok(Reply::Unrecognized(body)) => {
                log::error!("Unexpected backend response structure: {}", body);
                state.render(&format!(
                    "Error: Received an incomplete or malformed signal from the {} core (frontend processing).",
                    PERSONA
                ));
                SubmitOutcome::Unrecognized
            }
            Err(err) => {
                log::error!("Error calling backend API: {:?}", err);
                state.render(&format!(
                    "Error: Connection to {} core unstable. {}. Check console for details.",
                    PERSONA, err
                ));
                SubmitOutcome::ConnectionFailed
            }
        }
    }
}

/// Re-enables the controls when dropped, whatever the outcome of the call
pub struct ControlsGuard<'a, E: Effects> {
    state: &'a mut ConsoleState<E>,
}

impl<E: Effects> Deref for ControlsGuard<'_, E> {
    type Target = ConsoleState<E>;

    fn deref(&self) -> &Self::Target {
        self.state
    }
}

impl<E: Effects> DerefMut for ControlsGuard<'_, E> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.state
    }
}

impl<E: Effects> Drop for ControlsGuard<'_, E> {
    fn drop(&mut self) {
        self.state.effects.set_loading(false);
        self.state.controls_enabled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::NoEffects;

    #[derive(Debug, Default)]
    struct RecordingEffects {
        audio_starts: usize,
        muted: Vec<bool>,
        loading: Vec<bool>,
    }

    impl Effects for RecordingEffects {
        fn start_audio(&mut self) {
            self.audio_starts += 1;
        }

        fn set_muted(&mut self, muted: bool) {
            self.muted.push(muted);
        }

        fn set_loading(&mut self, loading: bool) {
            self.loading.push(loading);
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ConsoleState::new(NoEffects);
        assert!(state.controls_enabled());
        assert!(!state.is_muted());
        assert!(!state.audio_started());
        assert_eq!(state.output(), IDLE_MESSAGE);
    }

    #[test]
    fn test_mute_toggle_starts_audio_once() {
        let mut state = ConsoleState::new(RecordingEffects::default());
        assert!(state.toggle_mute());
        assert!(!state.toggle_mute());
        assert_eq!(state.effects().audio_starts, 1);
        assert_eq!(state.effects().muted, vec![true, false]);
    }

    #[test]
    fn test_access_core_starts_audio() {
        let mut state = ConsoleState::new(RecordingEffects::default());
        state.access_core();
        assert!(state.core_active());
        assert!(state.audio_started());
        assert_eq!(state.effects().audio_starts, 1);
        assert_eq!(state.output(), ACTIVE_MESSAGE);
    }

    #[test]
    fn test_only_generated_text_counts_as_success() {
        assert!(SubmitOutcome::Generated.is_success());
        for outcome in [
            SubmitOutcome::Refused,
            SubmitOutcome::BackendError,
            SubmitOutcome::Unrecognized,
            SubmitOutcome::ConnectionFailed,
        ] {
            assert!(!outcome.is_success(), "{:?}", outcome);
        }
    }

    #[test]
    fn test_guard_restores_controls() {
        let mut state = ConsoleState::new(RecordingEffects::default());
        {
            let guard = state.lock_controls();
            assert!(!guard.controls_enabled());
            assert_eq!(guard.output(), "");
        }
        assert!(state.controls_enabled());
        assert_eq!(state.effects().loading, vec![true, false]);
    }
}
