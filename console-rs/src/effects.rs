// console-rs/src/effects.rs
// Presentation side effects the console state drives but does not own

/// Audio and animation hooks
///
/// The console state calls these at the points where the interface would
/// start music, show a loading indicator or mute its output.
pub trait Effects {
    /// First user interaction; audio may start from here on
    fn start_audio(&mut self) {}

    fn set_muted(&mut self, _muted: bool) {}

    fn set_loading(&mut self, _loading: bool) {}
}

/// Effects for a headless console
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEffects;

impl Effects for NoEffects {}

/// Reports effect changes through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEffects;

impl Effects for LogEffects {
    fn start_audio(&mut self) {
        log::debug!("audio started");
    }

    fn set_muted(&mut self, muted: bool) {
        log::info!("audio {}", if muted { "muted" } else { "unmuted" });
    }

    fn set_loading(&mut self, loading: bool) {
        if loading {
            log::info!("transmitting...");
        }
    }
}
