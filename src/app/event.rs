use crate::animation::typewriter::Frame;
use crossterm::event::Event as CrosstermEvent;

/// Identifies one mount of the hero animation.
pub type Generation = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Typewriter advanced one step
    HeroFrame {
        generation: Generation,
        frame: Frame,
    },

    /// Hero caret half-period elapsed
    CaretBlink {
        generation: Generation,
    },

    /// Contact relay outcome
    ContactSent,
    ContactFailed {
        error: String,
    },

    /// Tick for UI refresh
    Tick,
}
