//! Hosts the typewriter and caret timers for the hero section.
//!
//! Each mount gets a generation number that travels with every event it
//! emits. The app drops events from any generation other than the current
//! one, so frames still queued in the channel when the hero unmounts are
//! never applied.

use crate::animation::caret::CaretBlink;
use crate::animation::scheduler::{schedule_dynamic, schedule_every, TimerHandle};
use crate::animation::typewriter::{ConfigError, Typewriter, TypewriterConfig};
use crate::app::event::{AppEvent, Generation};
use tokio::sync::mpsc;

pub struct HeroAnimation {
    generation: Generation,
    typing: Option<TimerHandle>,
    caret: Option<TimerHandle>,
}

impl HeroAnimation {
    /// Build a fresh typewriter and start both timers.
    pub fn mount(
        generation: Generation,
        config: &TypewriterConfig,
        caret: &CaretBlink,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Result<Self, ConfigError> {
        let mut typewriter = Typewriter::new(config.clone())?;
        let first = typewriter.next_delay();

        let frame_tx = event_tx.clone();
        let typing = schedule_dynamic(first, move || {
            let next = typewriter.step();
            frame_tx
                .send(AppEvent::HeroFrame {
                    generation,
                    frame: typewriter.frame(),
                })
                .ok()
                .map(|_| next)
        });

        let caret = schedule_every(caret.half_period(), move || {
            let _ = event_tx.send(AppEvent::CaretBlink { generation });
        });

        tracing::debug!(generation, "hero mounted");
        Ok(Self {
            generation,
            typing: Some(typing),
            caret: Some(caret),
        })
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.typing.is_some()
    }

    /// Cancel both timers. Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(handle) = self.typing.take() {
            handle.cancel();
            tracing::debug!(generation = self.generation, "hero unmounted");
        }
        if let Some(handle) = self.caret.take() {
            handle.cancel();
        }
    }
}

impl Drop for HeroAnimation {
    fn drop(&mut self) {
        self.unmount();
    }
}
