//! Cyclic text-reveal animator.
//!
//! Types each phrase out one character at a time, holds it, deletes it one
//! character at a time, pauses, then moves on to the next phrase, forever.
//! The animator owns no clock: [`Typewriter::step`] performs exactly one
//! mutation and returns how long the caller should wait before stepping
//! again.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Rejected typewriter configuration. Raised at construction, never while
/// stepping.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("phrase list is empty")]
    EmptyPhrases,
    #[error("phrase {index} is empty")]
    EmptyPhrase { index: usize },
    #[error("{name} must be greater than zero")]
    NonPositiveDelay { name: &'static str },
}

/// Phrases and pacing for the hero heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypewriterConfig {
    #[serde(default = "default_phrases")]
    pub phrases: Vec<String>,
    /// Delay between successive append or remove steps.
    #[serde(default = "default_typing_delay")]
    pub typing_delay_ms: u64,
    /// Delay before the very first step.
    #[serde(default = "default_start_typing_delay")]
    pub start_typing_delay_ms: u64,
    /// Pause on a fully typed phrase before deleting starts.
    #[serde(default = "default_hold_delay")]
    pub hold_delay_ms: u64,
    /// Pause on an empty heading before the next phrase starts.
    #[serde(default = "default_loop_pause")]
    pub loop_pause_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: default_phrases(),
            typing_delay_ms: default_typing_delay(),
            start_typing_delay_ms: default_start_typing_delay(),
            hold_delay_ms: default_hold_delay(),
            loop_pause_ms: default_loop_pause(),
        }
    }
}

impl TypewriterConfig {
    pub fn with_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.phrases.is_empty() {
            return Err(ConfigError::EmptyPhrases);
        }
        if let Some(index) = self.phrases.iter().position(|p| p.is_empty()) {
            return Err(ConfigError::EmptyPhrase { index });
        }
        let delays = [
            ("typing_delay_ms", self.typing_delay_ms),
            ("start_typing_delay_ms", self.start_typing_delay_ms),
            ("hold_delay_ms", self.hold_delay_ms),
            ("loop_pause_ms", self.loop_pause_ms),
        ];
        for (name, value) in delays {
            if value == 0 {
                return Err(ConfigError::NonPositiveDelay { name });
            }
        }
        Ok(())
    }
}

fn default_phrases() -> Vec<String> {
    vec![
        "Backend Engineer".into(),
        "AWS Cloud Architect".into(),
        "API Integration Specialist".into(),
        "ML/AI Developer".into(),
    ]
}
fn default_typing_delay() -> u64 {
    50
}
fn default_start_typing_delay() -> u64 {
    100
}
fn default_hold_delay() -> u64 {
    2000
}
fn default_loop_pause() -> u64 {
    1000
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Typing,
    Deleting,
}

/// Snapshot handed to the renderer after each step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub phrase_index: usize,
    pub mode: Mode,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    displayed: String,
    // Length of `displayed` in chars, so appends never split a code point.
    shown: usize,
    mode: Mode,
    next_delay: Duration,
    typing_delay: Duration,
    hold_delay: Duration,
    loop_pause: Duration,
}

impl Typewriter {
    pub fn new(config: TypewriterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            phrases: config.phrases,
            phrase_index: 0,
            displayed: String::new(),
            shown: 0,
            mode: Mode::Typing,
            next_delay: Duration::from_millis(config.start_typing_delay_ms),
            typing_delay: Duration::from_millis(config.typing_delay_ms),
            hold_delay: Duration::from_millis(config.hold_delay_ms),
            loop_pause: Duration::from_millis(config.loop_pause_ms),
        })
    }

    /// Advance by exactly one mutation and return the delay to wait before
    /// the next call.
    pub fn step(&mut self) -> Duration {
        let target_len = self.target().chars().count();

        self.next_delay = match self.mode {
            Mode::Typing if self.shown < target_len => {
                self.append_next();
                if self.shown == target_len {
                    self.hold_delay
                } else {
                    self.typing_delay
                }
            }
            Mode::Typing => {
                // Fully typed and the hold has elapsed: start deleting.
                self.mode = Mode::Deleting;
                self.remove_last()
            }
            Mode::Deleting => self.remove_last(),
        };
        self.next_delay
    }

    fn append_next(&mut self) {
        if let Some(c) = self.phrases[self.phrase_index].chars().nth(self.shown) {
            self.displayed.push(c);
            self.shown += 1;
        }
    }

    fn remove_last(&mut self) -> Duration {
        if self.displayed.pop().is_some() {
            self.shown -= 1;
        }
        if self.shown == 0 {
            self.mode = Mode::Typing;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            self.loop_pause
        } else {
            self.typing_delay
        }
    }

    pub fn text(&self) -> &str {
        &self.displayed
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Delay requested before the next [`step`](Self::step).
    pub fn next_delay(&self) -> Duration {
        self.next_delay
    }

    pub fn target(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn frame(&self) -> Frame {
        Frame {
            text: self.displayed.clone(),
            phrase_index: self.phrase_index,
            mode: self.mode,
        }
    }
}
