//! Timed effects: the hero typewriter, the caret blink, eased transitions,
//! and the cancellable timers that drive them.

pub mod caret;
pub mod hero;
pub mod scheduler;
pub mod tween;
pub mod typewriter;
