//! Decorative background effects.

pub mod particles;
