use std::time::Duration;

/// Blinking caret drawn after the hero heading.
///
/// Runs on its own fixed period and is never coupled to the typewriter.
/// One period is a full on/off cycle, so the caret flips every half period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaretBlink {
    visible: bool,
    period: Duration,
}

impl CaretBlink {
    pub fn new(period: Duration) -> Self {
        Self {
            visible: true,
            period,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn half_period(&self) -> Duration {
        (self.period / 2).max(Duration::from_millis(1))
    }

    pub fn reset(&mut self) {
        self.visible = true;
    }
}

impl Default for CaretBlink {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_reset() {
        let mut caret = CaretBlink::default();
        assert!(caret.visible());
        assert!(!caret.toggle());
        assert!(caret.toggle());
        caret.toggle();
        caret.reset();
        assert!(caret.visible());
    }

    #[test]
    fn test_half_period() {
        assert_eq!(CaretBlink::default().half_period(), Duration::from_millis(500));
        assert_eq!(
            CaretBlink::new(Duration::from_millis(1)).half_period(),
            Duration::from_millis(1)
        );
    }
}
