use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map normalized time (0.0 to 1.0) to eased progress.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Interpolates a value from `from` to `to` over `duration`.
///
/// Retargeting mid-flight starts a new segment from the current value, so
/// a sidebar that is hovered and left quickly reverses smoothly.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Tween {
    pub fn settled(value: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from: value,
            to: value,
            duration,
            elapsed: duration,
            easing,
        }
    }

    pub fn retarget(&mut self, to: f32) {
        if (to - self.to).abs() < f32::EPSILON {
            return;
        }
        self.from = self.value();
        self.to = to;
        self.elapsed = Duration::ZERO;
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    pub fn value(&self) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
        assert!(Easing::EaseInOut.apply(0.25) < 0.25);
    }

    #[test]
    fn test_tween_reaches_target() {
        let mut tween = Tween::settled(5.0, Duration::from_millis(300), Easing::EaseInOut);
        tween.retarget(22.0);
        assert_eq!(tween.value(), 5.0);
        assert!(!tween.is_done());

        tween.advance(Duration::from_millis(150));
        assert!((tween.value() - 13.5).abs() < 0.01);

        tween.advance(Duration::from_millis(400));
        assert!(tween.is_done());
        assert_eq!(tween.value(), 22.0);
    }

    #[test]
    fn test_retarget_midway_starts_from_current_value() {
        let mut tween = Tween::settled(0.0, Duration::from_millis(100), Easing::Linear);
        tween.retarget(10.0);
        tween.advance(Duration::from_millis(50));
        tween.retarget(0.0);
        assert!((tween.value() - 5.0).abs() < 0.01);
        tween.advance(Duration::from_millis(100));
        assert_eq!(tween.value(), 0.0);
    }
}
