use std::time::Duration;

use bevy::prelude::*;

use crate::math;

/// Root of one scene mount. Owns the intro state, the fade and the model;
/// despawning it tears all of them down.
#[derive(Component, Reflect)]
pub struct PortfolioScene;

/// Whole-scene fade-in, independent of the intro sequencer.
#[derive(Component, Debug, Reflect)]
pub struct SceneFade {
    delay: Timer,
    ramp: Timer,
}

impl SceneFade {
    /// Waits `delay`, then ramps opacity from 0 to 1 over `duration`.
    pub fn new(delay: Duration, duration: Duration) -> Self {
        Self {
            delay: Timer::new(delay, TimerMode::Once),
            ramp: Timer::new(duration, TimerMode::Once),
        }
    }

    /// Advances the fade by `delta`.
    pub fn tick(&mut self, delta: Duration) {
        if self.delay.is_finished() {
            self.ramp.tick(delta);
        } else {
            self.delay.tick(delta);
        }
    }

    /// Scene opacity in `[0, 1]`.
    pub fn opacity(&self) -> f32 {
        if !self.delay.is_finished() {
            return 0.0;
        }
        math::ease_in_out_cubic(self.ramp.fraction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn fade() -> SceneFade {
        SceneFade::new(ms(200), ms(1000))
    }

    #[test]
    fn hidden_during_delay() {
        let mut f = fade();
        f.tick(ms(199));
        assert_eq!(f.opacity(), 0.0);
    }

    #[test]
    fn ramp_starts_after_delay() {
        let mut f = fade();
        f.tick(ms(200));
        assert_eq!(f.opacity(), 0.0);
        f.tick(ms(500));
        assert!((f.opacity() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn fully_opaque_after_ramp() {
        let mut f = fade();
        f.tick(ms(200));
        f.tick(ms(1000));
        assert_eq!(f.opacity(), 1.0);
        f.tick(ms(5000));
        assert_eq!(f.opacity(), 1.0);
    }
}
