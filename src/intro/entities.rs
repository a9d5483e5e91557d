use std::time::Duration;

use bevy::prelude::*;

use crate::math;

/// Elapsed-time source for the camera intro, attached to the scene root.
///
/// The reference instant is captured on the first tick after the scene is
/// mounted and never changes afterwards, so progress can only move forward.
#[derive(Component, Debug, Reflect)]
pub struct AnimationClock {
    start: Option<Duration>,
    duration: Duration,
}

impl AnimationClock {
    /// Creates an inactive clock that runs for `duration` once ticked.
    pub fn new(duration: Duration) -> Self {
        Self {
            start: None,
            duration,
        }
    }

    /// Advances the clock to `now` and returns progress in `[0, 1]`.
    ///
    /// `now` earlier than the captured start reports `0.0`.
    pub fn tick(&mut self, now: Duration) -> f32 {
        let start = *self.start.get_or_insert(now);
        match now.checked_sub(start) {
            Some(elapsed) => math::normalized_progress(elapsed, self.duration),
            None => 0.0,
        }
    }
}

/// Latest clock reading for this mount. Read by the camera driver and the
/// reveal sequencer in the same frame.
#[derive(Component, Debug, Default, Clone, Copy, Reflect)]
pub struct IntroProgress(pub f32);

/// Gate for the embedded panel.
///
/// `Animating` → `AnimationComplete` → `Ready`, never backwards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum RevealState {
    /// Camera still moving; panel not mounted.
    #[default]
    Animating,
    /// Camera stopped; panel mounted but its content hidden.
    AnimationComplete,
    /// Settle delay elapsed; panel content fades in.
    Ready,
}

/// State machine deciding when the panel appears and how opaque it is.
///
/// Lives on the scene root, so despawning the scene drops the settle timer
/// along with everything else.
#[derive(Component, Debug, Reflect)]
pub struct RevealSequencer {
    state: RevealState,
    completed: bool,
    show_screen: bool,
    settle_delay: Duration,
    settle: Option<Timer>,
    fade: Duration,
    visible_for: Duration,
}

impl RevealSequencer {
    /// `settle_delay` separates completion from readiness; `fade` is the
    /// length of the panel opacity ramp.
    pub fn new(settle_delay: Duration, fade: Duration) -> Self {
        Self {
            state: RevealState::Animating,
            completed: false,
            show_screen: false,
            settle_delay,
            settle: None,
            fade,
            visible_for: Duration::ZERO,
        }
    }

    /// Current reveal state.
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Feeds one frame's progress. Returns `true` on the single frame where
    /// the animation is first seen as finished.
    pub fn on_frame_tick(&mut self, progress: f32) -> bool {
        if progress < 1.0 || self.completed || self.state != RevealState::Animating {
            return false;
        }
        self.completed = true;
        self.state = RevealState::AnimationComplete;
        true
    }

    /// Consumer side of the completion notification: the panel should mount.
    pub fn on_animation_complete_notified(&mut self) {
        self.show_screen = true;
    }

    /// Starts the settle timer once the panel is mounted. Returns `true` only
    /// on the call that actually started it.
    pub fn on_panel_mount_requested(&mut self) -> bool {
        if !self.show_screen || self.settle.is_some() || self.state != RevealState::AnimationComplete
        {
            return false;
        }
        self.settle = Some(Timer::new(self.settle_delay, TimerMode::Once));
        true
    }

    /// Advances the settle timer and the opacity ramp by `delta`. Returns
    /// `true` on the single tick that reaches [`RevealState::Ready`].
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.state == RevealState::Ready {
            self.visible_for = self.visible_for.saturating_add(delta);
            return false;
        }
        let Some(timer) = self.settle.as_mut() else {
            return false;
        };
        timer.tick(delta);
        if !timer.is_finished() {
            return false;
        }
        self.settle = None;
        self.state = RevealState::Ready;
        true
    }

    /// Whether the panel element should exist at all.
    pub fn show_screen(&self) -> bool {
        self.show_screen
    }

    /// Whether the panel content is visible (state is `Ready`).
    pub fn content_visible(&self) -> bool {
        self.state == RevealState::Ready
    }

    /// Panel opacity: `0` until ready, then an ease-in-out ramp to `1`.
    pub fn panel_opacity(&self) -> f32 {
        if !self.content_visible() {
            return 0.0;
        }
        math::ease_in_out_cubic(math::normalized_progress(self.visible_for, self.fade))
    }
}

/// Written once per mount when the camera intro finishes.
#[derive(Message, Debug, Clone, Copy)]
pub struct AnimationCompleted {
    /// Scene root whose intro finished.
    pub scene: Entity,
}

/// Written once per mount when the panel content becomes visible.
#[derive(Message, Debug, Clone, Copy)]
pub struct ContentReady {
    /// Scene root whose panel is now visible.
    pub scene: Entity,
}
