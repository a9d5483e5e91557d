//! Intro sequencing: animation clock and panel reveal gate.
//!
//! The clock turns wall time into normalized progress once per frame, the
//! camera follows it (see [`crate::camera`]), and the [`RevealSequencer`]
//! waits for the intro to finish plus a short settle delay before letting
//! [`crate::panel`] show its content.

mod entities;
mod systems;

pub use entities::{AnimationCompleted, ContentReady, IntroProgress, RevealSequencer, RevealState};

use bevy::prelude::*;

use crate::math;
use entities::AnimationClock;

/// Per-plugin configuration for the intro timing.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct IntroConfig {
    /// Length of the camera intro (seconds).
    pub animation_secs: f32,
    /// Pause between the camera stopping and the panel content appearing (seconds).
    pub settle_secs: f32,
    /// Duration of the panel opacity ramp (seconds).
    pub panel_fade_secs: f32,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            animation_secs: 3.0,
            settle_secs: 0.2,
            panel_fade_secs: 0.5,
        }
    }
}

/// Ordering of the per-frame intro pipeline.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum IntroSet {
    /// Clock sampled into [`IntroProgress`].
    Clock,
    /// Completion detected, [`AnimationCompleted`] written.
    Reveal,
    /// Settle timer advanced, [`ContentReady`] written.
    Settle,
}

/// Components a scene root needs for one run of the intro.
pub fn intro_bundle(cfg: &IntroConfig) -> impl Bundle {
    (
        AnimationClock::new(math::secs_to_duration(cfg.animation_secs)),
        IntroProgress::default(),
        RevealSequencer::new(
            math::secs_to_duration(cfg.settle_secs),
            math::secs_to_duration(cfg.panel_fade_secs),
        ),
    )
}

/// Clock, completion detection and settle delay for mounted scenes.
pub struct IntroPlugin(pub IntroConfig);

impl Plugin for IntroPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<IntroConfig>()
            .register_type::<AnimationClock>()
            .register_type::<IntroProgress>()
            .register_type::<RevealSequencer>()
            .insert_resource(self.0.clone())
            .add_message::<AnimationCompleted>()
            .add_message::<ContentReady>()
            .configure_sets(
                Update,
                (IntroSet::Clock, IntroSet::Reveal, IntroSet::Settle).chain(),
            )
            .add_systems(
                Update,
                (
                    systems::tick_clock.in_set(IntroSet::Clock),
                    systems::detect_completion.in_set(IntroSet::Reveal),
                    systems::advance_settle.in_set(IntroSet::Settle),
                ),
            );
    }
}
