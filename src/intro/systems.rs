use bevy::prelude::*;

use super::entities::{
    AnimationClock, AnimationCompleted, ContentReady, IntroProgress, RevealSequencer,
};

/// Samples the clock of every mounted scene into its [`IntroProgress`].
pub fn tick_clock(time: Res<Time>, mut scenes: Query<(&mut AnimationClock, &mut IntroProgress)>) {
    let now = time.elapsed();
    for (mut clock, mut progress) in &mut scenes {
        progress.0 = clock.tick(now);
    }
}

/// Moves sequencers out of `Animating` and announces the finished intro.
pub fn detect_completion(
    mut scenes: Query<(Entity, &IntroProgress, &mut RevealSequencer)>,
    mut completed: MessageWriter<AnimationCompleted>,
) {
    for (scene, progress, mut sequencer) in &mut scenes {
        if sequencer.on_frame_tick(progress.0) {
            info!("camera intro complete");
            completed.write(AnimationCompleted { scene });
        }
    }
}

/// Starts and advances the settle timer, announcing when content is ready.
///
/// A timer started this frame is not ticked until the next one, so the
/// frame delta that preceded the mount request never counts toward it.
pub fn advance_settle(
    time: Res<Time>,
    mut scenes: Query<(Entity, &mut RevealSequencer)>,
    mut ready: MessageWriter<ContentReady>,
) {
    for (scene, mut sequencer) in &mut scenes {
        if sequencer.on_panel_mount_requested() {
            continue;
        }
        if sequencer.tick(time.delta()) {
            info!("screen content ready");
            ready.write(ContentReady { scene });
        }
    }
}
