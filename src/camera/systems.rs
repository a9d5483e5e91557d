use bevy::prelude::*;

use super::CameraConfig;
use super::entities::{CameraPose, ShowcaseCamera};
use crate::intro::IntroProgress;
use crate::math;

/// Spawns the Camera3d at the start of the intro path.
pub fn spawn_camera(mut commands: Commands, cfg: Res<CameraConfig>) {
    commands.spawn((
        Name::new("ShowcaseCamera"),
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: math::effective_fov(cfg.fov_degrees, cfg.zoom),
            ..default()
        }),
        CameraPose::at(0.0, &cfg).transform(),
        ShowcaseCamera,
    ));
}

/// Writes the pose for the current intro progress into the camera.
///
/// Runs every frame, including after the intro has finished, so the camera
/// holds the endpoint pose. Nothing else writes this transform.
pub fn drive_camera(
    cfg: Res<CameraConfig>,
    scenes: Query<&IntroProgress>,
    mut camera_q: Query<&mut Transform, With<ShowcaseCamera>>,
) {
    let Ok(progress) = scenes.single() else {
        return;
    };
    let Ok(mut transform) = camera_q.single_mut() else {
        return;
    };
    *transform = CameraPose::at(progress.0, &cfg).transform();
}
