//! Scripted showcase camera.
//!
//! Spirals in from far out to a close framing of the computer over the
//! intro, always aimed at the origin. User input never moves it.

mod entities;
mod systems;

pub use entities::ShowcaseCamera;

use bevy::prelude::*;

use crate::intro::IntroSet;

/// Per-plugin configuration for the camera path and lens.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct CameraConfig {
    /// Orbit radius at the start of the intro.
    pub start_radius: f32,
    /// Orbit radius once the intro has finished.
    pub end_radius: f32,
    /// Eye height at the start of the intro.
    pub start_height: f32,
    /// Eye height once the intro has finished.
    pub end_height: f32,
    /// Full turns around the target over the intro.
    pub revolutions: f32,
    /// Point the camera always faces.
    pub look_at: Vec3,
    /// Nominal vertical field of view (degrees).
    pub fov_degrees: f32,
    /// Optical zoom applied on top of `fov_degrees`.
    pub zoom: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_radius: 300.0,
            end_radius: 100.0,
            start_height: 60.0,
            end_height: 20.0,
            revolutions: 1.0,
            look_at: Vec3::ZERO,
            fov_degrees: 20.0,
            zoom: 5.0,
        }
    }
}

/// Camera spawning and the per-frame intro path.
pub struct CameraPlugin(pub CameraConfig);

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CameraConfig>()
            .register_type::<ShowcaseCamera>()
            .insert_resource(self.0.clone())
            .add_systems(Startup, systems::spawn_camera)
            .add_systems(Update, systems::drive_camera.after(IntroSet::Clock));
    }
}
