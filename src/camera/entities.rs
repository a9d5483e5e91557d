use std::f32::consts::TAU;

use bevy::math::FloatExt;
use bevy::prelude::*;

use super::CameraConfig;
use crate::math;

/// Marker component for the scripted showcase camera.
#[derive(Component, Reflect)]
pub struct ShowcaseCamera;

/// Camera placement for one instant of the intro.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// World-space eye position.
    pub position: Vec3,
    /// Point the camera faces.
    pub look_at: Vec3,
}

impl CameraPose {
    /// Spiral pose at `progress` in `[0, 1]`.
    ///
    /// Radius and height follow the eased progress; the orbit angle follows
    /// the linear one, so the spin rate stays constant while the zoom slows.
    pub fn at(progress: f32, cfg: &CameraConfig) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        let eased = math::ease_out_cubic(progress);
        let radius = cfg.start_radius.lerp(cfg.end_radius, eased);
        let height = cfg.start_height.lerp(cfg.end_height, eased);
        let angle = progress * TAU * cfg.revolutions;
        Self {
            position: Vec3::new(-angle.cos() * radius, height, angle.sin() * radius),
            look_at: cfg.look_at,
        }
    }

    /// Transform placing a camera at this pose.
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).looking_at(self.look_at, Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-3, "{a} != {b}");
    }

    #[test]
    fn pose_starts_far_out() {
        let pose = CameraPose::at(0.0, &CameraConfig::default());
        assert_close(pose.position, Vec3::new(-300.0, 60.0, 0.0));
        assert_eq!(pose.look_at, Vec3::ZERO);
    }

    #[test]
    fn pose_ends_after_one_revolution() {
        let pose = CameraPose::at(1.0, &CameraConfig::default());
        assert_close(pose.position, Vec3::new(-100.0, 20.0, 0.0));
        assert_eq!(pose.look_at, Vec3::ZERO);
    }

    #[test]
    fn spin_uses_linear_progress() {
        let cfg = CameraConfig::default();
        // Quarter of the way through: angle is π/2, so x ≈ 0 and z carries
        // the eased radius.
        let pose = CameraPose::at(0.25, &cfg);
        let radius = 300f32.lerp(100.0, math::ease_out_cubic(0.25));
        assert!(pose.position.x.abs() < 1e-3);
        assert!((pose.position.z - radius).abs() < 1e-3);
    }

    #[test]
    fn progress_beyond_one_freezes_at_endpoint() {
        let cfg = CameraConfig::default();
        assert_eq!(CameraPose::at(1.7, &cfg), CameraPose::at(1.0, &cfg));
    }

    #[test]
    fn transform_faces_origin() {
        let tf = CameraPose::at(0.4, &CameraConfig::default()).transform();
        let to_origin = (-tf.translation).normalize();
        assert!(tf.forward().dot(to_origin) > 0.9999);
    }
}
