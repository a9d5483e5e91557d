//! The computer model: asset preloading, responsive placement and the
//! screen surface the panel is projected onto.

mod entities;
mod systems;

pub use entities::{ModelCache, ResponsiveSettings, ScreenSurface};

use bevy::prelude::*;

use entities::PcModel;

/// Per-plugin configuration for the computer model.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct ModelConfig {
    /// Asset path of the glTF file.
    pub asset_path: String,
    /// glTF material name of the screen mesh.
    pub screen_material: String,
    /// Smallest logical width (px) treated as tablet.
    pub tablet_min_width: f32,
    /// Smallest logical width (px) treated as desktop.
    pub desktop_min_width: f32,
    /// Placement below `tablet_min_width`.
    pub mobile: ResponsiveSettings,
    /// Placement from `tablet_min_width` to `desktop_min_width`.
    pub tablet: ResponsiveSettings,
    /// Placement from `desktop_min_width` up.
    pub desktop: ResponsiveSettings,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            asset_path: "models/zombie_computer.glb".into(),
            screen_material: "computer_screen".into(),
            tablet_min_width: 768.0,
            desktop_min_width: 1024.0,
            mobile: ResponsiveSettings {
                scale: 0.7,
                position: Vec3::new(0.0, -1.5, 0.0),
            },
            tablet: ResponsiveSettings {
                scale: 0.7,
                position: Vec3::new(0.0, -2.0, 0.0),
            },
            desktop: ResponsiveSettings {
                scale: 0.95,
                position: Vec3::new(0.0, -2.5, 0.0),
            },
        }
    }
}

/// Model root for a scene mount. Placement is resolved on the first frame.
pub fn model_bundle(cache: &ModelCache) -> impl Bundle {
    (
        Name::new("PcModel"),
        PcModel,
        SceneRoot(cache.scene.clone()),
        Transform::default(),
    )
}

/// Preloads the model and keeps its placement in step with the viewport.
pub struct ModelPlugin(pub ModelConfig);

impl Plugin for ModelPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ModelConfig>()
            .register_type::<PcModel>()
            .register_type::<ScreenSurface>()
            .insert_resource(self.0.clone())
            .add_systems(Startup, systems::preload_models)
            .add_systems(
                Update,
                (
                    systems::apply_responsive_settings,
                    systems::tag_screen_surface,
                    systems::report_model_load,
                ),
            );
    }
}
