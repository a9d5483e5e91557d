//! Scene composition root.
//!
//! Mounts the [`PortfolioScene`] root that owns one run of the intro, the
//! model and its lights, fades the whole scene in shortly after mount, and
//! forwards the intro's completion notification to the reveal sequencer.
//! Press `R` to unmount and mount again.

mod entities;
mod systems;

pub use entities::PortfolioScene;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::intro::IntroSet;
use entities::SceneFade;

/// A directional light aimed at the origin.
#[derive(Clone, Debug, Reflect)]
pub struct DirectionalLightSettings {
    /// World position; the light points from here to the origin.
    pub position: Vec3,
    /// Relative intensity, multiplied by [`SceneConfig::directional_unit`].
    pub intensity: f32,
}

/// Per-plugin configuration for scene composition.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct SceneConfig {
    /// Background clear color, also used for the fade veil.
    pub clear_color: Color,
    /// Wait after mount before the fade-in starts (seconds).
    pub fade_delay_secs: f32,
    /// Length of the fade-in (seconds).
    pub fade_secs: f32,
    /// Relative ambient intensity.
    pub ambient_intensity: f32,
    /// Ambient brightness (cd/m²) per unit of relative intensity.
    pub ambient_unit: f32,
    /// Illuminance (lux) per unit of relative directional intensity.
    pub directional_unit: f32,
    /// Main light, above and in front.
    pub key_light: DirectionalLightSettings,
    /// Weaker light from the opposite side.
    pub fill_light: DirectionalLightSettings,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            clear_color: Color::srgb_u8(0x0b, 0x0b, 0x0d),
            fade_delay_secs: 0.2,
            fade_secs: 1.0,
            ambient_intensity: 0.8,
            ambient_unit: 500.0,
            directional_unit: 4000.0,
            key_light: DirectionalLightSettings {
                position: Vec3::new(5.0, 10.0, 5.0),
                intensity: 1.0,
            },
            fill_light: DirectionalLightSettings {
                position: Vec3::new(-5.0, 5.0, -5.0),
                intensity: 0.5,
            },
        }
    }
}

/// Mounting, lighting and fade-in of the portfolio scene.
pub struct ScenePlugin(pub SceneConfig);

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SceneConfig>()
            .register_type::<PortfolioScene>()
            .register_type::<SceneFade>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.clear_color))
            .add_systems(PostStartup, systems::mount_scene)
            .add_systems(
                Update,
                (
                    systems::remount_on_key.before(IntroSet::Clock),
                    systems::show_screen_on_completion
                        .after(IntroSet::Reveal)
                        .before(IntroSet::Settle),
                    systems::tick_fade,
                ),
            )
            .add_systems(EguiPrimaryContextPass, systems::draw_fade_veil);
    }
}
