//! Resume panel shown on the computer screen.
//!
//! Drawn with egui in screen space, positioned by projecting the screen
//! mesh through the showcase camera. Sections are navigated with the tab
//! buttons, the dot indicators, horizontal swipes or the arrow keys.

mod entities;
mod systems;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::intro::IntroSet;
use entities::{PanelNav, ResumeContent};

/// Per-plugin configuration for the panel layout and placement.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct PanelConfig {
    /// Layout size in points at unit zoom.
    pub layout_size: Vec2,
    /// Panel offset from the screen mesh origin, in mesh space.
    pub local_offset: Vec3,
    /// Panel rotation relative to the screen mesh (XYZ Euler, radians).
    pub local_rotation: Vec3,
    /// Uniform scale of the panel in mesh space.
    pub world_scale: f32,
    /// Layout points per world unit before `world_scale`.
    pub points_per_world_unit: f32,
    /// Horizontal drag (points) needed to change section.
    pub swipe_threshold: f32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            layout_size: Vec2::new(530.0, 450.0),
            local_offset: Vec3::new(0.03, 0.0, 0.0),
            local_rotation: Vec3::new(0.0, -1.57, 0.0),
            world_scale: 0.133,
            points_per_world_unit: 40.0,
            swipe_threshold: 50.0,
        }
    }
}

/// Resume content, navigation and screen-space drawing.
pub struct PanelPlugin(pub PanelConfig);

impl Plugin for PanelPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<PanelConfig>()
            .insert_resource(self.0.clone())
            .init_resource::<ResumeContent>()
            .init_resource::<PanelNav>()
            .add_systems(
                Update,
                (
                    systems::reset_on_content_ready.after(IntroSet::Settle),
                    systems::keyboard_navigation,
                ),
            )
            .add_systems(EguiPrimaryContextPass, systems::draw_panel);
    }
}
