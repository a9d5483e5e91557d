use bevy::color::ColorToPacked;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::SceneConfig;
use super::entities::{PortfolioScene, SceneFade};
use crate::camera::ShowcaseCamera;
use crate::intro::{self, AnimationCompleted, IntroConfig, RevealSequencer};
use crate::math;
use crate::model::{self, ModelCache};

/// Everything a mount needs, bundled for [`mount_scene`] and [`remount_on_key`].
#[derive(SystemParam)]
pub struct MountCtx<'w, 's> {
    commands: Commands<'w, 's>,
    cfg: Res<'w, SceneConfig>,
    intro: Res<'w, IntroConfig>,
    cache: Res<'w, ModelCache>,
    cameras: Query<'w, 's, Entity, With<ShowcaseCamera>>,
}

impl MountCtx<'_, '_> {
    /// Spawns a fresh scene root with its model and lights.
    fn mount(&mut self) {
        let cfg = &self.cfg;
        if let Ok(camera) = self.cameras.single() {
            self.commands.entity(camera).insert(AmbientLight {
                color: Color::WHITE,
                brightness: cfg.ambient_intensity * cfg.ambient_unit,
                ..default()
            });
        }

        let scene = self
            .commands
            .spawn((
                Name::new("PortfolioScene"),
                PortfolioScene,
                intro::intro_bundle(&self.intro),
                SceneFade::new(
                    math::secs_to_duration(cfg.fade_delay_secs),
                    math::secs_to_duration(cfg.fade_secs),
                ),
                Transform::default(),
                Visibility::default(),
            ))
            .with_children(|parent| {
                parent.spawn(model::model_bundle(&self.cache));
                for (name, light) in [("KeyLight", &cfg.key_light), ("FillLight", &cfg.fill_light)] {
                    parent.spawn((
                        Name::new(name),
                        DirectionalLight {
                            illuminance: light.intensity * cfg.directional_unit,
                            ..default()
                        },
                        Transform::from_translation(light.position).looking_at(Vec3::ZERO, Vec3::Y),
                    ));
                }
            })
            .id();
        info!("scene mounted as {scene}");
    }
}

/// Initial mount, after the model cache exists.
pub fn mount_scene(mut ctx: MountCtx) {
    ctx.mount();
}

/// `R` tears the scene down and mounts a fresh one, replaying the intro.
pub fn remount_on_key(
    keys: Res<ButtonInput<KeyCode>>,
    scenes: Query<Entity, With<PortfolioScene>>,
    mut ctx: MountCtx,
) {
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }
    for scene in &scenes {
        ctx.commands.entity(scene).despawn();
    }
    info!("replaying intro");
    ctx.mount();
}

/// Receives the completion notification and asks for the panel to mount.
pub fn show_screen_on_completion(
    mut completed: MessageReader<AnimationCompleted>,
    mut scenes: Query<&mut RevealSequencer, With<PortfolioScene>>,
) {
    for msg in completed.read() {
        let Ok(mut sequencer) = scenes.get_mut(msg.scene) else {
            continue;
        };
        sequencer.on_animation_complete_notified();
        info!("camera animation complete, showing screen content");
    }
}

/// Advances the scene fade-in.
pub fn tick_fade(time: Res<Time>, mut fades: Query<&mut SceneFade>) {
    for mut fade in &mut fades {
        fade.tick(time.delta());
    }
}

/// Paints the clear color over the viewport with the inverse of the scene
/// opacity.
pub fn draw_fade_veil(
    mut contexts: EguiContexts,
    clear: Res<ClearColor>,
    fades: Query<&SceneFade>,
) {
    let Ok(fade) = fades.single() else { return };
    let alpha = 1.0 - fade.opacity();
    if alpha <= 0.0 {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let [r, g, b, _] = clear.0.to_srgba().to_u8_array();
    let veil = egui::Color32::from_rgba_unmultiplied(r, g, b, (alpha * 255.0).round() as u8);
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("scene_fade"),
    ));
    painter.rect_filled(ctx.screen_rect(), egui::CornerRadius::ZERO, veil);
}
