use bevy::asset::LoadState;
use bevy::gltf::GltfMaterialName;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use super::ModelConfig;
use super::entities::{ModelCache, PcModel, ScreenSurface, ViewportTier};

/// Starts loading the computer scene and keeps its handle for the process
/// lifetime.
pub fn preload_models(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    cfg: Res<ModelConfig>,
) {
    let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(cfg.asset_path.clone()));
    commands.insert_resource(ModelCache { scene });
}

/// Logs the outcome of the model load once.
pub fn report_model_load(
    asset_server: Res<AssetServer>,
    cache: Res<ModelCache>,
    cfg: Res<ModelConfig>,
    mut reported: Local<bool>,
) {
    if *reported {
        return;
    }
    match asset_server.load_state(cache.scene.id()) {
        LoadState::Loaded => {
            *reported = true;
            info!("model {} loaded", cfg.asset_path);
        }
        LoadState::Failed(err) => {
            *reported = true;
            warn!("model {} failed to load: {err}", cfg.asset_path);
        }
        _ => {}
    }
}

/// Resolves the viewport tier for newly spawned models and on every resize.
///
/// Uses `Local<Option<ViewportTier>>` to log tier changes only.
pub fn apply_responsive_settings(
    mut resized: MessageReader<WindowResized>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cfg: Res<ModelConfig>,
    mut models: Query<(Ref<PcModel>, &mut Transform)>,
    mut last_tier: Local<Option<ViewportTier>>,
) {
    let resized = resized.read().count() > 0;
    let Ok(window) = windows.single() else {
        return;
    };
    let tier = ViewportTier::for_width(window.width(), &cfg);
    if *last_tier != Some(tier) {
        debug!("viewport {}px → {tier:?}", window.width());
        *last_tier = Some(tier);
    }
    let settings = tier.settings(&cfg);
    for (model, mut transform) in &mut models {
        if resized || model.is_added() {
            settings.apply(&mut transform);
        }
    }
}

/// Tags the scene mesh carrying the screen material once the glTF scene has
/// been instanced.
pub fn tag_screen_surface(
    mut commands: Commands,
    cfg: Res<ModelConfig>,
    meshes: Query<(Entity, &GltfMaterialName), (With<Mesh3d>, Without<ScreenSurface>)>,
) {
    for (entity, material) in &meshes {
        if material.0 == cfg.screen_material {
            info!("screen surface found on {entity}");
            commands.entity(entity).insert(ScreenSurface);
        }
    }
}
