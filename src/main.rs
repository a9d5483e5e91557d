#![warn(missing_docs)]
//! Portfolio showcase: a 3D computer model with a scripted camera intro.
//!
//! The camera spirals in toward the model, then the resume panel fades in
//! on the model's screen once the intro has settled and the asset is loaded.

mod camera;
mod intro;
pub mod math;
mod model;
mod panel;
mod scene;

use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

/// Application-wide state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum SiteState {
    /// Normal viewing.
    #[default]
    Viewing,
    /// World inspector shown (Tab to toggle).
    Debugging,
}

/// Command-line overrides for native builds.
#[cfg(feature = "native")]
#[derive(clap::Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Asset path of the computer model (relative to `assets/`).
    #[arg(long)]
    model: Option<String>,
    /// Length of the camera intro in seconds.
    #[arg(long, value_parser = parse_secs)]
    intro_secs: Option<f32>,
}

/// Accepts finite, non-negative seconds that fit in a `Duration`.
#[cfg(feature = "native")]
fn parse_secs(arg: &str) -> Result<f32, String> {
    let secs: f32 = arg.parse().map_err(|e| format!("{e}"))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(format!("expected a finite, non-negative number of seconds, got {arg}"));
    }
    std::time::Duration::try_from_secs_f32(secs).map_err(|e| format!("{e}"))?;
    Ok(secs)
}

#[cfg(feature = "native")]
fn configs() -> (model::ModelConfig, intro::IntroConfig) {
    use clap::Parser;

    let cli = Cli::parse();
    let mut model_cfg = model::ModelConfig::default();
    let mut intro_cfg = intro::IntroConfig::default();
    if let Some(path) = cli.model {
        model_cfg.asset_path = path;
    }
    if let Some(secs) = cli.intro_secs {
        intro_cfg.animation_secs = secs;
    }
    (model_cfg, intro_cfg)
}

#[cfg(not(feature = "native"))]
fn configs() -> (model::ModelConfig, intro::IntroConfig) {
    Default::default()
}

fn main() {
    let (model_cfg, intro_cfg) = configs();
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Amirali BG".into(),
            fit_canvas_to_parent: true,
            ..default()
        }),
        ..default()
    }))
    .register_type::<SiteState>()
    .init_state::<SiteState>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(intro::IntroPlugin(intro_cfg))
    .add_plugins(camera::CameraPlugin(camera::CameraConfig::default()))
    .add_plugins(model::ModelPlugin(model_cfg))
    .add_plugins(scene::ScenePlugin(scene::SceneConfig::default()))
    .add_plugins(panel::PanelPlugin(panel::PanelConfig::default()))
    .add_systems(Update, toggle_inspector)
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(SiteState::Debugging)));

    #[cfg(feature = "native")]
    {
        use bevy::remote::{RemotePlugin, http::RemoteHttpPlugin};

        app.add_plugins(RemotePlugin::default())
            .add_plugins(RemoteHttpPlugin::default())
            .add_systems(Update, exit_on_esc);
    }

    app.run();
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<SiteState>>,
    mut next: ResMut<NextState<SiteState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        next.set(match state.get() {
            SiteState::Viewing => SiteState::Debugging,
            SiteState::Debugging => SiteState::Viewing,
        });
    }
}

#[cfg(feature = "native")]
fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<bevy::app::AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(bevy::app::AppExit::Success);
    }
}
