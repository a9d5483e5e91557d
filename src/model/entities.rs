use bevy::prelude::*;

use super::ModelConfig;

/// Scale and offset applied to the model root for one viewport tier.
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct ResponsiveSettings {
    /// Uniform scale of the model.
    pub scale: f32,
    /// Translation of the model root.
    pub position: Vec3,
}

impl ResponsiveSettings {
    /// Applies these settings to the model root transform.
    pub fn apply(&self, transform: &mut Transform) {
        transform.scale = Vec3::splat(self.scale);
        transform.translation = self.position;
    }
}

/// Viewport size class, resolved from the logical window width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
pub enum ViewportTier {
    /// Narrower than the tablet breakpoint.
    Mobile,
    /// From the tablet breakpoint up to the desktop one.
    Tablet,
    /// At or beyond the desktop breakpoint.
    Desktop,
}

impl ViewportTier {
    /// Tier for `width`. Each breakpoint belongs to the larger tier.
    pub fn for_width(width: f32, cfg: &ModelConfig) -> Self {
        if width < cfg.tablet_min_width {
            Self::Mobile
        } else if width < cfg.desktop_min_width {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Settings configured for this tier.
    pub fn settings(self, cfg: &ModelConfig) -> ResponsiveSettings {
        match self {
            Self::Mobile => cfg.mobile,
            Self::Tablet => cfg.tablet,
            Self::Desktop => cfg.desktop,
        }
    }
}

/// Process-wide handle to the preloaded computer scene. Inserted once at
/// startup and never removed, so remounts reuse the loaded asset.
#[derive(Resource)]
pub struct ModelCache {
    /// First scene of the glTF file.
    pub scene: Handle<Scene>,
}

/// Root of the spawned computer model.
#[derive(Component, Reflect)]
pub struct PcModel;

/// Marks the mesh whose material is the computer screen. The panel is
/// projected onto it.
#[derive(Component, Reflect)]
pub struct ScreenSurface;
