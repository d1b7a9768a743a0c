use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use constants::paths::DEFAULT_MODEL_PATH;
use constants::render_settings::{
    DEFAULT_MIN_PLACEMENT_DISTANCE, RETICLE_INNER_RADIUS, RETICLE_OUTER_RADIUS,
};

/// Per-deployment session configuration as a Bevy asset. Mirrors the JSON
/// structure exactly; also inserted as a resource once loaded so every
/// system reads one authoritative copy.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct SessionConfig {
    /// Path of the placeable model, relative to the asset root.
    #[serde(default = "default_model_path")]
    pub model_path: String,

    /// Minimum distance from the tracking origin at which a surface point
    /// accepts a placement. Strictly-below means too close.
    #[serde(default = "default_min_placement_distance")]
    pub min_placement_distance: f32,

    #[serde(default)]
    pub reticle: ReticleSettings,
}

/// Flat ring indicator dimensions in tracking-space metres.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReticleSettings {
    #[serde(default = "default_inner_radius")]
    pub inner_radius: f32,
    #[serde(default = "default_outer_radius")]
    pub outer_radius: f32,
}

fn default_model_path() -> String {
    DEFAULT_MODEL_PATH.to_string()
}
fn default_min_placement_distance() -> f32 {
    DEFAULT_MIN_PLACEMENT_DISTANCE
}
fn default_inner_radius() -> f32 {
    RETICLE_INNER_RADIUS
}
fn default_outer_radius() -> f32 {
    RETICLE_OUTER_RADIUS
}

impl Default for ReticleSettings {
    fn default() -> Self {
        Self {
            inner_radius: RETICLE_INNER_RADIUS,
            outer_radius: RETICLE_OUTER_RADIUS,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            min_placement_distance: DEFAULT_MIN_PLACEMENT_DISTANCE,
            reticle: ReticleSettings::default(),
        }
    }
}
