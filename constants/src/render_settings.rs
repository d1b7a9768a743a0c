use bevy::prelude::Color;

/// Reticle tint while the tracked point is far enough from the tracking
/// origin to accept a placement.
pub const RETICLE_READY_COLOR: Color = Color::srgb(0.06, 1.0, 0.0);

/// Reticle tint while the tracked point is too close to the tracking origin.
pub const RETICLE_TOO_CLOSE_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

/// Flat ring indicator dimensions in tracking-space metres.
pub const RETICLE_INNER_RADIUS: f32 = 0.15;
pub const RETICLE_OUTER_RADIUS: f32 = 0.2;
pub const RETICLE_RING_RESOLUTION: u32 = 32;

/// Minimum distance from the tracking origin at which a surface point counts
/// as placeable. Overridable per session via the JSON session config.
pub const DEFAULT_MIN_PLACEMENT_DISTANCE: f32 = 1.0;
