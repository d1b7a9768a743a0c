/// Reticle geometry, feedback tints and placement defaults.
pub mod render_settings;

/// Asset paths shared between the engine and the host page tooling.
pub mod paths;
