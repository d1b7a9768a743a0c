//! Asset handles and configuration for the placeable model.

/// Model scene handle, readiness flag and the one-time recentering offset.
pub mod model_assets;

/// Per-deployment session configuration loaded from JSON.
pub mod session_config;
