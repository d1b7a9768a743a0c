/// Native dev overlay (feedback line + FPS) and the FPS RPC notification.
pub mod overlay;

/// Cursor-on-ground-plane sensing simulation for native dev builds.
pub mod sensor_sim;
