/// Session configuration JSON, resolved relative to the asset root.
pub const SESSION_CONFIG_PATH: &str = "session_config.json";

/// Fallback model path used when the session config omits one.
pub const DEFAULT_MODEL_PATH: &str = "model.glb";
