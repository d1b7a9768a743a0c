//! Asset loading and initialisation systems.
//!
//! Manages the loading pipeline from session config parsing through model
//! loading to the one-time recentering pass, with progress tracking.

/// Session config loading; spawns the reticle and model template once the
/// JSON is in and kicks off the model load.
pub mod config_loader;

/// Model scene load-state monitoring and bounding-box recentering.
pub mod model_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
