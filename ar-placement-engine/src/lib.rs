//! Browser-targeted AR surface placement engine.
//!
//! Detects horizontal surfaces through a host-provided hit-test source,
//! shows a tracking reticle, and commits a single model placement per
//! session with distance-based feedback. Runs natively with a simulated
//! sensing layer for development and on `wasm32` behind a WebXR host page.

/// Application lifecycle, asset loading, scene entities, camera, overlays.
pub mod engine;

/// The placement core: tracker, state machine, feedback. Pure and
/// host-agnostic; everything else is plumbing around it.
pub mod placement;

/// JSON-RPC bridge to the WebXR host page.
pub mod rpc;

/// Session control and placement intent systems.
pub mod tools;

// Main entry points: the core types tests and hosts drive directly.
pub use crate::placement::{
    FeedbackCode, PlacementRejection, PlacementState, PlacementStateMachine, RawHit, SensorFrame,
    SurfacePose, SurfaceTracker, TrackedSurface, classify,
};
