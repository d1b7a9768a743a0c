//! Surface detection and one-shot model placement core.
//!
//! Everything that decides *when* the reticle is shown, *where* it sits and
//! *whether* a placement request commits lives here, free of any rendering or
//! host concerns so it can be driven tick-by-tick from tests.
//!
//! ## Per-tick data flow
//!
//! ```text
//! SensorFrame (viewer pose + raw hits, rewritten every tick)
//!   └─> SurfaceTracker::update()        first hit → TrackedSurface
//!       └─> PlacementStateMachine       Searching{surface} → Placed{pose}
//!           └─> feedback::classify()    distance to origin → FeedbackCode
//!               └─> reticle visibility / tint, RPC notifications
//! ```
//!
//! The state machine is the single commit point of the whole application:
//! exactly one `request_placement` call may ever succeed per session, gated
//! on a visible surface and a loaded model. Once `Placed`, the tracker and
//! feedback stages are skipped and the frozen transform is handed to the
//! renderer each tick.
//!
//! Tracking loss and empty hit-test lists are ordinary values here
//! (`TrackedSurface::NotFound`), never errors; only placement requests can
//! be rejected, and those come back as typed [`PlacementRejection`] reasons.

/// Raw sensing input: surface poses and the per-tick sensor snapshot.
pub mod hit_test;

/// Converts raw per-frame hit-test output into a tracked surface sample.
pub mod surface_tracker;

/// The Searching → Placed state machine and its rejection reasons.
pub mod state_machine;

/// Pure distance-based feedback classification and reticle tints.
pub mod feedback;

pub use feedback::{FeedbackCode, classify};
pub use hit_test::{RawHit, SensorFrame, SurfacePose};
pub use state_machine::{PlacementRejection, PlacementState, PlacementStateMachine};
pub use surface_tracker::{SurfaceTracker, TrackedSurface};
