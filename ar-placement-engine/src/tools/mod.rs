//! Interactive session tooling on top of the placement core.
//!
//! ## Session & placement flow
//!
//! ```text
//! Host button / Enter key / RPC
//!   └─> SessionControlEvent
//!       └─> handle_session_control_events()
//!           ├─> OnEnter(InSession): reset placement, announce session
//!           └─> OnExit(InSession):  cancel hit-test source, hide visuals
//!
//! Tap / click / RPC place_request
//!   └─> PlaceRequestEvent
//!       └─> handle_place_requests()
//!           ├─> commit: freeze transform, show model, hide reticle
//!           └─> reject: typed reason back over the bridge
//! ```
//!
//! Placement intent and session intent are deliberately separate events:
//! a session can end at any time, while placement commits at most once.

/// The per-tick placement pipeline plus placement/gesture intents.
pub mod model_placement;

/// Session lifecycle events, keyboard shortcuts and teardown.
pub mod session;
