//! End-to-end placement flow tests.
//!
//! These drive the tracker, state machine and feedback policy through
//! simulated tick sequences exactly the way the frame loop does, without
//! spinning up a renderer.

use ar_placement_engine::{
    FeedbackCode, PlacementRejection, RawHit, SensorFrame, SurfacePose, SurfaceTracker,
    TrackedSurface, classify,
};
use ar_placement_engine::PlacementStateMachine;
use bevy::math::{Quat, Vec3};

const MIN_PLACEMENT_DISTANCE: f32 = 1.0;

fn hit_at_distance(d: f32) -> RawHit {
    RawHit::at(SurfacePose::new(Vec3::new(0.0, 0.0, -d), Quat::IDENTITY))
}

/// One frame-loop tick while searching: track, observe, classify.
fn tick(
    tracker: &mut SurfaceTracker,
    machine: &mut PlacementStateMachine,
    hits: &[RawHit],
    asset_ready: bool,
) -> FeedbackCode {
    let tracked = tracker.update(hits);
    machine.observe_surface(tracked);
    classify(machine.surface(), asset_ready, MIN_PLACEMENT_DISTANCE)
}

// ============================================================================
// Searching behaviour
// ============================================================================

#[test]
fn ten_empty_ticks_keep_searching_with_hidden_indicator() {
    let mut tracker = SurfaceTracker::default();
    let mut machine = PlacementStateMachine::new();

    for _ in 0..10 {
        let feedback = tick(&mut tracker, &mut machine, &[], true);

        assert_eq!(feedback, FeedbackCode::None);
        assert!(!machine.surface().is_visible());
        assert!(!machine.is_placed());
    }

    assert!(machine.current_transform().is_none());
}

#[test]
fn tracking_loss_is_absorbed_as_empty_hits() {
    let mut tracker = SurfaceTracker::default();
    let mut machine = PlacementStateMachine::new();

    // A frame with hits but no viewer pose must read as "no surface".
    let frame = SensorFrame {
        viewer_pose: None,
        hits: vec![hit_at_distance(2.0)],
    };
    let feedback = tick(&mut tracker, &mut machine, frame.usable_hits(), true);

    assert_eq!(feedback, FeedbackCode::None);
    assert!(!machine.surface().is_visible());
}

// ============================================================================
// Proximity feedback and the commit
// ============================================================================

#[test]
fn too_close_then_ready_then_commit_at_the_far_pose() {
    let mut tracker = SurfaceTracker::default();
    let mut machine = PlacementStateMachine::new();

    let feedback = tick(&mut tracker, &mut machine, &[hit_at_distance(0.5)], true);
    assert_eq!(feedback, FeedbackCode::TooClose);

    let far = hit_at_distance(2.0);
    let feedback = tick(&mut tracker, &mut machine, &[far], true);
    assert_eq!(feedback, FeedbackCode::ReadyToPlace);

    let committed = machine.request_placement(true).unwrap();

    assert_eq!(committed, far.pose);
    assert!(machine.is_placed());
    assert_eq!(machine.current_transform(), Some(far.pose));
}

#[test]
fn placement_rejected_while_model_loads() {
    let mut tracker = SurfaceTracker::default();
    let mut machine = PlacementStateMachine::new();

    let feedback = tick(&mut tracker, &mut machine, &[hit_at_distance(2.0)], false);
    assert_eq!(feedback, FeedbackCode::StillLoading);
    assert!(machine.surface().is_visible());

    assert_eq!(
        machine.request_placement(false),
        Err(PlacementRejection::AssetNotReady)
    );
    assert!(!machine.is_placed());

    // The model finishes loading; the very next tick recovers on its own.
    let feedback = tick(&mut tracker, &mut machine, &[hit_at_distance(2.0)], true);
    assert_eq!(feedback, FeedbackCode::ReadyToPlace);
    assert!(machine.request_placement(true).is_ok());
}

#[test]
fn second_placement_is_rejected_and_transform_untouched() {
    let mut tracker = SurfaceTracker::default();
    let mut machine = PlacementStateMachine::new();

    let first = hit_at_distance(2.0);
    tick(&mut tracker, &mut machine, &[first], true);
    machine.request_placement(true).unwrap();

    // Keep feeding fresh surfaces; the frozen transform must not move.
    let elsewhere = hit_at_distance(3.0);
    machine.observe_surface(TrackedSurface::Found(elsewhere.pose));

    assert_eq!(
        machine.request_placement(true),
        Err(PlacementRejection::AlreadyPlaced)
    );
    assert_eq!(machine.current_transform(), Some(first.pose));
}

// ============================================================================
// Full session shape
// ============================================================================

#[test]
fn session_walkthrough_search_place_freeze() {
    let mut tracker = SurfaceTracker::default();
    let mut machine = PlacementStateMachine::new();

    // Sweep the room: nothing for a while.
    for _ in 0..5 {
        assert_eq!(
            tick(&mut tracker, &mut machine, &[], true),
            FeedbackCode::None
        );
    }

    // Surface found, drifting away from the origin tick by tick.
    for step in 0..8 {
        let d = 0.4 + step as f32 * 0.3;
        let expected = if d < MIN_PLACEMENT_DISTANCE {
            FeedbackCode::TooClose
        } else {
            FeedbackCode::ReadyToPlace
        };
        assert_eq!(
            tick(&mut tracker, &mut machine, &[hit_at_distance(d)], true),
            expected
        );
    }

    let committed = machine.request_placement(true).unwrap();
    assert!(committed.distance_to_origin() >= MIN_PLACEMENT_DISTANCE);

    // Post-placement ticks skip tracking; the pose stays frozen even if the
    // sensing layer keeps reporting surfaces.
    for _ in 0..5 {
        if !machine.is_placed() {
            tick(&mut tracker, &mut machine, &[hit_at_distance(9.0)], true);
        }
        assert_eq!(machine.current_transform(), Some(committed));
    }
}
