use bevy::prelude::*;

use crate::engine::assets::model_assets::ModelAssets;
use crate::engine::assets::session_config::SessionConfig;
use crate::engine::scene::placed_model::PlacedModel;
use crate::placement::{
    FeedbackCode, PlacementStateMachine, RawHit, SensorFrame, SurfacePose, SurfaceTracker,
    classify,
};
use crate::rpc::web_rpc::WebRpcInterface;

/// Single owner of the session's placement logic: tracker, state machine
/// and the last feedback code shown. Reset whenever a session begins.
#[derive(Resource, Default)]
pub struct PlacementSession {
    pub tracker: SurfaceTracker,
    pub machine: PlacementStateMachine,
    pub feedback: FeedbackCode,
}

impl PlacementSession {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Source of a placement request for debugging and conditional logic.
#[derive(Debug, Clone, Copy)]
pub enum PlacementRequestSource {
    Rpc,
    Pointer,
}

/// Event fired when the user asks to place the model at the reticle.
#[derive(Event)]
pub struct PlaceRequestEvent {
    pub source: PlacementRequestSource,
}

/// One sensing snapshot forwarded by the host page over the RPC bridge.
#[derive(Event)]
pub struct SensorFrameEvent {
    pub viewer_pose: Option<SurfacePose>,
    pub hits: Vec<RawHit>,
}

/// Touch/drag input arriving after a model was placed. Currently an
/// explicit extension point, see [`on_post_placement_gesture`].
#[derive(Event)]
pub struct PostPlacementGestureEvent {
    pub delta: Vec2,
}

// Fold bridged sensor frames into the per-tick snapshot. Frames can arrive
// faster than we tick; the latest one wins. No frame this tick keeps the
// previous snapshot, a tracking gap is signalled explicitly by a frame
// without a viewer pose.
pub fn ingest_sensor_frame(
    mut events: EventReader<SensorFrameEvent>,
    mut frame: ResMut<SensorFrame>,
) {
    if let Some(event) = events.read().last() {
        frame.viewer_pose = event.viewer_pose;
        frame.hits.clone_from(&event.hits);
    }
}

// Per-tick tracking stage. Skipped entirely once placed; the committed
// transform no longer consults the sensing layer.
pub fn track_surface(mut session: ResMut<PlacementSession>, frame: Res<SensorFrame>) {
    if session.machine.is_placed() {
        return;
    }

    let tracked = session.tracker.update(frame.usable_hits());
    session.machine.observe_surface(tracked);
}

// Classify this tick and notify the host page when the category changes.
pub fn update_feedback(
    mut session: ResMut<PlacementSession>,
    model_assets: Res<ModelAssets>,
    config: Res<SessionConfig>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if session.machine.is_placed() {
        return;
    }

    let code = classify(
        session.machine.surface(),
        model_assets.is_loaded,
        config.min_placement_distance,
    );
    if code != session.feedback {
        session.feedback = code;
        rpc_interface.send_notification("feedback_changed", serde_json::json!({ "code": code }));
    }
}

// The commit point: exactly one request may ever succeed per session.
pub fn handle_place_requests(
    mut events: EventReader<PlaceRequestEvent>,
    mut session: ResMut<PlacementSession>,
    model_assets: Res<ModelAssets>,
    mut model_query: Query<(&mut Transform, &mut Visibility), With<PlacedModel>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in events.read() {
        match session.machine.request_placement(model_assets.is_loaded) {
            Ok(pose) => {
                info!(
                    "Placement committed at {:?} via {:?}",
                    pose.translation, event.source
                );

                if let Ok((mut transform, mut visibility)) = model_query.single_mut() {
                    *transform = pose.to_transform();
                    *visibility = Visibility::Visible;
                }

                // Once placed the feedback line goes quiet.
                session.feedback = FeedbackCode::None;
                rpc_interface.send_notification(
                    "feedback_changed",
                    serde_json::json!({ "code": FeedbackCode::None }),
                );

                rpc_interface.send_notification(
                    "placement_committed",
                    serde_json::json!({
                        "translation": pose.translation.to_array(),
                        "rotation": [
                            pose.rotation.x,
                            pose.rotation.y,
                            pose.rotation.z,
                            pose.rotation.w,
                        ],
                    }),
                );
                // The surface subscription has served its purpose.
                rpc_interface.send_notification("hit_test_cancel", serde_json::json!({}));
            }
            Err(rejection) => {
                info!("Placement rejected via {:?}: {}", event.source, rejection);
                rpc_interface.send_notification(
                    "placement_rejected",
                    serde_json::json!({ "reason": rejection }),
                );
            }
        }
    }
}

// Hand the frozen transform to the renderer every tick while placed.
pub fn apply_placed_transform(
    session: Res<PlacementSession>,
    mut model_query: Query<&mut Transform, With<PlacedModel>>,
) {
    let Some(pose) = session.machine.current_transform() else {
        return;
    };
    if let Ok(mut transform) = model_query.single_mut() {
        *transform = pose.to_transform();
    }
}

/// System handling pointer placement input (native builds only).
#[cfg(not(target_arch = "wasm32"))]
pub fn place_on_pointer(
    buttons: Res<ButtonInput<MouseButton>>,
    session: Res<PlacementSession>,
    mut place_events: EventWriter<PlaceRequestEvent>,
) {
    if session.machine.is_placed() {
        return;
    }
    if buttons.just_pressed(MouseButton::Left) {
        place_events.write(PlaceRequestEvent {
            source: PlacementRequestSource::Pointer,
        });
    }
}

/// Placeholder for WASM builds where placement arrives via RPC only.
#[cfg(target_arch = "wasm32")]
pub fn place_on_pointer() {}

/// System turning drags on the placed model into gesture events (native).
#[cfg(not(target_arch = "wasm32"))]
pub fn emit_pointer_gestures(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<bevy::input::mouse::MouseMotion>,
    session: Res<PlacementSession>,
    mut gesture_events: EventWriter<PostPlacementGestureEvent>,
) {
    if !session.machine.is_placed() || !buttons.pressed(MouseButton::Left) {
        motion.clear();
        return;
    }

    let delta: Vec2 = motion.read().map(|m| m.delta).sum();
    if delta != Vec2::ZERO {
        gesture_events.write(PostPlacementGestureEvent { delta });
    }
}

#[cfg(target_arch = "wasm32")]
pub fn emit_pointer_gestures() {}

// Extension point: gestures take over from placement once a model is down,
// but no manipulation is wired up yet.
// TODO: rotate the placed model around Y from the gesture delta.
pub fn on_post_placement_gesture(
    mut events: EventReader<PostPlacementGestureEvent>,
    session: Res<PlacementSession>,
) {
    if !session.machine.is_placed() {
        events.clear();
        return;
    }
    for event in events.read() {
        debug!("Post-placement gesture ({:?}) not applied yet", event.delta);
    }
}
