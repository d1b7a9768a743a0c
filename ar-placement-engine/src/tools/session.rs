use bevy::prelude::*;

use crate::engine::core::app_state::SessionState;
use crate::engine::scene::placed_model::PlacedModel;
use crate::engine::scene::reticle::Reticle;
use crate::placement::SensorFrame;
use crate::rpc::web_rpc::WebRpcInterface;
use crate::tools::model_placement::PlacementSession;

/// Session lifecycle intents, from the host page (RPC) or the dev keyboard.
#[derive(Event, Debug, Clone, Copy)]
pub enum SessionControlEvent {
    Start,
    End,
}

/// The host page could not release its hit-test subscription. Local
/// teardown proceeds regardless; this is surfaced, not fatal.
#[derive(Event)]
pub struct TeardownFailureEvent {
    pub reason: String,
}

/// System handling session toggling via keyboard (native builds only).
#[cfg(not(target_arch = "wasm32"))]
pub fn handle_session_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    session_state: Res<State<SessionState>>,
    mut session_events: EventWriter<SessionControlEvent>,
) {
    if keyboard.just_pressed(KeyCode::Enter) {
        let event = match session_state.get() {
            SessionState::Idle => SessionControlEvent::Start,
            SessionState::InSession => SessionControlEvent::End,
        };
        session_events.write(event);
    }
}

/// Placeholder for WASM builds where the host page owns the session button.
#[cfg(target_arch = "wasm32")]
pub fn handle_session_keyboard_shortcuts() {}

pub fn handle_session_control_events(
    mut events: EventReader<SessionControlEvent>,
    session_state: Res<State<SessionState>>,
    mut next_state: ResMut<NextState<SessionState>>,
) {
    for event in events.read() {
        match (event, session_state.get()) {
            (SessionControlEvent::Start, SessionState::Idle) => {
                next_state.set(SessionState::InSession);
            }
            (SessionControlEvent::End, SessionState::InSession) => {
                next_state.set(SessionState::Idle);
            }
            // Redundant start/end requests are normal, e.g. a double tap.
            _ => {}
        }
    }
}

// Fresh placement state for every session; nothing survives from the last.
pub fn begin_session(
    mut session: ResMut<PlacementSession>,
    mut frame: ResMut<SensorFrame>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    session.reset();
    frame.clear();

    println!("→ AR session started");
    rpc_interface
        .send_notification("session_state", serde_json::json!({ "state": "in_session" }));
}

// The only teardown path: release the sensing subscription, stop showing
// session visuals, drop placement state.
pub fn teardown_session(
    mut session: ResMut<PlacementSession>,
    mut frame: ResMut<SensorFrame>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut visuals_query: Query<&mut Visibility, Or<(With<Reticle>, With<PlacedModel>)>>,
) {
    rpc_interface.send_notification("hit_test_cancel", serde_json::json!({}));

    for mut visibility in &mut visuals_query {
        *visibility = Visibility::Hidden;
    }

    session.reset();
    frame.clear();

    println!("→ AR session ended");
    rpc_interface.send_notification("session_state", serde_json::json!({ "state": "idle" }));
}

pub fn handle_teardown_failures(
    mut events: EventReader<TeardownFailureEvent>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in events.read() {
        warn!("Hit-test subscription release failed: {}", event.reason);
        rpc_interface.send_notification(
            "debug_message",
            serde_json::json!({
                "message": format!("hit_test_cancel failed: {}", event.reason)
            }),
        );
    }
}
