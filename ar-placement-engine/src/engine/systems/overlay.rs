use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::engine::core::app_state::{FeedbackText, FpsText, SessionState};
use crate::placement::FeedbackCode;
use crate::rpc::web_rpc::WebRpcInterface;
use crate::tools::model_placement::PlacementSession;

// Native-only dev overlay. On wasm the host page owns all presentation and
// receives feedback codes over the RPC bridge instead.
pub fn spawn_overlay(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(48.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                FeedbackText,
            ));
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

// Display-text mapping for the dev overlay. The codes themselves stay
// opaque to the placement core.
pub fn feedback_text_update_system(
    session: Option<Res<PlacementSession>>,
    session_state: Res<State<SessionState>>,
    mut query: Query<&mut Text, With<FeedbackText>>,
) {
    for mut text in &mut query {
        text.0 = match session_state.get() {
            SessionState::Idle => "Press Enter to start an AR session".to_string(),
            SessionState::InSession => {
                let feedback = session
                    .as_ref()
                    .map(|s| s.feedback)
                    .unwrap_or(FeedbackCode::None);
                match feedback {
                    FeedbackCode::None => String::new(),
                    FeedbackCode::TooClose => {
                        "Too close. Step back and place farther away".to_string()
                    }
                    FeedbackCode::ReadyToPlace => "Click to place".to_string(),
                    FeedbackCode::StillLoading => "Loading model...".to_string(),
                }
            }
        };
    }
}

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}

pub fn fps_notification_system(
    mut rpc_interface: ResMut<WebRpcInterface>,
    diagnostics: Res<DiagnosticsStore>,
    mut last_send_time: Local<f32>,
    time: Res<Time>,
) {
    let current_time = time.elapsed_secs();

    // Send FPS every 0.5 seconds
    if current_time - *last_send_time >= 0.5 {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                rpc_interface.send_notification(
                    "fps_update",
                    serde_json::json!({
                        "fps": value as f32
                    }),
                );
                *last_send_time = current_time;
            }
        }
    }
}
