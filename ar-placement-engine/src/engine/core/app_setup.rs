use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::assets::model_assets::ModelAssets;
use crate::engine::assets::session_config::SessionConfig;
use crate::engine::camera::{apply_viewer_pose, spawn_ar_camera};
use crate::engine::core::app_state::{AppState, SessionState, transition_to_ready};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::config_loader::{ConfigLoader, load_config_system, start_loading};
use crate::engine::loading::model_loader::{check_model_loading, recenter_model_when_ready};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::reticle::update_reticle;
use crate::engine::systems::overlay::fps_notification_system;
use crate::engine::systems::sensor_sim::simulate_sensor_frame;
// Crate tools modules
use crate::placement::SensorFrame;
use crate::tools::{
    model_placement::{
        PlaceRequestEvent, PlacementSession, PostPlacementGestureEvent, SensorFrameEvent,
        apply_placed_transform, emit_pointer_gestures, handle_place_requests, ingest_sensor_frame,
        on_post_placement_gesture, place_on_pointer, track_surface, update_feedback,
    },
    session::{
        SessionControlEvent, TeardownFailureEvent, begin_session, handle_session_control_events,
        handle_session_keyboard_shortcuts, handle_teardown_failures, teardown_session,
    },
};
// Crate Web RPC modules
use crate::rpc::web_rpc::WebRpcPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::overlay::{feedback_text_update_system, fps_text_update_system};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .init_state::<SessionState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SessionConfig as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SessionConfig>::new(&["json"]))
        .add_plugins(WebRpcPlugin);

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ConfigLoader>()
        .init_resource::<ModelAssets>()
        .init_resource::<SensorFrame>()
        .init_resource::<PlacementSession>()
        // Overwritten once the JSON session config is in.
        .insert_resource(SessionConfig::default())
        .add_event::<SessionControlEvent>()
        .add_event::<TeardownFailureEvent>()
        .add_event::<SensorFrameEvent>()
        .add_event::<PlaceRequestEvent>()
        .add_event::<PostPlacementGestureEvent>();

    // Loading phase systems
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                load_config_system,
                check_model_loading,
                recenter_model_when_ready,
                transition_to_ready,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    // Session lifecycle runs in every app state: the host may start an AR
    // session while the model is still loading, the core just reports it.
    app.add_systems(
        Update,
        (
            handle_session_keyboard_shortcuts,
            handle_session_control_events,
            handle_teardown_failures,
        ),
    )
    .add_systems(OnEnter(SessionState::InSession), begin_session)
    .add_systems(OnExit(SessionState::InSession), teardown_session);

    // One frame-loop tick, in data-flow order: sensing → tracking →
    // feedback → placement → render outputs. The Bevy runner reschedules
    // unconditionally; nothing in the chain can break the loop.
    app.add_systems(
        Update,
        (
            simulate_sensor_frame,
            ingest_sensor_frame,
            apply_viewer_pose,
            track_surface,
            update_feedback,
            place_on_pointer,
            handle_place_requests,
            update_reticle,
            apply_placed_transform,
            emit_pointer_gestures,
            on_post_placement_gesture,
        )
            .chain()
            .run_if(in_state(SessionState::InSession)),
    );

    app.add_systems(Update, fps_notification_system);

    // Dev overlay text only exists on native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(
            Update,
            (feedback_text_update_system, fps_text_update_system),
        );
    }

    app
}

// Startup system that only handles basic initialisation; the reticle and
// model template are spawned once the session config names them.
fn setup(mut commands: Commands) {
    spawn_lighting(&mut commands);
    spawn_ar_camera(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        crate::engine::systems::overlay::spawn_overlay(&mut commands);
    }
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
