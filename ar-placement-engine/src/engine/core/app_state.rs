use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

/// Asset pipeline state. Linear: the app starts loading config and model and
/// ends up Ready; sessions can already run while assets load, the core just
/// reports the model as not ready yet.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Ready,
}

/// AR session lifecycle. One bounded experience per `InSession` stretch;
/// leaving it tears down sensing and resets placement.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum SessionState {
    #[default]
    Idle,
    InSession,
}

/// Text node showing the current feedback line (native overlay only).
#[derive(Component)]
pub struct FeedbackText;

/// Text node showing the frame rate (native overlay only).
#[derive(Component)]
pub struct FpsText;

// Transition to Ready once config and model are in and the one-time
// recentering offset has been applied.
pub fn transition_to_ready(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.config_loaded
        && loading_progress.model_loaded
        && loading_progress.model_recentered
    {
        println!("→ Transitioning to Ready state");
        next_state.set(AppState::Ready);
    }
}
