use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub config_loaded: bool,
    pub model_loaded: bool,
    pub model_recentered: bool,
}
