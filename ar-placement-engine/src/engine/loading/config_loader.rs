use bevy::prelude::*;

use constants::paths::SESSION_CONFIG_PATH;

use crate::engine::assets::model_assets::ModelAssets;
use crate::engine::assets::session_config::SessionConfig;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::placed_model::spawn_model_template;
use crate::engine::scene::reticle::spawn_reticle;

#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<SessionConfig>>,
}

// Start the loading process
pub fn start_loading(mut config_loader: ResMut<ConfigLoader>, asset_server: Res<AssetServer>) {
    println!("Loading session config from: {}", SESSION_CONFIG_PATH);
    config_loader.handle = Some(asset_server.load(SESSION_CONFIG_PATH));
}

// Apply the config and start the model load when the JSON is in
pub fn load_config_system(
    mut loading_progress: ResMut<LoadingProgress>,
    config_loader: Res<ConfigLoader>,
    mut model_assets: ResMut<ModelAssets>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    configs: Res<Assets<SessionConfig>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if loading_progress.config_loaded {
        return;
    }

    let Some(ref handle) = config_loader.handle else {
        return;
    };
    let Some(config) = configs.get(handle) else {
        return;
    };

    println!("✓ Session config loaded");
    loading_progress.config_loaded = true;

    // The scene label selects the default glTF scene.
    model_assets.scene = asset_server.load(format!("{}#Scene0", config.model_path));

    spawn_reticle(&mut commands, &mut meshes, &mut materials, &config.reticle);
    spawn_model_template(&mut commands, &model_assets);

    commands.insert_resource(config.clone());
}
