use bevy::prelude::*;
use bevy::render::primitives::Aabb;

use crate::engine::assets::model_assets::ModelAssets;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::placed_model::ModelOffset;

// Check if the model scene asset finished loading
pub fn check_model_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    model_assets: Res<ModelAssets>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.model_loaded || !loading_progress.config_loaded {
        return;
    }

    let scene_loaded = matches!(
        asset_server.get_load_state(&model_assets.scene),
        Some(bevy::asset::LoadState::Loaded)
    );

    if scene_loaded {
        println!("✓ Model scene loaded successfully");
        loading_progress.model_loaded = true;
    }
}

// One-time vertical recentering: once the spawned scene instance has mesh
// bounds, shift the model so it is centred on x/z and its base sits at the
// local origin. Applied at load time, never per frame.
pub fn recenter_model_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    mut model_assets: ResMut<ModelAssets>,
    mut offset_query: Query<(Entity, &mut Transform), With<ModelOffset>>,
    children_query: Query<&Children>,
    bounds_query: Query<(&Aabb, &GlobalTransform)>,
) {
    if loading_progress.model_recentered || !loading_progress.model_loaded {
        return;
    }

    let Ok((offset_entity, mut offset_transform)) = offset_query.single_mut() else {
        return;
    };

    // Union of all mesh bounds below the offset node. The template is
    // parked at the identity while loading, so globals read as local space.
    let mut min = Vec3::splat(f32::INFINITY);
    let mut max = Vec3::splat(f32::NEG_INFINITY);
    for descendant in children_query.iter_descendants(offset_entity) {
        if let Ok((aabb, global)) = bounds_query.get(descendant) {
            let center = global.transform_point(Vec3::from(aabb.center));
            let half = Vec3::from(aabb.half_extents);
            min = min.min(center - half);
            max = max.max(center + half);
        }
    }

    if !min.x.is_finite() {
        // Meshes not instantiated yet; try again next tick.
        return;
    }

    let center = (min + max) * 0.5;
    let size = max - min;
    let offset = Vec3::new(-center.x, size.y * 0.5 - center.y, -center.z);

    offset_transform.translation = offset;
    model_assets.base_offset = offset;
    model_assets.is_loaded = true;
    loading_progress.model_recentered = true;

    println!("✓ Model recentered, base offset {:?}", offset);
}
