use bevy::prelude::*;

/// Handle and readiness of the one placeable model.
///
/// `is_loaded` flips true only after the scene asset finished loading AND
/// the one-time vertical recentering offset was applied, so the placement
/// core never commits a model that would float or sink through the surface.
#[derive(Resource, Default)]
pub struct ModelAssets {
    pub scene: Handle<Scene>,
    /// Local offset that seats the model base on the placement point,
    /// computed once from the loaded bounding geometry.
    pub base_offset: Vec3,
    pub is_loaded: bool,
}
