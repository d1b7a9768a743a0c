use bevy::prelude::*;

use crate::engine::assets::model_assets::ModelAssets;

/// Root entity of the one placeable model. Hidden until a placement
/// commits; its transform is the frozen placement pose afterwards.
#[derive(Component)]
pub struct PlacedModel;

/// Child node carrying the one-time recentering offset, so the placement
/// pose on the root stays exactly the committed surface pose.
#[derive(Component)]
pub struct ModelOffset;

// Spawn the model once the config names it. Parked hidden at the origin
// until the session commits a placement.
pub fn spawn_model_template(commands: &mut Commands, model_assets: &ModelAssets) {
    commands
        .spawn((
            Transform::IDENTITY,
            Visibility::Hidden,
            PlacedModel,
            Name::new("placeable_model"),
        ))
        .with_children(|parent| {
            parent.spawn((
                SceneRoot(model_assets.scene.clone()),
                Transform::IDENTITY,
                ModelOffset,
            ));
        });
}
