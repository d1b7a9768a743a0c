use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use constants::render_settings::{RETICLE_READY_COLOR, RETICLE_RING_RESOLUTION};

use crate::engine::assets::session_config::ReticleSettings;
use crate::tools::model_placement::PlacementSession;

/// Flat ring indicator shown at the currently tracked surface point.
#[derive(Component)]
pub struct Reticle;

pub fn spawn_reticle(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    settings: &ReticleSettings,
) {
    commands.spawn((
        Mesh3d(meshes.add(
            Annulus::new(settings.inner_radius, settings.outer_radius)
                .mesh()
                .resolution(RETICLE_RING_RESOLUTION),
        )),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: RETICLE_READY_COLOR,
            unlit: true,
            cull_mode: None,
            ..default()
        })),
        // The annulus faces +Z; lay it flat on the surface.
        Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
        Visibility::Hidden,
        Reticle,
        Name::new("reticle"),
    ));
}

// Drive reticle visibility, pose and tint from this tick's tracking result.
// Runs after placement handling so the ring disappears on the commit tick.
pub fn update_reticle(
    session: Res<PlacementSession>,
    mut reticle_query: Query<
        (&mut Transform, &mut Visibility, &MeshMaterial3d<StandardMaterial>),
        With<Reticle>,
    >,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok((mut transform, mut visibility, material)) = reticle_query.single_mut() else {
        return;
    };

    if session.machine.is_placed() {
        *visibility = Visibility::Hidden;
        return;
    }

    match session.machine.surface().pose() {
        Some(pose) => {
            transform.translation = pose.translation;
            transform.rotation = pose.rotation * Quat::from_rotation_x(-FRAC_PI_2);
            *visibility = Visibility::Visible;

            if let Some(tint) = session.feedback.reticle_tint() {
                if let Some(material) = materials.get_mut(&material.0) {
                    material.base_color = tint;
                }
            }
        }
        None => {
            *visibility = Visibility::Hidden;
        }
    }
}
