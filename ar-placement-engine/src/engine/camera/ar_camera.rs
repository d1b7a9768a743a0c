use bevy::prelude::*;

use crate::placement::SensorFrame;

/// Marker for the single scene camera. On wasm it mirrors the viewer pose
/// delivered with each sensor frame; on native it doubles as the dev camera
/// the cursor simulation raycasts from.
#[derive(Component)]
pub struct ArCamera;

pub fn spawn_ar_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        // Standing eye height, a step back from the tracking origin. On
        // wasm the first sensor frame overwrites this immediately.
        Transform::from_xyz(0.0, 1.6, 3.0).looking_at(Vec3::ZERO, Vec3::Y),
        ArCamera,
    ));
}

// Follow the sensing layer's viewer pose while one is tracked. Tracking
// loss leaves the camera where it was; the reticle is hidden separately.
pub fn apply_viewer_pose(
    frame: Res<SensorFrame>,
    mut camera_query: Query<&mut Transform, With<ArCamera>>,
) {
    let Some(pose) = frame.viewer_pose else {
        return;
    };
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    *transform = pose.to_transform();
}

/// Raycast the cursor through the camera onto the `y = 0` ground plane.
/// The native stand-in for a real hit-test source.
pub fn cursor_ground_hit(
    cursor_pos: Vec2,
    camera: &Camera,
    camera_transform: &GlobalTransform,
) -> Option<Vec3> {
    let ray = camera.viewport_to_world(camera_transform, cursor_pos).ok()?;

    let denom = ray.direction.y;
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = -ray.origin.y / denom;
    if t < 0.0 {
        return None;
    }
    Some(ray.get_point(t))
}
