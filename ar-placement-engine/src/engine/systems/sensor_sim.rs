#[cfg(not(target_arch = "wasm32"))]
use bevy::prelude::*;
#[cfg(not(target_arch = "wasm32"))]
use bevy::window::PrimaryWindow;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::camera::ar_camera::{ArCamera, cursor_ground_hit};
#[cfg(not(target_arch = "wasm32"))]
use crate::placement::{RawHit, SensorFrame, SurfacePose};

// Native stand-in for the WebXR hit-test source: casts the cursor onto the
// ground plane and publishes the result as this tick's sensor frame. Moving
// the cursor off-window reads as "no surface", matching a real tracking gap.
#[cfg(not(target_arch = "wasm32"))]
pub fn simulate_sensor_frame(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<ArCamera>>,
    mut frame: ResMut<SensorFrame>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera_transform, camera)) = cameras.single() else {
        return;
    };

    frame.viewer_pose = Some(SurfacePose::new(
        camera_transform.translation(),
        camera_transform.rotation(),
    ));
    frame.hits.clear();

    if let Some(cursor_pos) = window.cursor_position() {
        if let Some(point) = cursor_ground_hit(cursor_pos, camera, camera_transform) {
            frame
                .hits
                .push(RawHit::at(SurfacePose::new(point, Quat::IDENTITY)));
        }
    }
}

// No simulation on wasm; frames arrive over the RPC bridge.
#[cfg(target_arch = "wasm32")]
pub fn simulate_sensor_frame() {}
