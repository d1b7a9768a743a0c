pub mod ar_camera;

pub use ar_camera::{ArCamera, apply_viewer_pose, cursor_ground_hit, spawn_ar_camera};
