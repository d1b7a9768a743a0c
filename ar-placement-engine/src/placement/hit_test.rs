use bevy::prelude::*;

/// Pose of a point in tracking space: the coordinate frame established when
/// the session begins. Produced fresh each frame by the sensing layer and
/// immutable once read.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfacePose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl SurfacePose {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Decompose a column-major 4x4 rigid transform, the layout hit-test
    /// poses arrive in over the RPC bridge.
    pub fn from_matrix_cols(cols: &[f32; 16]) -> Self {
        let (_, rotation, translation) = Mat4::from_cols_array(cols).to_scale_rotation_translation();
        Self {
            translation,
            rotation,
        }
    }

    pub fn to_transform(self) -> Transform {
        Transform {
            translation: self.translation,
            rotation: self.rotation,
            scale: Vec3::ONE,
        }
    }

    /// Euclidean distance from the tracking-space origin, the proximity
    /// metric used for placement feedback.
    pub fn distance_to_origin(self) -> f32 {
        self.translation.length()
    }
}

/// One ray/surface intersection delivered by the sensing layer for the
/// current frame. The sensing layer ranks results nearest-first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawHit {
    pub pose: SurfacePose,
}

impl RawHit {
    pub fn at(pose: SurfacePose) -> Self {
        Self { pose }
    }
}

/// Latest sensing snapshot, rewritten by whichever sensing source is active
/// (RPC bridge on wasm, cursor simulation on native) and consumed once per
/// tick by the frame loop.
#[derive(Resource, Default, Debug, Clone)]
pub struct SensorFrame {
    /// Viewer pose in tracking space. `None` while tracking is lost, which
    /// is a normal state, not an error.
    pub viewer_pose: Option<SurfacePose>,
    pub hits: Vec<RawHit>,
}

impl SensorFrame {
    /// Hits usable this tick. A missing viewer pose collapses to "no hits":
    /// hit-test results without a tracked viewer are stale by definition.
    pub fn usable_hits(&self) -> &[RawHit] {
        if self.viewer_pose.is_some() {
            &self.hits
        } else {
            &[]
        }
    }

    pub fn clear(&mut self) {
        self.viewer_pose = None;
        self.hits.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pose_roundtrips_through_column_major_matrix() {
        let pose = SurfacePose::new(
            Vec3::new(0.5, 0.0, -2.0),
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_3),
        );
        let cols = Mat4::from_rotation_translation(pose.rotation, pose.translation).to_cols_array();

        let decoded = SurfacePose::from_matrix_cols(&cols);

        assert!(decoded.translation.abs_diff_eq(pose.translation, 1e-5));
        assert!(decoded.rotation.abs_diff_eq(pose.rotation, 1e-5));
    }

    #[test]
    fn hits_are_unusable_while_tracking_is_lost() {
        let frame = SensorFrame {
            viewer_pose: None,
            hits: vec![RawHit::at(SurfacePose::IDENTITY)],
        };

        assert!(frame.usable_hits().is_empty());
    }

    #[test]
    fn hits_pass_through_while_viewer_is_tracked() {
        let frame = SensorFrame {
            viewer_pose: Some(SurfacePose::IDENTITY),
            hits: vec![RawHit::at(SurfacePose::new(
                Vec3::new(0.0, 0.0, -1.5),
                Quat::IDENTITY,
            ))],
        };

        assert_eq!(frame.usable_hits().len(), 1);
    }
}
