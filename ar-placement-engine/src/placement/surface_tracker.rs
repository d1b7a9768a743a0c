use super::hit_test::{RawHit, SurfacePose};

/// Result of one tracking update. Encodes the "pose present iff a surface is
/// visible" invariant by construction instead of a bool + option pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TrackedSurface {
    #[default]
    NotFound,
    Found(SurfacePose),
}

impl TrackedSurface {
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn pose(self) -> Option<SurfacePose> {
        match self {
            Self::Found(pose) => Some(pose),
            Self::NotFound => None,
        }
    }
}

/// Converts the raw per-frame hit-test list into a tracked surface sample.
///
/// The sensing layer already ranks results nearest-first, so the tracker
/// selects the first entry and does no re-sorting of its own. The stored
/// sample is overwritten on every update; no history is retained.
#[derive(Clone, Copy, Debug, Default)]
pub struct SurfaceTracker {
    current: TrackedSurface,
}

impl SurfaceTracker {
    /// An empty list means no surface was intersected this frame, which is
    /// normal, not exceptional.
    pub fn update(&mut self, hits: &[RawHit]) -> TrackedSurface {
        self.current = match hits.first() {
            Some(hit) => TrackedSurface::Found(hit.pose),
            None => TrackedSurface::NotFound,
        };
        self.current
    }

    pub fn current(&self) -> TrackedSurface {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::prelude::{Quat, Vec3};

    #[test]
    fn empty_hit_list_yields_no_surface() {
        let mut tracker = SurfaceTracker::default();

        let tracked = tracker.update(&[]);

        assert_eq!(tracked, TrackedSurface::NotFound);
        assert!(!tracked.is_visible());
        assert!(tracked.pose().is_none());
    }

    #[test]
    fn first_hit_pose_is_taken_unmodified() {
        let first = SurfacePose::new(
            Vec3::new(0.2, 0.0, -1.0),
            Quat::from_rotation_y(0.4),
        );
        let second = SurfacePose::new(Vec3::new(5.0, 0.0, 5.0), Quat::IDENTITY);
        let mut tracker = SurfaceTracker::default();

        let tracked = tracker.update(&[RawHit::at(first), RawHit::at(second)]);

        assert_eq!(tracked.pose(), Some(first));
    }

    #[test]
    fn sample_is_overwritten_every_update() {
        let mut tracker = SurfaceTracker::default();

        tracker.update(&[RawHit::at(SurfacePose::IDENTITY)]);
        assert!(tracker.current().is_visible());

        tracker.update(&[]);
        assert_eq!(tracker.current(), TrackedSurface::NotFound);
    }
}
