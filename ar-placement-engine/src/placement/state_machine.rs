use serde::Serialize;
use thiserror::Error;

use super::hit_test::SurfacePose;
use super::surface_tracker::TrackedSurface;

/// Why a placement request did not commit. Rejections are reported to the
/// caller as values, never raised; the next tick re-evaluates naturally so
/// no retry machinery exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementRejection {
    /// No tracked surface under the reticle this tick.
    #[error("no tracked surface to place on")]
    NoSurface,

    /// The model asset has not finished loading.
    #[error("model asset is still loading")]
    AssetNotReady,

    /// A model was already placed this session. Re-placement has no defined
    /// semantics, so later requests are rejected rather than re-executed.
    #[error("a model has already been placed this session")]
    AlreadyPlaced,
}

/// Semantic state of the AR session. The transition is one-way: once a model
/// is placed the machine stops consulting the tracker for its lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlacementState {
    Searching { surface: TrackedSurface },
    Placed { transform: SurfacePose },
}

/// Owns the Searching → Placed lifecycle.
///
/// Placement is a one-shot commit gated on two independent preconditions,
/// surface found and asset loaded, so the user can never place a model
/// before either geometry or tracking is ready.
#[derive(Clone, Copy, Debug)]
pub struct PlacementStateMachine {
    state: PlacementState,
}

impl Default for PlacementStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementStateMachine {
    pub fn new() -> Self {
        Self {
            state: PlacementState::Searching {
                surface: TrackedSurface::NotFound,
            },
        }
    }

    /// Replace the stored surface sample with this tick's tracking result.
    /// Silently ignored once `Placed`; the committed transform is frozen.
    pub fn observe_surface(&mut self, tracked: TrackedSurface) {
        if let PlacementState::Searching { surface } = &mut self.state {
            *surface = tracked;
        }
    }

    /// The single commit point of the whole application. Succeeds iff a
    /// surface is currently visible AND the model asset is ready, freezing
    /// the surface pose as the placed transform. At most one call may ever
    /// succeed; all later calls come back `AlreadyPlaced` with no state
    /// change.
    pub fn request_placement(
        &mut self,
        asset_ready: bool,
    ) -> Result<SurfacePose, PlacementRejection> {
        let surface = match self.state {
            PlacementState::Placed { .. } => return Err(PlacementRejection::AlreadyPlaced),
            PlacementState::Searching { surface } => surface,
        };

        let Some(pose) = surface.pose() else {
            return Err(PlacementRejection::NoSurface);
        };
        if !asset_ready {
            return Err(PlacementRejection::AssetNotReady);
        }

        self.state = PlacementState::Placed { transform: pose };
        Ok(pose)
    }

    /// The frozen world transform once `Placed`, else `None`.
    pub fn current_transform(&self) -> Option<SurfacePose> {
        match self.state {
            PlacementState::Placed { transform } => Some(transform),
            PlacementState::Searching { .. } => None,
        }
    }

    /// The surface sample the machine is currently holding while searching.
    pub fn surface(&self) -> TrackedSurface {
        match self.state {
            PlacementState::Searching { surface } => surface,
            PlacementState::Placed { .. } => TrackedSurface::NotFound,
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self.state, PlacementState::Placed { .. })
    }

    pub fn state(&self) -> PlacementState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::hit_test::SurfacePose;
    use bevy::prelude::{Quat, Vec3};

    fn visible_at(x: f32, y: f32, z: f32) -> TrackedSurface {
        TrackedSurface::Found(SurfacePose::new(Vec3::new(x, y, z), Quat::IDENTITY))
    }

    #[test]
    fn starts_searching_with_no_surface() {
        let machine = PlacementStateMachine::new();

        assert!(!machine.is_placed());
        assert_eq!(machine.surface(), TrackedSurface::NotFound);
        assert!(machine.current_transform().is_none());
    }

    #[test]
    fn rejects_without_surface() {
        let mut machine = PlacementStateMachine::new();

        assert_eq!(
            machine.request_placement(true),
            Err(PlacementRejection::NoSurface)
        );
        assert!(!machine.is_placed());
    }

    #[test]
    fn rejects_while_asset_loading_even_with_surface() {
        let mut machine = PlacementStateMachine::new();
        machine.observe_surface(visible_at(0.0, 0.0, -2.0));

        assert_eq!(
            machine.request_placement(false),
            Err(PlacementRejection::AssetNotReady)
        );
        assert!(!machine.is_placed());
        // Still searching: the surface sample keeps updating.
        assert!(machine.surface().is_visible());
    }

    #[test]
    fn commits_exactly_the_observed_pose() {
        let pose = SurfacePose::new(Vec3::new(1.0, 0.0, -2.0), Quat::from_rotation_y(0.7));
        let mut machine = PlacementStateMachine::new();
        machine.observe_surface(TrackedSurface::Found(pose));

        let committed = machine.request_placement(true).unwrap();

        assert_eq!(committed, pose);
        assert_eq!(machine.current_transform(), Some(pose));
        assert!(machine.is_placed());
    }

    #[test]
    fn second_request_is_rejected_without_mutation() {
        let pose = SurfacePose::new(Vec3::new(0.0, 0.0, -3.0), Quat::IDENTITY);
        let mut machine = PlacementStateMachine::new();
        machine.observe_surface(TrackedSurface::Found(pose));
        machine.request_placement(true).unwrap();

        // Preconditions would pass again; the machine must still refuse.
        assert_eq!(
            machine.request_placement(true),
            Err(PlacementRejection::AlreadyPlaced)
        );
        assert_eq!(machine.current_transform(), Some(pose));
    }

    #[test]
    fn observations_after_placement_leave_transform_frozen() {
        let pose = SurfacePose::new(Vec3::new(0.0, 0.0, -3.0), Quat::IDENTITY);
        let mut machine = PlacementStateMachine::new();
        machine.observe_surface(TrackedSurface::Found(pose));
        machine.request_placement(true).unwrap();

        machine.observe_surface(visible_at(9.0, 9.0, 9.0));

        assert_eq!(machine.current_transform(), Some(pose));
    }
}
