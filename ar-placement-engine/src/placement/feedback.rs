use bevy::prelude::Color;
use serde::{Deserialize, Serialize};

use constants::render_settings::{RETICLE_READY_COLOR, RETICLE_TOO_CLOSE_COLOR};

use super::surface_tracker::TrackedSurface;

/// Per-tick feedback category shown to the user. Derived fresh each frame
/// and never persisted. Display text lives with the presentation layer
/// (native overlay or host page), keyed by the serialized code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCode {
    /// Indicator hidden, no feedback text.
    #[default]
    None,
    TooClose,
    ReadyToPlace,
    StillLoading,
}

impl FeedbackCode {
    /// Reticle tint for this code; `None` when the reticle carries no
    /// tracked surface to tint.
    pub fn reticle_tint(self) -> Option<Color> {
        match self {
            Self::TooClose => Some(RETICLE_TOO_CLOSE_COLOR),
            Self::ReadyToPlace => Some(RETICLE_READY_COLOR),
            Self::None | Self::StillLoading => None,
        }
    }
}

/// Classify the current tick for user feedback.
///
/// A still-loading asset wins over everything else, so the user learns why
/// nothing is interactable yet even before a surface is found. Otherwise the
/// tracked point's distance to the tracking origin decides: strictly below
/// `min_distance` is too close, at or above it is placeable.
pub fn classify(surface: TrackedSurface, asset_ready: bool, min_distance: f32) -> FeedbackCode {
    if !asset_ready {
        return FeedbackCode::StillLoading;
    }
    match surface.pose() {
        None => FeedbackCode::None,
        Some(pose) => {
            if pose.distance_to_origin() < min_distance {
                FeedbackCode::TooClose
            } else {
                FeedbackCode::ReadyToPlace
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::hit_test::SurfacePose;
    use bevy::prelude::{Quat, Vec3};

    fn surface_at_distance(d: f32) -> TrackedSurface {
        TrackedSurface::Found(SurfacePose::new(Vec3::new(0.0, 0.0, -d), Quat::IDENTITY))
    }

    #[test]
    fn loading_asset_wins_regardless_of_surface() {
        assert_eq!(
            classify(TrackedSurface::NotFound, false, 1.0),
            FeedbackCode::StillLoading
        );
        assert_eq!(
            classify(surface_at_distance(2.0), false, 1.0),
            FeedbackCode::StillLoading
        );
    }

    #[test]
    fn hidden_surface_gives_no_feedback() {
        assert_eq!(
            classify(TrackedSurface::NotFound, true, 1.0),
            FeedbackCode::None
        );
    }

    #[test]
    fn distance_splits_too_close_from_ready() {
        assert_eq!(
            classify(surface_at_distance(0.5), true, 1.0),
            FeedbackCode::TooClose
        );
        assert_eq!(
            classify(surface_at_distance(2.0), true, 1.0),
            FeedbackCode::ReadyToPlace
        );
    }

    #[test]
    fn threshold_equality_counts_as_ready() {
        // Strict `<`: exactly at the threshold is placeable.
        assert_eq!(
            classify(surface_at_distance(1.0), true, 1.0),
            FeedbackCode::ReadyToPlace
        );
    }

    #[test]
    fn classification_flips_exactly_once_with_decreasing_distance() {
        let min_distance = 1.0;
        let mut flips = 0;
        let mut last = None;

        // Sweep from well above to well below the threshold.
        for step in 0..=40 {
            let d = 2.0 - step as f32 * 0.05;
            let code = classify(surface_at_distance(d), true, min_distance);
            if let Some(previous) = last {
                if previous != code {
                    flips += 1;
                    assert_eq!(previous, FeedbackCode::ReadyToPlace);
                    assert_eq!(code, FeedbackCode::TooClose);
                }
            }
            last = Some(code);
        }

        assert_eq!(flips, 1);
    }

    #[test]
    fn tints_follow_the_code() {
        assert!(FeedbackCode::TooClose.reticle_tint().is_some());
        assert!(FeedbackCode::ReadyToPlace.reticle_tint().is_some());
        assert!(FeedbackCode::None.reticle_tint().is_none());
        assert!(FeedbackCode::StillLoading.reticle_tint().is_none());
    }
}
