//! Scene entities owned by the engine: reticle, placed model, lighting.

pub mod lighting;
pub mod placed_model;
pub mod reticle;
