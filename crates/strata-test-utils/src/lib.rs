//! Test utilities and fixture models for Strata development.
//!
//! Provides evaluation-point builders ([`point_2d`], [`point_3d`],
//! [`column`]) and reusable fixture models in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{ConstantModel, RejectingModel};

use smallvec::smallvec;
use strata_core::{Dimension, EvaluationPoint, MaterialInputs};

/// A 2D point at `(x, z)` with the given temperature.
pub fn point_2d(x: f64, z: f64, temperature: f64) -> EvaluationPoint {
    EvaluationPoint::new(smallvec![x, z], temperature)
}

/// A 3D point at `(x, z, y)` with the given temperature. `z` is vertical.
pub fn point_3d(x: f64, z: f64, y: f64, temperature: f64) -> EvaluationPoint {
    EvaluationPoint::new(smallvec![x, z, y], temperature)
}

/// A vertical column of points at `x = 0` (and `y = 0` in 3D), one per
/// entry of `heights`, all at `temperature`.
pub fn column(dim: Dimension, heights: &[f64], temperature: f64) -> MaterialInputs {
    let points = heights
        .iter()
        .map(|&z| match dim {
            Dimension::Two => point_2d(0.0, z, temperature),
            Dimension::Three => point_3d(0.0, z, 0.0, temperature),
        })
        .collect();
    MaterialInputs::new(dim, points).expect("column points always match their dimension")
}

/// Wrap 2D points into a batch.
pub fn batch_2d(points: Vec<EvaluationPoint>) -> MaterialInputs {
    MaterialInputs::new(Dimension::Two, points).expect("points must be 2D")
}
