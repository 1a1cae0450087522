//! Evaluation inputs: spatial dimension, per-point state, and the
//! validated [`MaterialInputs`] batch handed to a material model.

use smallvec::SmallVec;

use crate::error::InputError;

/// A point in model space.
///
/// Uses `SmallVec<[f64; 3]>` so 2D and 3D positions stay inline.
pub type Position = SmallVec<[f64; 3]>;

/// Compositional field values at a point, one entry per field.
pub type Composition = SmallVec<[f64; 4]>;

/// Spatial dimensionality of the host model.
///
/// Fixes the length of every position in a batch. The vertical axis is
/// the second component in both 2D and 3D.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Two-dimensional model, positions are `(x, z)`.
    Two,
    /// Three-dimensional model, positions are `(x, z, y)` with `z` second.
    Three,
}

impl Dimension {
    /// Number of position components.
    pub fn components(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Index of the vertical coordinate within a position.
    pub fn vertical_axis(self) -> usize {
        1
    }
}

/// Physical state at one evaluation point.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationPoint {
    /// Spatial coordinates (m).
    pub position: Position,
    /// Temperature (K).
    pub temperature: f64,
    /// Pressure (Pa).
    pub pressure: f64,
    /// Compositional field values. The count determines the length of
    /// the point's reaction terms.
    pub composition: Composition,
}

impl EvaluationPoint {
    /// Create a point with zero pressure and no compositional fields.
    pub fn new(position: Position, temperature: f64) -> Self {
        Self {
            position,
            temperature,
            pressure: 0.0,
            composition: Composition::new(),
        }
    }

    /// Set the pressure.
    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = pressure;
        self
    }

    /// Set the compositional field values.
    pub fn with_composition(mut self, composition: Composition) -> Self {
        self.composition = composition;
        self
    }

    /// Number of compositional fields at this point.
    pub fn n_compositional_fields(&self) -> usize {
        self.composition.len()
    }
}

/// A batch of evaluation points sharing one spatial dimension.
///
/// Construction checks every position length against the dimension, so
/// models can index the vertical axis without further checks. An empty
/// batch is valid.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialInputs {
    dim: Dimension,
    points: Vec<EvaluationPoint>,
}

impl MaterialInputs {
    /// Build a batch, validating position lengths.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::PositionLength`] for the first point whose
    /// position does not have `dim.components()` entries.
    pub fn new(dim: Dimension, points: Vec<EvaluationPoint>) -> Result<Self, InputError> {
        let expected = dim.components();
        if let Some((index, p)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| p.position.len() != expected)
        {
            return Err(InputError::PositionLength {
                index,
                expected,
                actual: p.position.len(),
            });
        }
        Ok(Self { dim, points })
    }

    /// An empty batch.
    pub fn empty(dim: Dimension) -> Self {
        Self {
            dim,
            points: Vec::new(),
        }
    }

    /// The evaluation points, in host order.
    pub fn points(&self) -> &[EvaluationPoint] {
        &self.points
    }

    /// Number of evaluation points.
    pub fn n_evaluation_points(&self) -> usize {
        self.points.len()
    }

    /// Whether the batch has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Vertical coordinate of point `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn vertical(&self, i: usize) -> f64 {
        self.points[i].position[self.dim.vertical_axis()]
    }

    /// Split the batch into sub-batches of at most `size` points, each
    /// carrying the same dimension. Used to hand disjoint batches to
    /// worker threads.
    pub fn chunks(&self, size: usize) -> impl Iterator<Item = MaterialInputs> + '_ {
        let dim = self.dim;
        self.points.chunks(size.max(1)).map(move |c| MaterialInputs {
            dim,
            points: c.to_vec(),
        })
    }
}
