//! Per-point material coefficients produced by a model evaluation.

use smallvec::SmallVec;

use crate::inputs::MaterialInputs;

/// Reaction rates at a point, one entry per compositional field.
pub type ReactionTerms = SmallVec<[f64; 4]>;

/// Material coefficients at one evaluation point.
#[derive(Clone, Debug, PartialEq)]
pub struct PointResult {
    /// Viscosity (Pa s).
    pub viscosity: f64,
    /// Density (kg/m^3).
    pub density: f64,
    /// Thermal expansion coefficient (1/K).
    pub thermal_expansion_coefficient: f64,
    /// Specific heat capacity (J/kg/K).
    pub specific_heat: f64,
    /// Thermal conductivity (W/m/K).
    pub thermal_conductivity: f64,
    /// Compressibility (1/Pa).
    pub compressibility: f64,
    /// Partial derivative of entropy with respect to pressure.
    pub entropy_derivative_pressure: f64,
    /// Partial derivative of entropy with respect to temperature.
    pub entropy_derivative_temperature: f64,
    /// Reaction rates, one per compositional field.
    pub reaction_terms: ReactionTerms,
}

impl PointResult {
    /// All coefficients zero with `n_compositional_fields` zero reaction terms.
    pub fn zeroed(n_compositional_fields: usize) -> Self {
        Self {
            viscosity: 0.0,
            density: 0.0,
            thermal_expansion_coefficient: 0.0,
            specific_heat: 0.0,
            thermal_conductivity: 0.0,
            compressibility: 0.0,
            entropy_derivative_pressure: 0.0,
            entropy_derivative_temperature: 0.0,
            reaction_terms: SmallVec::from_elem(0.0, n_compositional_fields),
        }
    }
}

/// Results of one evaluation, index-aligned with the input batch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialOutputs {
    results: Vec<PointResult>,
}

impl MaterialOutputs {
    /// Zeroed outputs shaped for `inputs`: one result per point, each with
    /// one reaction term per compositional field at that point.
    pub fn for_inputs(inputs: &MaterialInputs) -> Self {
        Self {
            results: inputs
                .points()
                .iter()
                .map(|p| PointResult::zeroed(p.n_compositional_fields()))
                .collect(),
        }
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether there are no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results in input order.
    pub fn as_slice(&self) -> &[PointResult] {
        &self.results
    }

    /// Mutable results in input order.
    pub fn as_mut_slice(&mut self) -> &mut [PointResult] {
        &mut self.results
    }

    /// Iterate over results in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, PointResult> {
        self.results.iter()
    }

    /// Consume into the underlying vector.
    pub fn into_vec(self) -> Vec<PointResult> {
        self.results
    }
}

impl std::ops::Index<usize> for MaterialOutputs {
    type Output = PointResult;

    fn index(&self, i: usize) -> &PointResult {
        &self.results[i]
    }
}

impl<'a> IntoIterator for &'a MaterialOutputs {
    type Item = &'a PointResult;
    type IntoIter = std::slice::Iter<'a, PointResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
